//! Line-oriented terminal output.
//!
//! Every line is emitted as a `tracing` event under [`PRINT_TARGET`], so it is
//! written through the indicatif writer and never tears the scan progress bar.

use colored::*;
use portdrift_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "portdrift::print";
const DETAIL_KEY_WIDTH: usize = 7;

const NO_OPEN_PORTS: &str = r#"
          _  _  ___    ___  ___ ___ _  _
         | \| |/ _ \  / _ \| _ \ __| \| |
         | .` | (_) || (_) |  _/ _|| .` |
         |_|\_|\___/  \___/|_| |___|_|\_|
            ___  ___  ___ _____ ___
           | _ \/ _ \| _ \_   _/ __|
           |  _/ (_) |   / | | \__ \
           |_|  \___/|_|_\ |_| |___/
"#;

pub fn line(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    line("");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    banner::print();
    let version: String = format!(" v{} ", env!("CARGO_PKG_VERSION"));
    let fill: usize = WIDTH.saturating_sub(version.width());
    line(&format!(
        "{}{}",
        "━".repeat(fill).color(colors::SEPARATOR),
        version.color(colors::ACCENT).bold()
    ));
}

/// A section title, `▌ OPEN PORTS ─────`. Hidden from `-q` on.
pub fn section(title: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let title: String = title.to_uppercase();
    let fill: usize = WIDTH.saturating_sub(title.width() + 3);
    blank();
    line(&format!(
        "{} {} {}",
        "▌".color(colors::ACCENT),
        title.color(colors::PRIMARY).bold(),
        "─".repeat(fill).color(colors::SEPARATOR)
    ));
}

pub fn rule() {
    line(&"═".repeat(WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn note(msg: &str) {
    line(&format!("{} {}", ">".color(colors::SEPARATOR), msg.color(colors::TEXT_DEFAULT)));
}

pub fn centered(msg: &str) {
    let pad: usize = WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    line(&format!("{}{msg}", " ".repeat(pad)));
}

pub fn no_open_ports() {
    line(&NO_OPEN_PORTS.red().bold().to_string());
}

/// `key....: value` lines that share one key column.
pub struct Fields {
    key_width: usize,
}

impl Fields {
    pub fn new(keys: &[&str]) -> Self {
        let key_width: usize = keys.iter().map(|key| key.width()).max().unwrap_or(0);
        Self { key_width }
    }

    pub fn line(&self, key: &str, value: ColoredString) {
        let dots: String = ".".repeat((self.key_width + 1).saturating_sub(key.width()));
        line(&format!(
            "{} {}{}{} {}",
            ">".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// `[idx] heading` with one branch per detail underneath.
pub fn port_tree(idx: usize, heading: &ColoredString, details: &[(&str, ColoredString)]) {
    line(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        heading
    ));

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        let dots: String = ".".repeat(DETAIL_KEY_WIDTH.saturating_sub(key.width()));
        line(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}
