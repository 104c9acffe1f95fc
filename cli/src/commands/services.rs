use colored::*;
use portdrift_common::config::Config;
use portdrift_common::network::services;

use crate::terminal::{colors, print};

pub fn services(cfg: &Config) {
    let table: &[(u16, &str)] = services::known();

    if cfg.quiet > 1 {
        for (port, _) in table {
            print::line(&services::label(*port));
        }
        return;
    }

    let ports: Vec<String> = table.iter().map(|(port, _)| port.to_string()).collect();
    let keys: Vec<&str> = ports.iter().map(String::as_str).collect();
    let fields = print::Fields::new(&keys);

    for (key, (_, name)) in keys.iter().zip(table) {
        fields.line(key, name.color(colors::PORT_KNOWN));
    }

    if cfg.quiet == 0 {
        print::blank();
        print::note(&format!(
            "{} ports mapped, anything else is labelled '{}'",
            table.len(),
            services::UNKNOWN_SERVICE
        ));
    }
}
