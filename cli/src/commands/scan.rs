use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use portdrift_common::config::{Config, ScanConfig};
use portdrift_common::error::ScanError;
use portdrift_common::network::range::PortRange;
use portdrift_common::network::services;
use portdrift_common::{info, success, warn};
use portdrift_core::baseline::{BaselineAction, BaselineStore};
use portdrift_core::drift::Drift;
use portdrift_core::scanner::PortScanner;
use tracing::Instrument;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::ScanArgs;
use crate::terminal::format::{self, PortStatus};
use crate::terminal::input::KeyListener;
use crate::terminal::{colors, print, progress};

pub async fn scan(args: ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let range: PortRange = args.port_range();
    let scan_cfg: ScanConfig = args.scan_config()?;

    let store = BaselineStore::new(&args.baseline_file);
    let baseline_existed: bool = store.exists();
    let baseline: Vec<String> = store
        .load()
        .await
        .with_context(|| format!("loading baseline from {}", store.path().display()))?;

    print_plan(&args, range, &scan_cfg, &store, baseline.len(), cfg);

    let stop: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
    let listener: Option<KeyListener> = if cfg.disable_input {
        None
    } else {
        KeyListener::start(Arc::clone(&stop))
    };

    let start_time: Instant = Instant::now();
    let outcome = run_scan(&args.target, range, scan_cfg, stop).await;
    drop(listener);

    let open_ports: Vec<u16> = match outcome {
        Ok(open_ports) => open_ports,
        Err(ScanError::Cancelled) => {
            warn!("Scan cancelled, baseline left untouched");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let current: Vec<String> = services::labels(&open_ports);
    let drift: Drift = Drift::between(&baseline, &current);

    print_drift(&drift, cfg);
    print_open_ports(&open_ports, &baseline, cfg);

    let action = BaselineAction::decide(baseline_existed, args.update_baseline);
    apply_baseline_action(action, &store, &current, args.keep_history).await?;

    print_summary(&args.target, open_ports.len(), range, start_time.elapsed(), cfg);
    Ok(())
}

async fn run_scan(
    target: &str,
    range: PortRange,
    scan_cfg: ScanConfig,
    stop: Arc<AtomicBool>,
) -> Result<Vec<u16>, ScanError> {
    let span = progress::scan_span(u64::try_from(range.len()).unwrap_or(u64::MAX));
    let progress_span = span.clone();
    let open_count: AtomicUsize = AtomicUsize::new(0);

    let scanner = PortScanner::new(scan_cfg)?
        .with_stop_signal(stop)
        .on_probe_done(move |port, is_open| {
            progress_span.pb_inc(1);
            if is_open {
                let count = open_count.fetch_add(1, Ordering::Relaxed) + 1;
                progress::report_open_port(&progress_span, count, port);
            }
        });

    scanner.scan(target, range).instrument(span).await
}

fn print_plan(
    args: &ScanArgs,
    range: PortRange,
    scan_cfg: &ScanConfig,
    store: &BaselineStore,
    baseline_len: usize,
    cfg: &Config,
) {
    if cfg.quiet > 1 {
        return;
    }

    let fields = print::Fields::new(&["Target", "Ports", "Workers", "Timeout", "Baseline"]);
    fields.line("Target", args.target.as_str().color(colors::ACCENT));
    fields.line(
        "Ports",
        format!("{range} ({} ports)", range.len()).color(colors::TEXT_DEFAULT),
    );
    fields.line(
        "Workers",
        scan_cfg.concurrency.to_string().color(colors::TEXT_DEFAULT),
    );
    fields.line(
        "Timeout",
        format!("{}ms", scan_cfg.timeout.as_millis()).color(colors::TEXT_DEFAULT),
    );
    fields.line(
        "Baseline",
        format!("{} ({baseline_len} labels)", store.path().display()).color(colors::TEXT_DEFAULT),
    );
}

fn print_drift(drift: &Drift, cfg: &Config) {
    print::section("drift report", cfg.quiet);

    if drift.is_clean() {
        success!("No new ports. Looks good!");
    } else {
        warn!(
            "ALERT: new open ports: {}",
            format::label_list(&drift.new, colors::PORT_NEW)
        );
    }

    if drift.is_unchanged() && cfg.quiet == 0 {
        print::note("Open ports match the baseline exactly");
    } else if !drift.closed.is_empty() {
        warn!(
            "Ports closed since last run: {}",
            format::label_list(&drift.closed, colors::PORT_CLOSED)
        );
    }
}

fn print_open_ports(open_ports: &[u16], baseline: &[String], cfg: &Config) {
    if open_ports.is_empty() {
        print::section("zero open ports", cfg.quiet);
        if cfg.quiet == 0 {
            print::no_open_ports();
        }
        return;
    }

    print::section("open ports", cfg.quiet);
    let known: HashSet<&str> = baseline.iter().map(String::as_str).collect();

    for (idx, port) in open_ports.iter().copied().enumerate() {
        let label: String = services::label(port);
        let status = if known.contains(label.as_str()) {
            PortStatus::Known
        } else {
            PortStatus::New
        };

        if cfg.quiet > 1 {
            print::line(&label);
        } else {
            print::port_tree(idx, &format::port_heading(port), &format::port_details(port, status));
        }
    }
}

fn print_summary(target: &str, open_len: usize, range: PortRange, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let open_ports: ColoredString = format!("{open_len} open ports").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "Scan Complete: {open_ports} on {target} across {} ports in {total_time}",
        range.len()
    )
    .color(colors::TEXT_DEFAULT)
    .to_string();

    if cfg.quiet == 0 {
        print::rule();
        print::centered(&output);
        print::rule();
    } else {
        print::blank();
        success!("{output}");
    }
}

async fn apply_baseline_action(
    action: BaselineAction,
    store: &BaselineStore,
    current: &[String],
    keep_history: bool,
) -> anyhow::Result<()> {
    if !action.writes() {
        info!("Baseline not updated, pass --update-baseline to overwrite it");
        return Ok(());
    }

    let path = store.path().display();
    match action {
        BaselineAction::Create => info!("No baseline found, creating baseline at '{path}'"),
        _ => info!("Updating baseline at '{path}' (keep_history={keep_history})"),
    }

    let history = store
        .save(current, keep_history)
        .await
        .with_context(|| format!("writing baseline to {path}"))?;

    if let Some(history) = history {
        success!("History snapshot saved to '{}'", history.display());
    }
    success!("Baseline saved with {} labels", current.len());
    Ok(())
}
