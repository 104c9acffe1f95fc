use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

const TEMPLATE: &str =
    "{spinner:.blue} {msg} [{bar:30.green/bright_black}] {pos}/{len} ports ({eta})";

/// A span that renders as a progress bar over `total` probes while instrumented.
pub fn scan_span(total: u64) -> Span {
    let span: Span = info_span!("scan", indicatif.pb_show = true);
    span.pb_set_style(&style());
    span.pb_set_length(total);
    span.pb_set_message("Probing ports, press 'q' to cancel");
    span
}

pub fn report_open_port(span: &Span, open_count: usize, port: u16) {
    span.pb_set_message(&format!("{open_count} open so far, latest {port}"));
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("█▓░")
}
