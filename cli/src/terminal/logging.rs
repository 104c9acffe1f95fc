use colored::*;
use portdrift_common::log::SUCCESS_TARGET;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::terminal::print::PRINT_TARGET;

const LOG_ENV: &str = "PORTDRIFT_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber: symbol-prefixed log lines plus progress
/// bars for spans flagged with `indicatif.pb_show`.
///
/// Verbosity is read from `PORTDRIFT_LOG` (e.g. `PORTDRIFT_LOG=portdrift_core=trace`).
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(PortdriftFormatter)
        .with_writer(indicatif_layer.get_stdout_writer())
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}

pub struct PortdriftFormatter;

impl<S, N> FormatEvent<S, N> for PortdriftFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == SUCCESS_TARGET {
                ("[✓]", |s| s.bright_green().bold())
            } else {
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[+]", |s| s.green().bold()),
                    Level::WARN => ("[*]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                }
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = format!("{value:?}");
        }
    }
}
