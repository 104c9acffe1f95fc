pub mod scan;
pub mod services;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use portdrift_common::config::{DEFAULT_CONCURRENCY, DEFAULT_PROBE_TIMEOUT, ScanConfig};
use portdrift_common::error::ScanError;
use portdrift_common::network::range::PortRange;
use portdrift_core::baseline::DEFAULT_BASELINE_FILE;

const DEFAULT_TIMEOUT_MS: u64 = DEFAULT_PROBE_TIMEOUT.as_millis() as u64;

#[derive(Parser)]
#[command(name = "portdrift", version)]
#[command(about = "A TCP port sweeper that alerts on drift from a saved baseline.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat for results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not listen for 'q' to cancel a running scan
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep a host's TCP ports and compare them with the baseline
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// List the well-known services used to label open ports
    #[command(alias = "sv")]
    Services,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Host name or IP address to scan
    #[arg(long, default_value = "127.0.0.1")]
    pub target: String,

    /// Scan every port (1-65535)
    #[arg(long, conflicts_with = "range")]
    pub all: bool,

    /// Port range like 1-1024, or a single port like 80 [default: 1-1024]
    #[arg(long, value_name = "START-END|PORT")]
    pub range: Option<PortRange>,

    /// Maximum number of probes in flight
    #[arg(long, visible_alias = "concurrency", default_value_t = DEFAULT_CONCURRENCY)]
    pub threads: usize,

    /// Per-probe connect timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Overwrite the baseline with this scan
    #[arg(long)]
    pub update_baseline: bool,

    /// Path to the baseline file
    #[arg(long, default_value = DEFAULT_BASELINE_FILE)]
    pub baseline_file: PathBuf,

    /// When writing the baseline, also keep a timestamped copy
    #[arg(long)]
    pub keep_history: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ScanArgs {
    pub fn port_range(&self) -> PortRange {
        if self.all {
            return PortRange::FULL;
        }
        self.range.unwrap_or_default()
    }

    pub fn scan_config(&self) -> Result<ScanConfig, ScanError> {
        ScanConfig::new(self.threads, Duration::from_millis(self.timeout))
    }
}
