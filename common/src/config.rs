use std::time::Duration;

use crate::error::ScanError;

pub const DEFAULT_CONCURRENCY: usize = 200;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(200);

/// Terminal presentation settings shared by the CLI commands.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// `0` prints everything, `1` drops decorations, `2` prints only results.
    pub quiet: u8,
    /// Disables the key listener, so the scan cannot be cancelled with `q`.
    pub disable_input: bool,
}

/// Tuning for a range scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum number of probes in flight at any instant.
    pub concurrency: usize,
    /// How long a single probe waits before declaring the port closed.
    ///
    /// Short values finish sweeps faster but under-report open ports on
    /// high-latency links.
    pub timeout: Duration,
}

impl ScanConfig {
    pub fn new(concurrency: usize, timeout: Duration) -> Result<Self, ScanError> {
        let cfg = Self {
            concurrency,
            timeout,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if self.concurrency == 0 {
            return Err(ScanError::InvalidConcurrency);
        }
        if self.timeout.is_zero() {
            return Err(ScanError::InvalidTimeout);
        }
        Ok(())
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}
