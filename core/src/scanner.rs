//! Bounded-concurrency TCP range scanning.
//!
//! The scanner depends only on the [`PortProber`] abstraction, so the probing
//! technique (plain TCP connect today, see [`TcpConnectProber`]) can be
//! swapped without touching the orchestration below.
//!
//! **Concurrency model:** one task per port, gated by a semaphore holding
//! `concurrency` permits. A permit is acquired *before* the task is spawned and
//! is released when the task ends (normally, by panic or by abort), so no more
//! than `concurrency` probes are ever outstanding. Finished tasks drain into a
//! single collector, which is the only writer of the open-port list.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use portdrift_common::config::ScanConfig;
use portdrift_common::error::ScanError;
use portdrift_common::network::range::PortRange;
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinError, JoinSet};
use tracing::debug;

pub use crate::network::tcp::TcpConnectProber;

/// Called once per finished probe with the port and whether it was open.
pub type ProbeCallback = Arc<dyn Fn(u16, bool) + Send + Sync>;

/// Defines the strategy for deciding whether a single TCP port is open.
///
/// Implementations must fold every failure into `false`; the scanner never
/// sees an error from a probe.
#[async_trait]
pub trait PortProber: Send + Sync + 'static {
    async fn probe(&self, addr: &str, port: u16, timeout: Duration) -> bool;
}

pub struct PortScanner<P = TcpConnectProber> {
    prober: Arc<P>,
    config: ScanConfig,
    on_probe_done: Option<ProbeCallback>,
    stop_signal: Option<Arc<AtomicBool>>,
}

impl PortScanner<TcpConnectProber> {
    /// A scanner using plain TCP connect probes.
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        Self::with_prober(TcpConnectProber, config)
    }
}

impl<P: PortProber> PortScanner<P> {
    pub fn with_prober(prober: P, config: ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self {
            prober: Arc::new(prober),
            config,
            on_probe_done: None,
            stop_signal: None,
        })
    }

    /// Registers a hook fired after every probe, e.g. to drive a progress bar.
    pub fn on_probe_done<F>(mut self, callback: F) -> Self
    where
        F: Fn(u16, bool) + Send + Sync + 'static,
    {
        self.on_probe_done = Some(Arc::new(callback));
        self
    }

    /// Lets another party cancel the scan by raising `stop`.
    ///
    /// Once raised, no further probes are dispatched, in-flight probes are
    /// aborted and [`PortScanner::scan`] returns [`ScanError::Cancelled`].
    pub fn with_stop_signal(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop_signal = Some(stop);
        self
    }

    /// Probes every port of `range` on `target` and returns the open ones in
    /// ascending order.
    pub async fn scan(&self, target: &str, range: PortRange) -> Result<Vec<u16>, ScanError> {
        let started: Instant = Instant::now();
        let target: Arc<str> = Arc::from(target);
        // Never more permits than ports; tokio rejects anything above MAX_PERMITS.
        let workers: usize = self.config.concurrency.min(range.len());
        let permits: Arc<Semaphore> = Arc::new(Semaphore::new(workers));

        let mut tasks: JoinSet<bool> = JoinSet::new();
        let mut in_flight: HashMap<Id, u16> = HashMap::new();
        let mut open_ports: Vec<u16> = Vec::new();

        debug!(
            addr = %target,
            %range,
            workers,
            timeout = ?self.config.timeout,
            "dispatching probes"
        );

        for port in range {
            if self.is_stopped() {
                tasks.abort_all();
                return Err(ScanError::Cancelled);
            }

            let permit = Arc::clone(&permits)
                .acquire_owned()
                .await
                .map_err(|_| ScanError::Cancelled)?;

            let prober: Arc<P> = Arc::clone(&self.prober);
            let addr: Arc<str> = Arc::clone(&target);
            let timeout: Duration = self.config.timeout;

            let handle = tasks.spawn(async move {
                let _permit = permit;
                prober.probe(&addr, port, timeout).await
            });
            in_flight.insert(handle.id(), port);

            while let Some(joined) = tasks.try_join_next_with_id() {
                self.collect(joined, &mut in_flight, &mut open_ports);
            }
        }

        while let Some(joined) = tasks.join_next_with_id().await {
            if self.is_stopped() {
                tasks.abort_all();
                return Err(ScanError::Cancelled);
            }
            self.collect(joined, &mut in_flight, &mut open_ports);
        }

        open_ports.sort_unstable();

        debug!(
            open = open_ports.len(),
            probed = range.len(),
            elapsed = ?started.elapsed(),
            "scan finished"
        );

        Ok(open_ports)
    }

    fn collect(
        &self,
        joined: Result<(Id, bool), JoinError>,
        in_flight: &mut HashMap<Id, u16>,
        open_ports: &mut Vec<u16>,
    ) {
        let (port, is_open) = match joined {
            Ok((id, is_open)) => match in_flight.remove(&id) {
                Some(port) => (port, is_open),
                None => return,
            },
            Err(e) => match in_flight.remove(&e.id()) {
                Some(port) => {
                    debug!(port, error = %e, "probe task failed, treating port as closed");
                    (port, false)
                }
                None => return,
            },
        };

        if is_open {
            open_ports.push(port);
        }
        if let Some(callback) = &self.on_probe_done {
            callback(port, is_open);
        }
    }

    fn is_stopped(&self) -> bool {
        self.stop_signal
            .as_ref()
            .is_some_and(|stop| stop.load(Ordering::Relaxed))
    }
}

/// Scans `start..=end` on `addr` with TCP connect probes, `concurrency` at a
/// time, using the default probe timeout.
///
/// The range and concurrency are validated before any probe is sent.
pub async fn scan_range(
    addr: &str,
    start: u16,
    end: u16,
    concurrency: usize,
) -> Result<Vec<u16>, ScanError> {
    let range: PortRange = PortRange::new(start, end)?;
    let config: ScanConfig = ScanConfig::default().with_concurrency(concurrency);
    PortScanner::new(config)?.scan(addr, range).await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
