use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use crate::scanner::PortProber;

/// Attempts a TCP handshake with `addr:port` and reports whether it succeeded
/// within `probe_timeout`.
///
/// Name resolution runs inside the timeout window. Refused connections,
/// resolution failures, unreachable networks and expired timeouts all yield
/// `false`. The socket is owned by this call and dropped on every path.
pub async fn probe(addr: &str, port: u16, probe_timeout: Duration) -> bool {
    match timeout(probe_timeout, TcpStream::connect((addr, port))).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) => {
            trace!(port, error = %e, "probe refused");
            false
        }
        Err(_elapsed) => {
            trace!(port, "probe timed out");
            false
        }
    }
}

/// Full TCP connect probing, no privileges required.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnectProber;

#[async_trait]
impl PortProber for TcpConnectProber {
    async fn probe(&self, addr: &str, port: u16, probe_timeout: Duration) -> bool {
        probe(addr, port, probe_timeout).await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

    #[tokio::test]
    async fn probe_should_find_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(probe("127.0.0.1", port, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn probe_should_report_closed_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        assert!(!probe("127.0.0.1", port, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn probe_should_swallow_resolution_failure() {
        assert!(!probe("host.invalid", 80, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn prober_trait_matches_free_function() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let prober = TcpConnectProber;
        assert!(prober.probe("127.0.0.1", port, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    #[ignore]
    async fn probe_should_timeout_on_unreachable_ip() {
        assert!(!probe("203.0.113.1", 443, Duration::from_millis(100)).await);
    }
}
