use std::time::Duration;

use portdrift_common::config::ScanConfig;
use tokio::net::TcpListener;

pub const LOOPBACK: &str = "127.0.0.1";

/// Binds a listener on an ephemeral loopback port. Keep it alive for as long
/// as the port must stay open.
pub async fn open_port() -> anyhow::Result<(TcpListener, u16)> {
    let listener = TcpListener::bind((LOOPBACK, 0)).await?;
    let port = listener.local_addr()?.port();
    Ok((listener, port))
}

/// A loopback port that was just released, so nothing should be listening.
pub async fn closed_port() -> anyhow::Result<u16> {
    let (listener, port) = open_port().await?;
    drop(listener);
    Ok(port)
}

/// Loopback answers fast, a short timeout keeps the suite quick.
pub fn quick_config(concurrency: usize) -> anyhow::Result<ScanConfig> {
    Ok(ScanConfig::new(concurrency, Duration::from_millis(300))?)
}
