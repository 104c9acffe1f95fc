use portdrift_common::error::ScanError;
use portdrift_common::network::range::PortRange;
use portdrift_core::scanner::{self, PortScanner};

use crate::util::{LOOPBACK, closed_port, open_port, quick_config};

/// A listener on `p` scanned as `[p-k, p]` must show up as the last element.
#[tokio::test]
async fn listening_port_is_last_in_range() -> anyhow::Result<()> {
    let (_listener, port) = open_port().await?;
    let start = port.saturating_sub(5).max(1);

    let open = PortScanner::new(quick_config(50)?)?
        .scan(LOOPBACK, PortRange::new(start, port)?)
        .await?;

    assert_eq!(open.last(), Some(&port), "open ports: {open:?}");
    assert!(open.windows(2).all(|w| w[0] < w[1]), "not ascending: {open:?}");
    assert!(open.iter().all(|p| (start..=port).contains(p)));
    Ok(())
}

#[tokio::test]
async fn single_port_matches_degenerate_range() -> anyhow::Result<()> {
    let (_listener, port) = open_port().await?;
    let scanner = PortScanner::new(quick_config(4)?)?;

    let single: PortRange = port.to_string().parse()?;
    let degenerate: PortRange = format!("{port}-{port}").parse()?;

    assert_eq!(scanner.scan(LOOPBACK, single).await?, vec![port]);
    assert_eq!(scanner.scan(LOOPBACK, degenerate).await?, vec![port]);
    Ok(())
}

#[tokio::test]
async fn nothing_listening_yields_empty_result() -> anyhow::Result<()> {
    let port = closed_port().await?;

    let open = scanner::scan_range(LOOPBACK, port, port, 1).await?;

    assert!(open.is_empty());
    Ok(())
}

#[tokio::test]
async fn repeated_scans_agree() -> anyhow::Result<()> {
    let (_listener, port) = open_port().await?;
    let start = port.saturating_sub(3).max(1);
    let scanner = PortScanner::new(quick_config(16)?)?;
    let range = PortRange::new(start, port)?;

    let first = scanner.scan(LOOPBACK, range).await?;
    let second = scanner.scan(LOOPBACK, range).await?;

    assert!(first.contains(&port));
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn invalid_input_fails_before_probing() {
    assert_eq!(
        scanner::scan_range(LOOPBACK, 10011, 5000, 10).await,
        Err(ScanError::InvalidRange {
            start: 10011,
            end: 5000
        })
    );
    assert!(matches!(
        scanner::scan_range(LOOPBACK, 0, 10, 10).await,
        Err(ScanError::InvalidRange { .. })
    ));
    assert_eq!(
        scanner::scan_range(LOOPBACK, 1, 10, 0).await,
        Err(ScanError::InvalidConcurrency)
    );
    assert!(matches!(
        "1-70000".parse::<PortRange>(),
        Err(ScanError::PortOutOfBounds(_))
    ));
}

#[tokio::test]
async fn unresolvable_target_reports_nothing_open() -> anyhow::Result<()> {
    let open = PortScanner::new(quick_config(4)?)?
        .scan("host.invalid", PortRange::new(80, 82)?)
        .await?;

    assert!(open.is_empty());
    Ok(())
}
