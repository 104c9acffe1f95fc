use portdrift_common::network::range::PortRange;
use portdrift_common::network::services;
use portdrift_core::baseline::{BaselineAction, BaselineStore};
use portdrift_core::drift::Drift;
use portdrift_core::scanner::PortScanner;
use tempfile::TempDir;

use crate::util::{LOOPBACK, open_port, quick_config};

/// First run creates the baseline, a later run with a new listener reports it
/// as drift and leaves the baseline alone unless asked to update.
#[tokio::test]
async fn new_listener_shows_up_as_drift() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = BaselineStore::new(dir.path().join("baseline.json"));
    let scanner = PortScanner::new(quick_config(4)?)?;

    let (_first_listener, first) = open_port().await?;
    let open = scanner.scan(LOOPBACK, PortRange::single(first)?).await?;
    let current = services::labels(&open);
    assert_eq!(
        BaselineAction::decide(store.exists(), false),
        BaselineAction::Create
    );
    store.save(&current, false).await?;

    let (_second_listener, second) = open_port().await?;
    let mut open = scanner.scan(LOOPBACK, PortRange::single(first)?).await?;
    open.extend(scanner.scan(LOOPBACK, PortRange::single(second)?).await?);
    let later = services::labels(&open);

    let drift = Drift::between(&store.load().await?, &later);

    assert_eq!(drift.new, vec![services::label(second)]);
    assert!(drift.closed.is_empty());
    assert_eq!(
        BaselineAction::decide(store.exists(), false),
        BaselineAction::Keep
    );
    Ok(())
}

#[tokio::test]
async fn closed_listener_shows_up_as_closed_drift() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = BaselineStore::new(dir.path().join("baseline.json"));
    let scanner = PortScanner::new(quick_config(4)?)?;

    let (listener, port) = open_port().await?;
    let before = services::labels(&scanner.scan(LOOPBACK, PortRange::single(port)?).await?);
    store.save(&before, true).await?;
    drop(listener);

    let after = services::labels(&scanner.scan(LOOPBACK, PortRange::single(port)?).await?);
    let drift = Drift::between(&store.load().await?, &after);

    assert!(drift.is_clean());
    assert_eq!(drift.closed, vec![services::label(port)]);
    Ok(())
}
