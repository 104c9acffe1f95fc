//! This crate has no `tracing` dependency of its own, so these only build if
//! the status macros resolve through `portdrift_common`.

use portdrift_common::network::services;
use portdrift_common::{error, info, success, warn};

#[test]
fn status_macros_work_without_tracing_dependency() {
    let label = services::label(22);

    info!("scanning {label}");
    success!("open: {label}");
    warn!(port = 22, "new since baseline");
    error!("baseline unreadable");

    assert_eq!(label, "22 (SSH)");
}
