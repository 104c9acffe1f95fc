//! Scan engine for `portdrift`.
//!
//! * [`network::tcp`]: the single-port TCP connect probe.
//! * [`scanner`]: bounded-concurrency range scanning over a [`scanner::PortProber`].
//! * [`baseline`]: JSON persistence of the last known open-port labels.
//! * [`drift`]: comparison of a scan against the baseline.
//!
//! The scanner never touches the baseline; callers feed its output into
//! [`drift::Drift::between`] and [`baseline::BaselineStore`].

pub mod baseline;
pub mod drift;
pub mod network;
pub mod scanner;
