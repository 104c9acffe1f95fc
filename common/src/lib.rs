//! Shared models and helpers for the `portdrift` workspace.
//!
//! * [`network`]: port ranges and the well-known service table.
//! * [`config`]: scanner tuning and terminal presentation settings.
//! * [`error`]: configuration and scan errors.
//! * [`log`]: status macros layered on top of `tracing`.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
