use thiserror::Error;

/// Errors raised before or while scanning a port range.
///
/// Everything except [`ScanError::Cancelled`] is a configuration error: it is
/// detected before the first probe is dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Invalid port range: {start}-{end} (expected 1 <= start <= end <= 65535)")]
    InvalidRange { start: u32, end: u32 },

    #[error("Port out of bounds: {0} (expected 1-65535)")]
    PortOutOfBounds(String),

    #[error("Malformed port range: '{0}'")]
    MalformedRange(String),

    #[error("Concurrency must be at least 1")]
    InvalidConcurrency,

    #[error("Probe timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Scan cancelled before completion")]
    Cancelled,
}

