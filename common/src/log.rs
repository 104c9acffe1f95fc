//! Status macros used across the workspace.
//!
//! These forward to `tracing`, so whichever subscriber the binary installs
//! decides how they are rendered. `success!` is an `INFO` event emitted under
//! the [`SUCCESS_TARGET`] target so formatters can tell it apart.

#[doc(hidden)]
pub use tracing;

pub const SUCCESS_TARGET: &str = "portdrift::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
