//! Logging macros layered on top of `tracing`.
//!
//! Both macros log under a dedicated target so the terminal formatter can give
//! them their own symbol, and so critical entries are easy to grep for in the
//! diagnostic log.

pub const SUCCESS_TARGET: &str = "pregame::success";
pub const CRITICAL_TARGET: &str = "pregame::critical";

/// Logs a completed operation at `INFO` level.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}

/// Logs an unrecoverable condition at `ERROR` level.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        $crate::tracing::error!(target: $crate::log::CRITICAL_TARGET, $($arg)+)
    };
}
