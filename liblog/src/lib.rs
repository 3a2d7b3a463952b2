/*
 * Logging crate for the modbridge workspace.
 *
 * Public surface:
 * - Logger for one-time initialization (config file or programmatic)
 * - LogConfig / LogLevel / LogType for custom configuration
 * - log_debug!, log_info!, log_warn!, log_error! macros that capture the
 *   call site (file, line, module) automatically
 *
 * Logging is synchronous; an uninitialized logger falls back to stderr so
 * early messages are never lost.
 */

mod config;
mod outputs;
mod logger;

pub use config::{LogConfig, LogLevel, LogType};
pub use logger::Logger;

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($method:ident, $message:expr) => {
        $crate::Logger::$method($message, None, file!(), line!(), module_path!())
    };
    ($method:ident, $message:expr, $context:expr) => {
        $crate::Logger::$method($message, $context, file!(), line!(), module_path!())
    };
}

/// Logs at debug level. Takes a message, optionally followed by an
/// `Option<String>` context value.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => { $crate::__log_at!(debug, $($arg)+) };
}

/// Logs at info level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::__log_at!(info, $($arg)+) };
}

/// Logs at warn level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => { $crate::__log_at!(warn, $($arg)+) };
}

/// Logs at error level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::__log_at!(error, $($arg)+) };
}
