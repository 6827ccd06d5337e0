//! Structured logging for the liquidator
//!
//! ```rust,ignore
//! use pumpfun_liquidator::logger::{self, LogTag};
//!
//! logger::info(LogTag::Scanner, "Found 3 token accounts");
//! logger::debug(LogTag::Rpc, "getAccountInfo ..."); // Only with --debug rpc
//! ```
//!
//! Call `logger::init` once at startup with the config built from CLI flags.
//! Without it every tag logs at info level.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Install the logger configuration. Must run before the first log call.
pub fn init(config: LoggerConfig) {
    if !set_logger_config(config) {
        warning(LogTag::System, "Logger already initialized, keeping existing config");
    }
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only shown with `--debug <tag>`
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, only shown with `--verbose`
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
