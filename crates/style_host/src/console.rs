//! Log-backed console for styling diagnostics.
//!
//! Diagnostic lines produced by the helpers are routed through a
//! [`HostLogger`] so hosts can forward them to a devtools console, a log file,
//! or a test buffer.

use log::{debug, error, info, trace, warn};
use std::sync::{Mutex, PoisonError};

/// Log severity levels understood by the host logger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Cross-host logger used by diagnostic helpers.
pub trait HostLogger: Send + Sync {
    /// Log a message with a given level.
    fn log(&self, level: LogLevel, message: &str);
}

/// Console provides helper functions to print diagnostic messages. It keeps
/// output routing in one place so it can later be swapped to a different backend.
pub struct Console;

impl Console {
    /// Print a generic log line.
    #[inline]
    pub fn log<M: AsRef<str>>(message: M) {
        info!("[console]: {}", message.as_ref());
    }

    /// Print a debug line.
    #[inline]
    pub fn debug<M: AsRef<str>>(message: M) {
        debug!("[console]: {}", message.as_ref());
    }

    /// Print a warning line.
    #[inline]
    pub fn warn<M: AsRef<str>>(message: M) {
        warn!("[console]: {}", message.as_ref());
    }

    /// Print an error line.
    #[inline]
    pub fn error<M: AsRef<str>>(message: M) {
        error!("[console]: {}", message.as_ref());
    }
}

/// A `HostLogger` implementation that routes to the `Console` helpers.
pub struct ConsoleLogger;

impl HostLogger for ConsoleLogger {
    #[inline]
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => trace!("[console]: {message}"),
            LogLevel::Debug => Console::debug(message),
            LogLevel::Info => Console::log(message),
            LogLevel::Warn => Console::warn(message),
            LogLevel::Error => Console::error(message),
        }
    }
}

/// A `HostLogger` that keeps every line in memory, in emission order.
#[derive(Default)]
pub struct BufferedLogger {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl BufferedLogger {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the logged messages without their levels.
    pub fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Snapshot of the logged lines with their levels.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HostLogger for BufferedLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_logger_keeps_order_and_levels() {
        let logger = BufferedLogger::new();
        logger.log(LogLevel::Info, "first");
        logger.log(LogLevel::Warn, "second");
        assert_eq!(logger.messages(), vec!["first", "second"]);
        assert_eq!(logger.entries()[1].0, LogLevel::Warn);
    }
}
