//! Route records from the `log` facade into a `Logger`
//!
//! ```no_run
//! use loglevel_file::{attach, get_root_logger, FileSaveOptions, LogBridge};
//!
//! let root = get_root_logger();
//! attach(&mut *root.write(), FileSaveOptions::new("app.log"))?;
//! LogBridge::new(root).install()?;
//!
//! log::warn!("routed through the root logger");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::LogLevel;
use crate::logger::{PluggableLogger, SharedLogger};

/// Records from this crate's targets are its own diagnostics
const OWN_CRATE: &str = env!("CARGO_CRATE_NAME");

/// `log::Log` backend forwarding each record to the matching `Logger` method
///
/// Errors from the logger (e.g. a failed file append) cannot be returned
/// through `log` and are reported on stderr instead.
pub struct LogBridge {
    logger: SharedLogger,
}

impl LogBridge {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    /// Install as the global `log` backend
    ///
    /// The facade's max level is taken from the logger's level now. Call
    /// `install` after `attach`, or call `sync_max_level` whenever the
    /// logger's level changes later.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let filter = level_filter(self.logger.read().level());
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn is_own(target: &str) -> bool {
        target
            .strip_prefix(OWN_CRATE)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    }
}

/// Set the facade's max level to `logger`'s current level
///
/// Records below the max level never reach the bridge, so this must follow
/// any `set_level` (including the one `attach` performs) on an installed
/// logger.
pub fn sync_max_level(logger: &SharedLogger) {
    log::set_max_level(level_filter(logger.read().level()));
}

/// `log` filter letting through everything at or above `level`
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::Trace,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Silent => LevelFilter::Off,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        !Self::is_own(metadata.target())
            && LogLevel::from(metadata.level()) >= self.logger.read().level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(method_name) = LogLevel::from(record.level()).method_name() else {
            return;
        };
        let message = record.args().to_string();
        if let Err(e) = self.logger.read().log(method_name, &message) {
            eprintln!("log bridge: failed to write record: {}", e);
        }
    }

    fn flush(&self) {}
}
