//! File sink plugin
//!
//! Redirects messages at or above a level to a file, optionally letting some
//! of them through to the logger's original methods.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::options::FileSaveOptions;
use crate::error::{LogError, LogResult};
use crate::level::LogLevel;
use crate::logger::{LogMethod, Logger, MethodFactory, PluggableLogger};

/// Extend `logger` so that its methods also write to `options.file`
///
/// The file is created (or truncated) before the logger is touched. Each
/// method then appends `line + separator` when its level is at least the
/// file level, and forwards `method_name: message` to the original method
/// when its level is at least the console level. The logger's level is set
/// to the lower of the two thresholds.
///
/// Attaching twice truncates the file again and stacks a second layer on
/// top of the first.
///
/// # Example
///
/// ```no_run
/// use loglevel_file::{attach, FileSaveOptions, Logger, LogLevel};
///
/// let mut logger = Logger::new("app");
/// attach(&mut logger, FileSaveOptions::new("app.log").with_level(LogLevel::Info))?;
/// logger.warn("disk almost full")?;
/// # Ok::<(), loglevel_file::LogError>(())
/// ```
pub fn attach<'a, L>(logger: &'a mut L, options: FileSaveOptions) -> LogResult<&'a mut L>
where
    L: PluggableLogger + ?Sized,
{
    let original_factory = logger.method_factory().ok_or_else(|| {
        LogError::Configuration(
            "loglevel instance has to be specified in order to be extended".to_string(),
        )
    })?;

    let path = resolve_path(options.file())?;
    // Created once up front so later appends never race file creation
    fs::write(&path, "")?;

    let file_level = options.file_level();
    let console_level = options.console_threshold();
    log::debug!(
        "attached file sink to logger {:?}: file={} level={} console_level={}",
        logger.name(),
        path.display(),
        file_level,
        console_level
    );

    let route = Arc::new(Route {
        path,
        file_level,
        console_level,
        options,
    });

    let factory: MethodFactory = Arc::new(
        move |method_name: &str, method_level: Option<LogLevel>, logger_name: &str| {
            let raw_method = original_factory(method_name, method_level, logger_name);
            let route = route.clone();
            let method_name = method_name.to_string();
            let method: LogMethod = Arc::new(move |message: &str| -> LogResult<()> {
                route.dispatch(&method_name, method_level, message, &raw_method)
            });
            method
        },
    );

    logger.set_method_factory(factory);
    logger.set_level(file_level.min(console_level));
    Ok(logger)
}

impl Logger {
    /// Fluent form of `attach` for an owned logger
    pub fn with_file_sink(mut self, options: FileSaveOptions) -> LogResult<Self> {
        attach(&mut self, options)?;
        Ok(self)
    }
}

/// Absolute form of `path`, relative to the current directory
fn resolve_path(path: &Path) -> LogResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(LogError::Configuration("file path must not be empty".to_string()));
    }
    Ok(std::path::absolute(path)?)
}

/// Routing state shared by every method of one attached sink
struct Route {
    path: PathBuf,
    file_level: LogLevel,
    console_level: LogLevel,
    options: FileSaveOptions,
}

impl Route {
    /// Route one call; an unranked method (`msg_level == None`) goes nowhere
    fn dispatch(
        &self,
        method_name: &str,
        msg_level: Option<LogLevel>,
        message: &str,
        raw_method: &LogMethod,
    ) -> LogResult<()> {
        let Some(msg_level) = msg_level else {
            log::trace!("dropping message for unranked method {:?}", method_name);
            return Ok(());
        };

        if msg_level >= self.file_level {
            let line = self.options.format_line(method_name, message);
            self.append(&line)?;
        }
        if msg_level >= self.console_level {
            raw_method(&format!("{}: {}", method_name, message))?;
        }
        Ok(())
    }

    fn append(&self, line: &str) -> LogResult<()> {
        let mut file = OpenOptions::new().append(true).create(true).open(&self.path)?;
        let mut record = String::with_capacity(line.len() + 2);
        record.push_str(line);
        record.push_str(self.options.separator_or_default());
        file.write_all(record.as_bytes())?;
        Ok(())
    }
}
