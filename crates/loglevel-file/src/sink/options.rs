//! File sink options

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::level::LogLevel;

/// Separator used when none is configured
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Formats a whole file line from `(method_name, message)`
pub type PrefixFormatter = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Decoration applied to lines written to the file
#[derive(Clone)]
pub enum Prefix {
    /// Prepended to the message
    Literal(String),
    /// Produces the full line
    Formatter(PrefixFormatter),
}

impl Prefix {
    pub fn literal(prefix: impl Into<String>) -> Self {
        Prefix::Literal(prefix.into())
    }

    pub fn formatter<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Prefix::Formatter(Arc::new(f))
    }

    /// Format a line for `method_name`
    pub fn apply(&self, method_name: &str, message: &str) -> String {
        match self {
            Prefix::Literal(prefix) => format!("{}{}", prefix, message),
            Prefix::Formatter(f) => f(method_name, message),
        }
    }
}

impl std::fmt::Debug for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prefix::Literal(prefix) => f.debug_tuple("Literal").field(prefix).finish(),
            Prefix::Formatter(_) => f.write_str("Formatter(..)"),
        }
    }
}

impl From<&str> for Prefix {
    fn from(prefix: &str) -> Self {
        Prefix::literal(prefix)
    }
}

impl From<String> for Prefix {
    fn from(prefix: String) -> Self {
        Prefix::Literal(prefix)
    }
}

/// Options for `attach`
///
/// # Example
///
/// ```
/// use loglevel_file::{FileSaveOptions, LogLevel};
///
/// let options = FileSaveOptions::new("app.log")
///     .with_level(LogLevel::Info)
///     .with_console_level(LogLevel::Error)
///     .with_prefix("[app] ");
/// assert_eq!(options.file_level(), LogLevel::Info);
/// ```
#[derive(Debug, Clone)]
pub struct FileSaveOptions {
    /// Path of the file to write
    pub file: PathBuf,
    /// Line decoration; `method_name: ` when unset
    pub prefix: Option<Prefix>,
    /// Level from which messages still reach the console; never when unset
    pub console_level: Option<LogLevel>,
    /// Record terminator; the platform newline when unset
    pub separator: Option<String>,
    /// Level from which messages are written to the file; `Warn` when unset
    pub level: Option<LogLevel>,
}

impl FileSaveOptions {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            prefix: None,
            console_level: None,
            separator: None,
            level: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Format whole lines with `f(method_name, message)`
    pub fn with_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.prefix = Some(Prefix::formatter(f));
        self
    }

    pub fn with_console_level(mut self, level: LogLevel) -> Self {
        self.console_level = Some(level);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Effective file threshold
    pub fn file_level(&self) -> LogLevel {
        self.level.unwrap_or(LogLevel::Warn)
    }

    /// Effective console threshold
    pub fn console_threshold(&self) -> LogLevel {
        self.console_level.unwrap_or(LogLevel::Silent)
    }

    /// Effective separator
    pub fn separator_or_default(&self) -> &str {
        self.separator.as_deref().unwrap_or(LINE_ENDING)
    }

    /// The line written to the file for a message
    pub fn format_line(&self, method_name: &str, message: &str) -> String {
        match &self.prefix {
            Some(prefix) => prefix.apply(method_name, message),
            None => format!("{}: {}", method_name, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FileSaveOptions::new("out.log");
        assert_eq!(options.file(), Path::new("out.log"));
        assert_eq!(options.file_level(), LogLevel::Warn);
        assert_eq!(options.console_threshold(), LogLevel::Silent);
        assert_eq!(options.separator_or_default(), LINE_ENDING);
    }

    #[test]
    fn test_format_line() {
        let options = FileSaveOptions::new("out.log");
        assert_eq!(options.format_line("error", "boom"), "error: boom");

        let options = options.with_prefix("X: ");
        assert_eq!(options.format_line("error", "boom"), "X: boom");

        let options = options.with_formatter(|m, msg| format!("{}!{}", m, msg));
        assert_eq!(options.format_line("error", "boom"), "error!boom");
    }

    #[test]
    fn test_prefix_debug() {
        assert_eq!(format!("{:?}", Prefix::literal("a")), "Literal(\"a\")");
        assert_eq!(format!("{:?}", Prefix::formatter(|_, m| m.to_string())), "Formatter(..)");
    }
}
