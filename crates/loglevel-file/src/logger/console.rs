//! Console method factory

use std::sync::Arc;

use super::traits::{LogMethod, MethodFactory};
use crate::error::LogResult;
use crate::level::LogLevel;

/// Where a console method writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

impl ConsoleStream {
    /// `info` goes to stdout, everything else to stderr
    pub fn for_method(method_name: &str) -> Self {
        if method_name.eq_ignore_ascii_case("info") {
            ConsoleStream::Stdout
        } else {
            ConsoleStream::Stderr
        }
    }
}

/// A method that prints its message unchanged to the console
pub fn console_method(method_name: &str) -> LogMethod {
    match ConsoleStream::for_method(method_name) {
        ConsoleStream::Stdout => Arc::new(|message: &str| -> LogResult<()> {
            println!("{}", message);
            Ok(())
        }),
        ConsoleStream::Stderr => Arc::new(|message: &str| -> LogResult<()> {
            eprintln!("{}", message);
            Ok(())
        }),
    }
}

/// The factory every `Logger` starts with
pub fn console_factory() -> MethodFactory {
    Arc::new(|method_name: &str, _level: Option<LogLevel>, _logger_name: &str| {
        console_method(method_name)
    })
}
