//! loglevel-file
//!
//! A level-based logger with a replaceable method factory, and a plugin that
//! uses that extension point to save messages to a file.
//!
//! ## File sink
//!
//! `attach` truncates the target file, then wraps the logger's method
//! factory so that every method:
//! - appends a line to the file when its level is at least `level`
//! - forwards `method_name: message` to the original method when its level
//!   is at least `console_level`
//!
//! ```rust,no_run
//! use loglevel_file::{attach, FileSaveOptions, Logger, LogLevel};
//!
//! let mut logger = Logger::new("app");
//! attach(
//!     &mut logger,
//!     FileSaveOptions::new("app.log")
//!         .with_level(LogLevel::Info)
//!         .with_console_level(LogLevel::Error)
//!         .with_formatter(|method, message| format!("[{}] {}", method, message)),
//! )?;
//!
//! logger.info("written to app.log only")?;
//! logger.error("written to app.log and printed to stderr")?;
//! # Ok::<(), loglevel_file::LogError>(())
//! ```

pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod bridge;

pub use error::{LogError, LogResult};

pub use level::{LevelTable, LogLevel};

pub use logger::{
    Logger, LogMethod, MethodFactory, PluggableLogger, SharedLogger,
    get_logger, get_root_logger, console_factory,
};

pub use sink::{attach, load_options, FileSaveOptions, OptionsFile, Prefix};

pub use bridge::{sync_max_level, LogBridge};
