//! Extension point shared by loggers and the plugins that wrap them

use std::sync::Arc;

use crate::error::LogResult;
use crate::level::{LevelTable, LogLevel};

/// A built logging method: takes one message
///
/// Returns an error when a plugin's side effect (e.g. a file append) fails.
pub type LogMethod = Arc<dyn Fn(&str) -> LogResult<()> + Send + Sync>;

/// Produces the logging method for `(method_name, method_level, logger_name)`
///
/// `method_level` is `None` when the logger's level table does not rank
/// `method_name`.
pub type MethodFactory = Arc<dyn Fn(&str, Option<LogLevel>, &str) -> LogMethod + Send + Sync>;

/// Capabilities a logger must expose for plugins to extend it
///
/// Implementations:
/// - `Logger`: the level-based logger of this crate
/// - Custom loggers: anything that can hand out and swap its method factory
pub trait PluggableLogger {
    /// Logger name, passed to the method factory
    fn name(&self) -> &str;

    /// Name → severity table used to rank methods
    fn levels(&self) -> &LevelTable;

    /// Current method factory
    ///
    /// `None` means the logger cannot be extended.
    fn method_factory(&self) -> Option<MethodFactory>;

    /// Replace the method factory
    ///
    /// Loggers may defer rebuilding their methods until the next `set_level`.
    fn set_method_factory(&mut self, factory: MethodFactory);

    /// Set the active level and rebuild the logging methods
    fn set_level(&mut self, level: LogLevel);

    /// Active level
    fn level(&self) -> LogLevel;
}
