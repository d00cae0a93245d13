//! Level-based logger with a replaceable method factory

use std::collections::HashMap;

use super::console::console_factory;
use super::noop::noop_method;
use super::traits::{LogMethod, MethodFactory, PluggableLogger};
use crate::error::{LogError, LogResult};
use crate::level::{LevelTable, LogLevel};

/// Level a new logger starts at
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Warn;

/// A named logger whose methods are built by a method factory
///
/// Each method is rebuilt on `set_level`: methods ranked below the active
/// level become no-ops, the rest come from the factory. Plugins extend the
/// logger by swapping the factory and calling `set_level`.
///
/// # Example
///
/// ```
/// use loglevel_file::{Logger, LogLevel, PluggableLogger};
///
/// let mut logger = Logger::new("app");
/// logger.set_level(LogLevel::Info);
/// logger.info("started").unwrap();
/// ```
pub struct Logger {
    name: String,
    levels: LevelTable,
    method_names: Vec<String>,
    factory: Option<MethodFactory>,
    level: LogLevel,
    methods: HashMap<String, LogMethod>,
}

impl Logger {
    /// Create a logger printing to the console at `DEFAULT_LEVEL`
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(name.into(), Some(console_factory()))
    }

    /// Create a logger with no method factory
    ///
    /// Every method is a no-op and plugins cannot extend it.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::build(name.into(), None)
    }

    /// Create a logger with a custom method factory
    pub fn with_factory(name: impl Into<String>, factory: MethodFactory) -> Self {
        Self::build(name.into(), Some(factory))
    }

    fn build(name: String, factory: Option<MethodFactory>) -> Self {
        let method_names = LogLevel::ALL
            .iter()
            .filter_map(|level| level.method_name())
            .map(str::to_string)
            .collect();

        let mut logger = Self {
            name,
            levels: LevelTable::new(),
            method_names,
            factory,
            level: DEFAULT_LEVEL,
            methods: HashMap::new(),
        };
        logger.rebuild_methods();
        logger
    }

    /// Mutable access to the level table, e.g. to rank custom methods
    ///
    /// Changes apply at the next `set_level`.
    pub fn levels_mut(&mut self) -> &mut LevelTable {
        &mut self.levels
    }

    /// Add a logging method callable through `log`
    pub fn define_method(&mut self, method_name: impl Into<String>) {
        let method_name = method_name.into();
        if !self.method_names.contains(&method_name) {
            self.method_names.push(method_name);
            self.rebuild_methods();
        }
    }

    /// Names of every method this logger defines
    pub fn method_names(&self) -> &[String] {
        &self.method_names
    }

    /// Log any defined method by name
    pub fn log(&self, method_name: &str, message: &str) -> LogResult<()> {
        let method = self
            .methods
            .get(method_name)
            .ok_or_else(|| LogError::UnknownMethod(method_name.to_string()))?;
        method(message)
    }

    /// Log a trace message
    pub fn trace(&self, message: &str) -> LogResult<()> {
        self.log("trace", message)
    }

    /// Log a debug message
    pub fn debug(&self, message: &str) -> LogResult<()> {
        self.log("debug", message)
    }

    /// Log an info message
    pub fn info(&self, message: &str) -> LogResult<()> {
        self.log("info", message)
    }

    /// Log a warning message
    pub fn warn(&self, message: &str) -> LogResult<()> {
        self.log("warn", message)
    }

    /// Log an error message
    pub fn error(&self, message: &str) -> LogResult<()> {
        self.log("error", message)
    }

    /// Whether `method_name` currently reaches its factory-built method
    pub fn is_enabled(&self, method_name: &str) -> bool {
        match self.levels.get(method_name) {
            Some(level) => self.factory.is_some() && level >= self.level,
            None => self.factory.is_some() && self.methods.contains_key(method_name),
        }
    }

    /// Shorthand for `set_level(LogLevel::Trace)`
    pub fn enable_all(&mut self) {
        self.set_level(LogLevel::Trace);
    }

    /// Shorthand for `set_level(LogLevel::Silent)`
    pub fn disable_all(&mut self) {
        self.set_level(LogLevel::Silent);
    }

    fn rebuild_methods(&mut self) {
        let mut methods = HashMap::with_capacity(self.method_names.len());
        for method_name in &self.method_names {
            let method_level = self.levels.get(method_name);
            let method = match (&self.factory, method_level) {
                (None, _) => noop_method(),
                (Some(_), Some(level)) if level < self.level => noop_method(),
                (Some(factory), _) => factory(method_name, method_level, &self.name),
            };
            methods.insert(method_name.clone(), method);
        }
        self.methods = methods;
    }
}

impl PluggableLogger for Logger {
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> &LevelTable {
        &self.levels
    }

    fn method_factory(&self) -> Option<MethodFactory> {
        self.factory.clone()
    }

    fn set_method_factory(&mut self, factory: MethodFactory) {
        self.factory = Some(factory);
    }

    fn set_level(&mut self, level: LogLevel) {
        self.level = level;
        self.rebuild_methods();
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("method_names", &self.method_names)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Factory recording every console call as `(method_name, message)`
    pub(crate) fn capturing_factory() -> (MethodFactory, Arc<Mutex<Vec<(String, String)>>>) {
        let calls: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let factory: MethodFactory = Arc::new(move |method_name: &str, _level: Option<LogLevel>, _logger_name: &str| {
            let sink = sink.clone();
            let method_name = method_name.to_string();
            let method: LogMethod = Arc::new(move |message: &str| -> LogResult<()> {
                sink.lock().push((method_name.clone(), message.to_string()));
                Ok(())
            });
            method
        });
        (factory, calls)
    }

    #[test]
    fn test_logger_defaults() {
        let logger = Logger::new("app");
        assert_eq!(logger.name(), "app");
        assert_eq!(logger.level(), LogLevel::Warn);
        assert_eq!(logger.method_names(), &["trace", "debug", "info", "warn", "error"]);
        assert!(logger.method_factory().is_some());
        assert!(Logger::bare("bare").method_factory().is_none());
    }

    #[test]
    fn test_methods_below_level_are_noops() {
        let (factory, calls) = capturing_factory();
        let mut logger = Logger::with_factory("app", factory);
        logger.set_level(LogLevel::Info);

        logger.debug("hidden").unwrap();
        logger.info("shown").unwrap();
        logger.error("also shown").unwrap();

        let calls = calls.lock();
        assert_eq!(
            *calls,
            vec![
                ("info".to_string(), "shown".to_string()),
                ("error".to_string(), "also shown".to_string()),
            ]
        );
    }

    #[test]
    fn test_enable_disable_all() {
        let (factory, calls) = capturing_factory();
        let mut logger = Logger::with_factory("app", factory);

        logger.disable_all();
        logger.error("dropped").unwrap();
        assert!(calls.lock().is_empty());
        assert!(!logger.is_enabled("error"));

        logger.enable_all();
        logger.trace("kept").unwrap();
        assert_eq!(calls.lock().len(), 1);
        assert!(logger.is_enabled("trace"));
    }

    #[test]
    fn test_factory_swap_applies_on_set_level() {
        let (first, first_calls) = capturing_factory();
        let (second, second_calls) = capturing_factory();
        let mut logger = Logger::with_factory("app", first);

        logger.set_method_factory(second);
        logger.warn("before").unwrap();
        logger.set_level(LogLevel::Warn);
        logger.warn("after").unwrap();

        assert_eq!(first_calls.lock().len(), 1);
        assert_eq!(second_calls.lock().len(), 1);
    }

    #[test]
    fn test_custom_and_unknown_methods() {
        let (factory, calls) = capturing_factory();
        let mut logger = Logger::with_factory("app", factory);

        // Unranked methods are not gated by the logger
        logger.define_method("audit");
        logger.log("audit", "unranked").unwrap();

        logger.levels_mut().insert("audit", LogLevel::Debug);
        logger.set_level(LogLevel::Warn);
        logger.log("audit", "gated").unwrap();

        assert_eq!(calls.lock().len(), 1);
        assert!(matches!(
            logger.log("missing", "x"),
            Err(LogError::UnknownMethod(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_bare_logger_is_silent() {
        let logger = Logger::bare("bare");
        assert!(logger.error("nothing happens").is_ok());
        assert!(!logger.is_enabled("error"));
    }
}
