//! Process-wide registry of named loggers

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::level_logger::Logger;

/// A logger shared between threads (and with the `log` bridge)
pub type SharedLogger = Arc<RwLock<Logger>>;

/// Name of the root logger
pub const ROOT_LOGGER: &str = "";

/// Global registry of loggers, keyed by name
static REGISTRY: Lazy<RwLock<HashMap<String, SharedLogger>>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Get the logger registered under `name`, creating it on first use
///
/// # Example
///
/// ```
/// use loglevel_file::get_logger;
/// use std::sync::Arc;
///
/// let a = get_logger("db");
/// let b = get_logger("db");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn get_logger(name: &str) -> SharedLogger {
    if let Some(logger) = REGISTRY.read().get(name) {
        return logger.clone();
    }

    let mut registry = REGISTRY.write();
    registry
        .entry(name.to_string())
        .or_insert_with(|| Arc::new(RwLock::new(Logger::new(name))))
        .clone()
}

/// Get the root logger
pub fn get_root_logger() -> SharedLogger {
    get_logger(ROOT_LOGGER)
}

/// Names of every registered logger
pub fn list_loggers() -> Vec<String> {
    let registry = REGISTRY.read();
    registry.keys().cloned().collect()
}

/// Check if a logger is registered
pub fn has_logger(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Drop a logger from the registry (mainly for testing)
///
/// Existing handles keep working; the next `get_logger` creates a new one.
pub fn remove_logger(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;
    use crate::logger::PluggableLogger;

    #[test]
    fn test_same_name_same_logger() {
        let a = get_logger("registry_test_same");
        let b = get_logger("registry_test_same");
        assert!(Arc::ptr_eq(&a, &b));

        a.write().set_level(LogLevel::Error);
        assert_eq!(b.read().level(), LogLevel::Error);

        remove_logger("registry_test_same");
    }

    #[test]
    fn test_root_logger() {
        let root = get_root_logger();
        assert_eq!(root.read().name(), ROOT_LOGGER);
        assert!(has_logger(ROOT_LOGGER));
    }

    #[test]
    fn test_list_and_remove() {
        get_logger("registry_test_list");
        assert!(list_loggers().contains(&"registry_test_list".to_string()));

        assert!(remove_logger("registry_test_list"));
        assert!(!has_logger("registry_test_list"));
        assert!(!remove_logger("registry_test_list"));
    }
}
