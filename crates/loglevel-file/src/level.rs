//! Severity levels and the name → level table a logger ranks its methods by

use std::collections::HashMap;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::LogError;

/// Log levels
///
/// `Silent` sits above every real level and never triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Silent = 5,
}

impl LogLevel {
    /// All levels, lowest first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Silent,
    ];

    /// Numeric severity
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Upper-case name, as used for level table keys
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Silent => "SILENT",
        }
    }

    /// Lower-case name of the logging method for this level
    ///
    /// `Silent` has no method.
    pub fn method_name(&self) -> Option<&'static str> {
        match self {
            LogLevel::Trace => Some("trace"),
            LogLevel::Debug => Some("debug"),
            LogLevel::Info => Some("info"),
            LogLevel::Warn => Some("warn"),
            LogLevel::Error => Some("error"),
            LogLevel::Silent => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" => Ok(LogLevel::Silent),
            other => Err(LogError::Configuration(format!("Unknown log level: {}", other))),
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str().to_lowercase())
    }
}

// Accepts either a level name or its numeric severity.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl<'a> Visitor<'a> for LevelVisitor {
            type Value = LogLevel;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a level name or a number between 0 and 5")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LogLevel, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LogLevel, E> {
                u8::try_from(v)
                    .ok()
                    .and_then(LogLevel::from_u8)
                    .ok_or_else(|| E::custom(format!("Log level out of range: {}", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LogLevel, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(format!("Log level out of range: {}", v)))
                    .and_then(|v| self.visit_u64(v))
            }
        }

        deserializer.deserialize_any(LevelVisitor)
    }
}

/// Mapping from upper-case level name to severity
///
/// Lookups are by name, so methods a logger defines on top of the defaults
/// may have no entry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    levels: HashMap<String, LogLevel>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelTable {
    /// Table holding every built-in level under its upper-case name
    pub fn new() -> Self {
        let levels = LogLevel::ALL
            .iter()
            .map(|level| (level.as_str().to_string(), *level))
            .collect();
        Self { levels }
    }

    /// Look up a level by name; method names are upper-cased first
    pub fn get(&self, name: &str) -> Option<LogLevel> {
        self.levels.get(&name.to_uppercase()).copied()
    }

    /// Rank a custom method name
    pub fn insert(&mut self, name: &str, level: LogLevel) {
        self.levels.insert(name.to_uppercase(), level);
    }

    pub fn remove(&mut self, name: &str) -> Option<LogLevel> {
        self.levels.remove(&name.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
