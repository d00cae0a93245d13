//! Loading `FileSaveOptions` from a YAML or JSON file
//!
//! ```yaml
//! file: logs/app.log
//! prefix: "[app] "
//! level: info
//! consoleLevel: error
//! separator: "\n"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::options::{FileSaveOptions, Prefix};
use crate::error::{LogError, LogResult};
use crate::level::LogLevel;

/// On-disk form of the options
///
/// Only literal prefixes can be stored; formatters are set in code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionsFile {
    /// Target file; relative paths resolve against the current directory at attach
    pub file: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, alias = "console_level", skip_serializing_if = "Option::is_none")]
    pub console_level: Option<LogLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}

/// Supported encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Yaml,
    Json,
}

impl OptionsFormat {
    /// `.json` files are JSON, everything else is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OptionsFormat::Json,
            _ => OptionsFormat::Yaml,
        }
    }
}

impl OptionsFile {
    pub fn parse(content: &str, format: OptionsFormat) -> LogResult<Self> {
        let parsed: OptionsFile = match format {
            OptionsFormat::Yaml => serde_yaml::from_str(content)?,
            OptionsFormat::Json => serde_json::from_str(content)?,
        };
        if parsed.file.as_os_str().is_empty() {
            return Err(LogError::Configuration("'file' must not be empty".to_string()));
        }
        Ok(parsed)
    }

    pub fn render(&self, format: OptionsFormat) -> LogResult<String> {
        Ok(match format {
            OptionsFormat::Yaml => serde_yaml::to_string(self)?,
            OptionsFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}

impl From<OptionsFile> for FileSaveOptions {
    fn from(file: OptionsFile) -> Self {
        FileSaveOptions {
            file: file.file,
            prefix: file.prefix.map(Prefix::Literal),
            console_level: file.console_level,
            separator: file.separator,
            level: file.level,
        }
    }
}

/// Read sink options from `path`
pub fn load_options(path: impl AsRef<Path>) -> LogResult<FileSaveOptions> {
    let path = path.as_ref();
    let format = OptionsFormat::from_path(path);
    let content = fs::read_to_string(path)?;
    let parsed = OptionsFile::parse(&content, format)?;
    log::debug!("loaded file sink options from {} ({:?})", path.display(), format);
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sink.yaml");
        fs::write(
            &path,
            "file: logs/app.log\nprefix: \"[app] \"\nlevel: info\nconsoleLevel: ERROR\nseparator: \"\\r\\n\"\n",
        )
        .unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.file(), Path::new("logs/app.log"));
        assert_eq!(options.file_level(), LogLevel::Info);
        assert_eq!(options.console_threshold(), LogLevel::Error);
        assert_eq!(options.separator_or_default(), "\r\n");
        assert_eq!(options.format_line("info", "up"), "[app] up");
    }

    #[test]
    fn test_load_json_with_numeric_levels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sink.json");
        fs::write(&path, r#"{"file": "app.log", "level": 4, "console_level": 2}"#).unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.file_level(), LogLevel::Error);
        assert_eq!(options.console_threshold(), LogLevel::Info);
        assert!(options.prefix.is_none());
    }

    #[test]
    fn test_defaults_when_missing() {
        let parsed = OptionsFile::parse("file: app.log\n", OptionsFormat::Yaml).unwrap();
        let options = FileSaveOptions::from(parsed);
        assert_eq!(options.file_level(), LogLevel::Warn);
        assert_eq!(options.console_threshold(), LogLevel::Silent);
    }

    #[test]
    fn test_invalid_content() {
        assert!(matches!(
            OptionsFile::parse("file: app.log\nlevel: loud\n", OptionsFormat::Yaml),
            Err(LogError::Yaml(_))
        ));
        assert!(matches!(
            OptionsFile::parse(r#"{"level": "warn"}"#, OptionsFormat::Json),
            Err(LogError::Json(_))
        ));
        assert!(matches!(
            OptionsFile::parse("file: \"\"\n", OptionsFormat::Yaml),
            Err(LogError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_options(dir.path().join("absent.yaml")).unwrap_err().is_io());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(OptionsFormat::from_path(Path::new("a.JSON")), OptionsFormat::Json);
        assert_eq!(OptionsFormat::from_path(Path::new("a.yml")), OptionsFormat::Yaml);
        assert_eq!(OptionsFormat::from_path(Path::new("config")), OptionsFormat::Yaml);
    }

    #[test]
    fn test_serialize_round_trip_yaml() {
        let file = OptionsFile {
            file: PathBuf::from("app.log"),
            prefix: None,
            console_level: Some(LogLevel::Error),
            separator: None,
            level: Some(LogLevel::Info),
        };
        let yaml = file.render(OptionsFormat::Yaml).unwrap();
        assert!(yaml.contains("consoleLevel: error"));
        assert_eq!(OptionsFile::parse(&yaml, OptionsFormat::Yaml).unwrap(), file);
    }
}
