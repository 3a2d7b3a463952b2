/*
 * Configuration for the workspace logger.
 *
 * Parses an optional TOML file with a [logging] section; a missing file
 * means console defaults, so the bridge never requires configuration to
 * exist. Level and output names are matched case-insensitively.
 */

use serde::Deserialize;
use std::fs;

/// Log severity levels, in ascending order of importance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

// Separate implementation of Deserialize to handle case-insensitive values
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(serde::de::Error::unknown_variant(
                &s,
                &["debug", "info", "warn", "warning", "error"],
            )),
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Supported output destinations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogType {
    Console,
    File,
}

impl<'de> Deserialize<'de> for LogType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "console" => Ok(LogType::Console),
            "file" => Ok(LogType::File),
            _ => Err(serde::de::Error::unknown_variant(&s, &["console", "file"])),
        }
    }
}

/// Configuration for the logger
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Type of output (console, file)
    #[serde(rename = "type")]
    pub log_type: LogType,

    /// Minimum log level to record
    pub threshold: LogLevel,

    /// File path for file-based logging
    #[serde(default)]
    pub file_path: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            log_type: LogType::Console,
            threshold: LogLevel::Info,
            file_path: None,
        }
    }
}

/// Configuration wrapper to handle the [logging] section in TOML
#[derive(Debug, Clone, Deserialize)]
struct ConfigWrapper {
    logging: LogConfig,
}

impl LogConfig {
    /// Create configuration from a TOML file. A file that cannot be read is
    /// not an error; the defaults apply so logging always comes up.
    pub fn from_file(file_path: &str) -> Result<Self, String> {
        let config_str = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(_) => return Ok(LogConfig::default()),
        };

        toml::from_str::<ConfigWrapper>(&config_str)
            .map(|wrapper| wrapper.logging)
            .map_err(|e| format!("Failed to parse config file '{}': {}", file_path, e))
    }
}
