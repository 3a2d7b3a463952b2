/*
 * Core logger implementation.
 *
 * A single process-wide instance behind a OnceCell, guarded by a Mutex.
 * Messages below the configured threshold are skipped; everything else is
 * formatted with a UTC timestamp and the call site, then handed to the
 * configured output. Before initialization (or if the lock is poisoned)
 * lines go to stderr so nothing is silently dropped.
 */

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use once_cell::sync::OnceCell;

use crate::config::{LogConfig, LogLevel};
use crate::outputs::{create_log_output, LogOutput};

static LOGGER_INSTANCE: OnceCell<Mutex<LoggerInner>> = OnceCell::new();

struct LoggerInner {
    config: Option<LogConfig>,
    output: Option<Box<dyn LogOutput>>,
}

impl LoggerInner {
    fn new() -> Self {
        LoggerInner {
            config: None,
            output: None,
        }
    }

    fn init_with_config(&mut self, config: LogConfig) -> Result<(), String> {
        self.output = Some(create_log_output(&config)?);
        self.config = Some(config);
        Ok(())
    }

    fn log(
        &mut self,
        level: LogLevel,
        message: &str,
        context: Option<&str>,
        file: &str,
        line: u32,
        module: &str,
    ) {
        if let Some(ref config) = self.config {
            if level < config.threshold {
                return;
            }
        }

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let formatted = format_log_message(&timestamp, level, message, context, file, line, module);

        match self.output {
            Some(ref mut output) => {
                if let Err(e) = output.write_log(&formatted) {
                    eprintln!("Failed to write log: {}", e);
                }
            }
            // Not initialized yet; stderr keeps early messages visible.
            None => {
                let _ = writeln!(io::stderr(), "{}", formatted);
            }
        }
    }
}

fn format_log_message(
    timestamp: &str,
    level: LogLevel,
    message: &str,
    context: Option<&str>,
    file: &str,
    line: u32,
    module: &str,
) -> String {
    match context {
        Some(ctx) => format!(
            "{} [{}] [{}:{}] [{}] {} | {}",
            timestamp,
            level.as_str(),
            file,
            line,
            module,
            message,
            ctx
        ),
        None => format!(
            "{} [{}] [{}:{}] [{}] {}",
            timestamp,
            level.as_str(),
            file,
            line,
            module,
            message
        ),
    }
}

pub struct Logger;

impl Logger {
    /// Initialize from the default config file, falling back to console
    /// defaults when it is absent or malformed. A malformed file is reported
    /// to stderr so the fallback is never silent. Safe to call more than
    /// once; later calls reconfigure the same instance.
    pub fn init() {
        let config = match LogConfig::from_file("modbridge.toml") {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Logger config error: {}. Using console defaults.", e);
                LogConfig::default()
            }
        };
        if let Err(e) = Self::init_with_config(config) {
            eprintln!("Failed to initialize logger: {}", e);
        }
    }

    /// Initialize the logger from a specific configuration file.
    pub fn init_with_config_file(config_path: &str) -> Result<(), String> {
        let config = LogConfig::from_file(config_path)?;
        Self::init_with_config(config)
    }

    /// Initialize the logger with a LogConfig struct.
    pub fn init_with_config(config: LogConfig) -> Result<(), String> {
        let logger = LOGGER_INSTANCE.get_or_init(|| Mutex::new(LoggerInner::new()));
        let mut guard = match logger.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.init_with_config(config)
    }

    pub fn debug(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
        Self::log_with_metadata(LogLevel::Debug, message, context, file, line, module)
    }

    pub fn info(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
        Self::log_with_metadata(LogLevel::Info, message, context, file, line, module)
    }

    pub fn warn(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
        Self::log_with_metadata(LogLevel::Warn, message, context, file, line, module)
    }

    pub fn error(message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
        Self::log_with_metadata(LogLevel::Error, message, context, file, line, module)
    }

    fn log_with_metadata(
        level: LogLevel,
        message: &str,
        context: Option<String>,
        file: &str,
        line: u32,
        module: &str,
    ) {
        // Keep just the filename, the full path is noise in log lines.
        let file_name = Path::new(file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file);

        let logger = LOGGER_INSTANCE.get_or_init(|| Mutex::new(LoggerInner::new()));
        match logger.lock() {
            Ok(mut logger) => {
                logger.log(level, message, context.as_deref(), file_name, line, module);
            }
            Err(_) => {
                let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
                let formatted = format_log_message(
                    &timestamp,
                    level,
                    message,
                    context.as_deref(),
                    file_name,
                    line,
                    module,
                );
                let _ = writeln!(io::stderr(), "{} | MUTEX POISONED", formatted);
            }
        }
    }
}
