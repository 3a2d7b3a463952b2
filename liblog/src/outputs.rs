/*
 * Log output implementations: console (stdout) and append-only file.
 * Both implement the LogOutput trait; the factory picks one from the
 * configuration.
 */

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use crate::config::{LogConfig, LogType};

/// A destination formatted log lines are written to.
pub trait LogOutput: Send {
    fn write_log(&mut self, formatted_message: &str) -> Result<(), String>;
}

pub struct ConsoleOutput;

impl LogOutput for ConsoleOutput {
    fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
        writeln!(io::stdout(), "{}", formatted_message)
            .map_err(|e| format!("Failed to write to console: {}", e))
    }
}

pub struct FileOutput {
    file: File,
}

impl FileOutput {
    pub fn new(path: &str) -> Result<Self, String> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|file| FileOutput { file })
            .map_err(|e| format!("Failed to open log file '{}': {}", path, e))
    }
}

impl LogOutput for FileOutput {
    fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
        writeln!(self.file, "{}", formatted_message)
            .map_err(|e| format!("Failed to write to log file: {}", e))
    }
}

/// Creates the output named by the configuration.
pub fn create_log_output(config: &LogConfig) -> Result<Box<dyn LogOutput>, String> {
    match config.log_type {
        LogType::Console => Ok(Box::new(ConsoleOutput)),
        LogType::File => {
            let path = config.file_path.as_deref().unwrap_or("modbridge.log");
            Ok(Box::new(FileOutput::new(path)?))
        }
    }
}
