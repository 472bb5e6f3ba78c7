//! Logger front end.
//!
//! This module provides the main [`Logger`] interface. Loggers created
//! with [`Logger::for_component`] share one open file with their parent.

use crate::error::{LoggingError, Result};
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::{LogWriter, SharedWriter};
use std::path::PathBuf;

/// Cloneable, leveled logger.
///
/// # Examples
///
/// ```no_run
/// use logging::{Logger, LogLevel};
///
/// let logger = Logger::new("viewer.log".into(), LogLevel::Info).unwrap();
/// logger.info("Viewer started");
/// let camera_logger = logger.for_component("Camera");
/// camera_logger.warn("Frame dropped");
/// ```
#[derive(Clone)]
pub struct Logger {
    writer: SharedWriter,
    level: LogLevel,
    component: Option<String>,
    log_path: PathBuf,
    console_output: bool,
}

impl Logger {
    /// Creates a logger writing to `log_path`.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        Ok(Logger {
            writer: LogWriter::shared(&log_path)?,
            level,
            component: None,
            log_path,
            console_output: false,
        })
    }

    /// Creates a logger tagged with a component name.
    ///
    /// # Arguments
    ///
    /// * `log_path` - Path to log file (created if it doesn't exist)
    /// * `level` - Minimum log level to record
    /// * `component` - Component name (e.g., "Main", "Camera", "Preview")
    /// * `console_output` - Also echo every record to stdout
    pub fn with_component(
        log_path: PathBuf,
        level: LogLevel,
        component: String,
        console_output: bool,
    ) -> Result<Self> {
        Ok(Logger {
            writer: LogWriter::shared(&log_path)?,
            level,
            component: Some(component),
            log_path,
            console_output,
        })
    }

    /// Returns a logger for another component sharing this logger's file and settings.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            writer: self.writer.clone(),
            level: self.level,
            component: Some(component.to_string()),
            log_path: self.log_path.clone(),
            console_output: self.console_output,
        }
    }

    /// Path of the underlying log file.
    pub fn log_path(&self) -> &PathBuf {
        &self.log_path
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Flushes buffered output to disk.
    pub fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .map_err(|_| LoggingError::Logging("log writer lock poisoned".to_string()))?
            .flush()
    }

    /// Filters by level and writes the record.
    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let msg = LogMessage::new(level, self.component.as_deref(), message);

        if self.console_output {
            print!("{}", msg.format());
        }

        // Write errors go to stderr; logging never aborts the caller.
        match self.writer.lock() {
            Ok(mut writer) => {
                if let Err(e) = writer.write_message(&msg) {
                    eprintln!("Error writing log: {}", e);
                }
            }
            Err(_) => eprintln!("Error writing log: writer lock poisoned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_logger_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Debug).unwrap();
        logger.info("Test message");

        assert!(log_path.exists());
        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Test message"));
    }

    #[test]
    fn test_logger_respects_level() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Warn).unwrap();
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        logger.error("Error message");

        let content = fs::read_to_string(log_path).unwrap();
        assert!(!content.contains("Debug message"));
        assert!(!content.contains("Info message"));
        assert!(content.contains("WARN: Warn message"));
        assert!(content.contains("ERROR: Error message"));
    }

    #[test]
    fn test_for_component_shares_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let main_logger =
            Logger::with_component(log_path.clone(), LogLevel::Info, "Main".to_string(), false)
                .unwrap();
        let camera_logger = main_logger.for_component("Camera");

        main_logger.info("starting");
        camera_logger.info("opened device 0");

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[component: Main]: starting"));
        assert!(lines[1].contains("[component: Camera]: opened device 0"));
        assert_eq!(camera_logger.log_path(), &log_path);
        assert_eq!(camera_logger.level(), LogLevel::Info);
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Info).unwrap();
        let logger_clone = logger.clone();

        thread::spawn(move || {
            logger_clone.info("Message from thread");
        })
        .join()
        .unwrap();

        logger.info("Message from main");
        logger.flush().unwrap();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Message from thread"));
        assert!(content.contains("Message from main"));
    }
}
