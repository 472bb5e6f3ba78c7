//! Shared log file writer.

use crate::error::{LoggingError, Result};
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Appends formatted records to the log file.
///
/// Records are flushed per line, so nothing is lost if the process exits
/// right after the last log call.
pub(crate) struct LogWriter {
    file: BufWriter<File>,
}

/// Handle shared by every logger writing to the same file.
pub(crate) type SharedWriter = Arc<Mutex<LogWriter>>;

impl LogWriter {
    /// Opens or creates the file in append mode.
    pub fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }

    pub fn shared(log_path: &Path) -> Result<SharedWriter> {
        Ok(Arc::new(Mutex::new(Self::open(log_path)?)))
    }

    pub fn write_message(&mut self, message: &LogMessage) -> Result<()> {
        self.file.write_all(message.format().as_bytes())?;
        self.file.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.file.flush().map_err(LoggingError::from)
    }
}
