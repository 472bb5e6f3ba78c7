use std::fmt;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while locating, reading or parsing configuration files
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file was not found
    FileNotFound(String),

    /// The file exists but could not be read
    ReadError(String),

    /// A line could not be parsed (1-based line number)
    Parse { line: usize, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Error reading configuration file: {}", msg)
            }
            ConfigError::Parse { line, message } => {
                write!(f, "Configuration error on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
