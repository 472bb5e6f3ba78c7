use crate::error::{LoggingError, Result};
use std::str::FromStr;

/// Severity level of a log message.
///
/// Ordered from lowest to highest: Debug < Info < Warn < Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Detailed debugging information.
    Debug,
    /// Informational messages.
    Info,
    /// Warning messages.
    Warn,
    /// Error messages.
    Error,
}

impl LogLevel {
    /// Returns the string representation of the log level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Parses a level name, rejecting anything that is not a known level.
    ///
    /// Used for configuration values, where a typo should be reported
    /// rather than silently mapped to `Info`.
    pub fn parse_strict(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggingError::InvalidLevel(name.to_string())),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    /// Parses a log level from a string (case-insensitive), defaulting to Info.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse_strict(s).unwrap_or(LogLevel::Info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_level_as_str() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_parse_strict_accepts_known_levels() {
        assert_eq!(LogLevel::parse_strict("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse_strict(" INFO ").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse_strict("Warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::parse_strict("error").unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_parse_strict_rejects_unknown() {
        let result = LogLevel::parse_strict("trace");
        assert!(matches!(result, Err(LoggingError::InvalidLevel(_))));
    }

    #[test]
    fn test_from_str_defaults_to_info() {
        assert_eq!("InFo".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("invalid".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("".parse::<LogLevel>().unwrap(), LogLevel::Info);
    }
}
