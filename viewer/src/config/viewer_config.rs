//! Viewer Configuration
//!
//! Camera, window and logging settings read from an optional `viewer.conf`.
//! Without a file the defaults open camera 0, title the window
//! "Webcam - Gray" and quit on `q`.

use config_loader::{ConfigEntry, ConfigError, find_config_file, load_config_file, parse_key_values};
use logging::LogLevel;
use std::path::{Path, PathBuf};

/// File name searched for by [`ViewerConfig::load`]
pub const CONFIG_FILE_NAME: &str = "viewer.conf";
/// Environment variable that may hold an explicit config path
pub const CONFIG_ENV_VAR: &str = "VIEWER_CONFIG";

const MIN_KEY_WAIT_MS: i32 = 1;
const MAX_KEY_WAIT_MS: i32 = 1000;

/// Viewer configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Capture device index
    pub device_id: i32,
    /// Title of the display window
    pub window_title: String,
    /// Key that ends the preview
    pub quit_key: char,
    /// Key poll timeout per frame, in milliseconds
    pub key_wait_ms: i32,
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Echo log records to stdout
    pub log_console: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            window_title: "Webcam - Gray".to_string(),
            quit_key: 'q',
            key_wait_ms: 1,
            log_path: PathBuf::from("viewer.log"),
            log_level: LogLevel::Info,
            log_console: false,
        }
    }
}

impl ViewerConfig {
    /// Finds and loads the configuration file, falling back to defaults
    ///
    /// # Returns
    /// * `Ok((config, Some(path)))` - Loaded from `path`
    /// * `Ok((config, None))` - No file found, defaults used
    /// * `Err(ConfigError)` - A file was found but is unreadable or invalid
    pub fn load() -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_located(find_config_file(CONFIG_FILE_NAME, CONFIG_ENV_VAR))
    }

    /// Loads from the outcome of a config file search
    fn load_located(
        located: Result<PathBuf, ConfigError>,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match located {
            Ok(path) => {
                let config = Self::load_from_file(&path)?;
                Ok((config, Some(path)))
            }
            Err(ConfigError::FileNotFound(_)) => Ok((Self::default(), None)),
            Err(e) => Err(e),
        }
    }

    /// Loads configuration from a `key=value` file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = load_config_file(path)?;
        Self::from_content(&content)
    }

    /// Builds a configuration from `key=value` text on top of the defaults
    ///
    /// Unknown keys are reported on stderr and ignored.
    pub fn from_content(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for entry in parse_key_values(content)? {
            config.apply(&entry)?;
        }

        Ok(config)
    }

    fn apply(&mut self, entry: &ConfigEntry) -> Result<(), ConfigError> {
        let value = entry.value.as_str();

        match entry.key.as_str() {
            "device_id" => {
                let device_id: i32 = parse_number(entry)?;
                if device_id < 0 {
                    return Err(invalid(entry, "must be zero or positive"));
                }
                self.device_id = device_id;
            }
            "window_title" => {
                if value.is_empty() {
                    return Err(invalid(entry, "must not be empty"));
                }
                self.window_title = value.to_string();
            }
            "quit_key" => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(key), None) if key.is_ascii_graphic() => self.quit_key = key,
                    _ => return Err(invalid(entry, "must be a single printable ASCII character")),
                }
            }
            "key_wait_ms" => {
                let wait: i32 = parse_number(entry)?;
                if !(MIN_KEY_WAIT_MS..=MAX_KEY_WAIT_MS).contains(&wait) {
                    return Err(invalid(
                        entry,
                        &format!("must be between {} and {}", MIN_KEY_WAIT_MS, MAX_KEY_WAIT_MS),
                    ));
                }
                self.key_wait_ms = wait;
            }
            "log_path" => {
                if value.is_empty() {
                    return Err(invalid(entry, "must not be empty"));
                }
                self.log_path = PathBuf::from(value);
            }
            "log_level" => {
                self.log_level =
                    LogLevel::parse_strict(value).map_err(|e| invalid(entry, &e.to_string()))?;
            }
            "log_console" => {
                self.log_console = match value.to_lowercase().as_str() {
                    "true" | "yes" | "1" => true,
                    "false" | "no" | "0" => false,
                    _ => return Err(invalid(entry, "must be true or false")),
                };
            }
            unknown => {
                eprintln!(
                    "Warning: Unknown configuration key '{}' on line {} ignored",
                    unknown, entry.line
                );
            }
        }

        Ok(())
    }
}

fn parse_number(entry: &ConfigEntry) -> Result<i32, ConfigError> {
    entry
        .value
        .parse()
        .map_err(|_| invalid(entry, &format!("'{}' is not a whole number", entry.value)))
}

fn invalid(entry: &ConfigEntry, reason: &str) -> ConfigError {
    ConfigError::Parse {
        line: entry.line,
        message: format!("{} {}", entry.key, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.device_id, 0);
        assert_eq!(config.window_title, "Webcam - Gray");
        assert_eq!(config.quit_key, 'q');
        assert_eq!(config.key_wait_ms, 1);
        assert_eq!(config.log_path, PathBuf::from("viewer.log"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.log_console);
    }

    #[test]
    fn test_empty_content_gives_defaults() {
        let config = ViewerConfig::from_content("# nothing here\n\n").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_load_from_content() {
        let content = "\
            # Second camera, verbose\n\
            device_id=1\n\
            window_title=Desk cam\n\
            quit_key=x\n\
            key_wait_ms=30\n\
            log_path=/tmp/viewer-test.log\n\
            log_level=Debug\n\
            log_console=yes\n\
        ";

        let config = ViewerConfig::from_content(content).unwrap();
        assert_eq!(config.device_id, 1);
        assert_eq!(config.window_title, "Desk cam");
        assert_eq!(config.quit_key, 'x');
        assert_eq!(config.key_wait_ms, 30);
        assert_eq!(config.log_path, PathBuf::from("/tmp/viewer-test.log"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.log_console);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let config = ViewerConfig::from_content("resolution=1920x1080\ndevice_id=3").unwrap();
        assert_eq!(config.device_id, 3);
    }

    #[test]
    fn test_negative_device_rejected() {
        let result = ViewerConfig::from_content("device_id=-1");
        assert!(matches!(result, Err(ConfigError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_non_numeric_wait_rejected() {
        let result = ViewerConfig::from_content("\nkey_wait_ms=fast");
        assert!(matches!(result, Err(ConfigError::Parse { line: 2, .. })));
    }

    #[test]
    fn test_wait_out_of_range_rejected() {
        assert!(ViewerConfig::from_content("key_wait_ms=0").is_err());
        assert!(ViewerConfig::from_content("key_wait_ms=1001").is_err());
        assert!(ViewerConfig::from_content("key_wait_ms=1000").is_ok());
    }

    #[test]
    fn test_quit_key_must_be_single_ascii_char() {
        assert!(ViewerConfig::from_content("quit_key=qq").is_err());
        assert!(ViewerConfig::from_content("quit_key=").is_err());
        assert!(ViewerConfig::from_content("quit_key=é").is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = ViewerConfig::from_content("log_level=loud");
        match result {
            Err(ConfigError::Parse { message, .. }) => assert!(message.starts_with("log_level")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_bool_rejected() {
        assert!(ViewerConfig::from_content("log_console=maybe").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "window_title=From file\n").unwrap();

        let config = ViewerConfig::load_from_file(&path).unwrap();
        assert_eq!(config.window_title, "From file");
    }

    #[test]
    fn test_load_located_reports_path_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "device_id=2\n").unwrap();

        let (config, source) = ViewerConfig::load_located(Ok(path.clone())).unwrap();
        assert_eq!(config.device_id, 2);
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_load_located_without_file_uses_defaults() {
        let not_found = Err(ConfigError::FileNotFound(CONFIG_FILE_NAME.to_string()));

        let (config, source) = ViewerConfig::load_located(not_found).unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(source, None);
    }

    #[test]
    fn test_load_located_propagates_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "device_id=-4\n").unwrap();

        let result = ViewerConfig::load_located(Ok(path));
        assert!(matches!(result, Err(ConfigError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let result = ViewerConfig::load_from_file(&dir.path().join("absent.conf"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
