//! # Config Loader
//!
//! Locates, reads and tokenizes `key=value` configuration files.
//! Interpreting the values is left to the consumer.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file, parse_key_values};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = find_config_file("viewer.conf", "VIEWER_CONFIG")?;
//!     let content = load_config_file(&path)?;
//!
//!     for entry in parse_key_values(&content)? {
//!         println!("{} = {}", entry.key, entry.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One `key=value` pair together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    /// 1-based line number in the source text
    pub line: usize,
}

/// Reads the whole configuration file into a String.
///
/// The content is neither parsed nor validated.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Searches for a configuration file in the usual places.
///
/// Search order:
/// 1. The path stored in environment variable `env_var` (if set and present)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str, env_var: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(env_var) {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    find_in_dir(Path::new("."), filename).ok_or_else(|| {
        ConfigError::FileNotFound(format!(
            "'{}' not found. Searched: ${} env var, ./config/{}, ./{}",
            filename, env_var, filename, filename
        ))
    })
}

/// Looks for `{base}/config/{filename}` then `{base}/{filename}`.
fn find_in_dir(base: &Path, filename: &str) -> Option<PathBuf> {
    [base.join("config").join(filename), base.join(filename)]
        .into_iter()
        .find(|candidate| candidate.exists())
}

/// Splits `key=value` lines into entries.
///
/// Blank lines and lines starting with `#` are skipped; keys and values are
/// trimmed. Only the first `=` separates key from value, so values may
/// contain `=`.
///
/// # Errors
///
/// [`ConfigError::Parse`] for a non-empty line without `=` or with an empty key.
pub fn parse_key_values(content: &str) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::Parse {
            line: index + 1,
            message: format!("expected 'key=value', found '{}'", line),
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::Parse {
                line: index + 1,
                message: "missing key before '='".to_string(),
            });
        }

        entries.push(ConfigEntry {
            key: key.to_string(),
            value: value.trim().to_string(),
            line: index + 1,
        });
    }

    Ok(entries)
}
