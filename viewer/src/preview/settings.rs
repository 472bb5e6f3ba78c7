//! Loop parameters derived from the viewer configuration.

use crate::config::ViewerConfig;

/// Per-iteration settings of the preview loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSettings {
    /// Key that ends the loop
    pub quit_key: char,
    /// Key poll timeout in milliseconds
    pub key_wait_ms: i32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            quit_key: 'q',
            key_wait_ms: 1,
        }
    }
}

impl From<&ViewerConfig> for PreviewSettings {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            quit_key: config.quit_key,
            key_wait_ms: config.key_wait_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_config() {
        assert_eq!(
            PreviewSettings::from(&ViewerConfig::default()),
            PreviewSettings::default()
        );
    }

    #[test]
    fn test_from_config() {
        let config = ViewerConfig {
            quit_key: 'x',
            key_wait_ms: 25,
            ..ViewerConfig::default()
        };

        let settings = PreviewSettings::from(&config);
        assert_eq!(settings.quit_key, 'x');
        assert_eq!(settings.key_wait_ms, 25);
    }
}
