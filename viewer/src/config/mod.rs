//! Viewer configuration

pub mod viewer_config;

pub use viewer_config::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, ViewerConfig};
