//! Error types for media operations.
//!
//! This module defines all possible errors that can occur during
//! capture, conversion and display.

use std::fmt;

pub type Result<T> = std::result::Result<T, MediaError>;

/// Error type for media operations
#[derive(Debug)]
pub enum MediaError {
    /// Configuration error
    Config(String),
    /// Camera error (open or read)
    Camera(String),
    /// Display window error
    Display(String),
    /// Processing error
    Processing(String),
    /// OpenCV error
    OpenCv(opencv::Error),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Config(msg) => write!(f, "Config error: {}", msg),
            MediaError::Camera(msg) => write!(f, "Camera error: {}", msg),
            MediaError::Display(msg) => write!(f, "Display error: {}", msg),
            MediaError::Processing(msg) => write!(f, "Processing error: {}", msg),
            MediaError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for MediaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MediaError::OpenCv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<opencv::Error> for MediaError {
    fn from(err: opencv::Error) -> Self {
        MediaError::OpenCv(err)
    }
}
