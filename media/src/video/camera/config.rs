//! Camera configuration types.
//!
//! Selects which capture device to open and through which backend.
//! Resolution and frame rate are left to the device defaults.

use crate::error::{MediaError, Result};
use opencv::videoio::CAP_ANY;

/// Camera capture configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Camera device ID (0 for default camera)
    pub device_id: i32,
    /// OpenCV capture API preference (`CAP_ANY` lets OpenCV pick)
    pub api_preference: i32,
}

impl CameraConfig {
    /// Creates a configuration for the given device using any backend
    ///
    /// # Returns
    /// * `Ok(CameraConfig)` - Valid configuration
    /// * `Err(MediaError::Config)` - If `device_id` is negative
    pub fn new(device_id: i32) -> Result<Self> {
        if device_id < 0 {
            return Err(MediaError::Config(format!(
                "Device ID must be zero or positive, got {}",
                device_id
            )));
        }

        Ok(Self {
            device_id,
            api_preference: CAP_ANY,
        })
    }
}

/// Default camera configuration (device 0, any backend)
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            api_preference: CAP_ANY,
        }
    }
}
