//! Camera device management.
//!
//! Opening, reading and releasing an OpenCV capture device.

use crate::common::constants::logging::CAMERA_LOG_INTERVAL;
use crate::error::{MediaError, Result};
use crate::video::frame::VideoFrame;
use crate::video::traits::FrameSource;
use logging::Logger;
use opencv::prelude::*;
use opencv::videoio::{CAP_PROP_FPS, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture};

use super::config::CameraConfig;

/// Video capture device
///
/// Owns the OpenCV `VideoCapture` handle from a successful open until
/// `release` (or drop). Resolution and frame rate are whatever the driver
/// negotiates; they are read back once and logged.
pub struct Camera {
    capture: VideoCapture,
    device_id: i32,
    logger: Logger,
    frame_count: u64,
    released: bool,
}

impl Camera {
    /// Opens the camera described by `config`
    ///
    /// # Returns
    /// * `Ok(Camera)` - Device opened and ready to read
    /// * `Err(MediaError::Camera)` - If the device cannot be opened
    pub fn new(config: CameraConfig, logger: Logger) -> Result<Self> {
        logger.info(&format!("Opening camera ID {}", config.device_id));

        let capture = VideoCapture::new(config.device_id, config.api_preference)
            .map_err(|e| MediaError::Camera(format!("Failed to open camera: {}", e)))?;

        if !Self::is_opened(&capture)? {
            return Err(MediaError::Camera(format!(
                "Camera {} is not available",
                config.device_id
            )));
        }

        let width = Self::get_property(&capture, CAP_PROP_FRAME_WIDTH)? as u32;
        let height = Self::get_property(&capture, CAP_PROP_FRAME_HEIGHT)? as u32;
        let fps = Self::get_property(&capture, CAP_PROP_FPS)?;

        logger.info(&format!(
            "Camera opened: {}x{} @ {:.1} FPS (device defaults)",
            width, height, fps
        ));

        Ok(Camera {
            capture,
            device_id: config.device_id,
            logger,
            frame_count: 0,
            released: false,
        })
    }

    /// Captures a single frame from the camera
    ///
    /// # Returns
    /// * `Ok(VideoFrame)` - Successfully captured frame
    /// * `Err(MediaError::Camera)` - If the read fails or yields an empty frame
    pub fn capture_frame(&mut self) -> Result<VideoFrame> {
        if self.released {
            return Err(MediaError::Camera("Camera already released".to_string()));
        }

        let mut mat = Mat::default();

        let success = self
            .capture
            .read(&mut mat)
            .map_err(|e| MediaError::Camera(format!("Failed to read frame: {}", e)))?;

        if !success || mat.empty() {
            return Err(MediaError::Camera("Empty or invalid frame".to_string()));
        }

        self.frame_count += 1;

        if self.frame_count.is_multiple_of(CAMERA_LOG_INTERVAL) {
            self.logger
                .debug(&format!("Frames captured: {}", self.frame_count));
        }

        Ok(VideoFrame::new(mat))
    }

    /// Closes the device once; later calls do nothing
    fn close(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        self.logger.info(&format!(
            "Closing camera {}. Total frames captured: {}",
            self.device_id, self.frame_count
        ));

        self.capture
            .release()
            .map_err(|e| MediaError::Camera(format!("Error releasing camera: {}", e)))
    }

    fn get_property(capture: &VideoCapture, prop: i32) -> Result<f64> {
        capture
            .get(prop)
            .map_err(|e| MediaError::Camera(format!("Error getting property: {}", e)))
    }

    fn is_opened(capture: &VideoCapture) -> Result<bool> {
        capture
            .is_opened()
            .map_err(|e| MediaError::Camera(format!("Error verifying camera status: {}", e)))
    }
}

impl FrameSource for Camera {
    fn read_frame(&mut self) -> Result<VideoFrame> {
        self.capture_frame()
    }

    fn release(&mut self) -> Result<()> {
        self.close()
    }
}

impl Drop for Camera {
    /// Releases the device if the owner never called `release`
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            self.logger.error(&e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_camera_invalid_id() {
        let dir = tempdir().unwrap();
        let logger = Logger::new(dir.path().join("test_camera.log"), LogLevel::Debug).unwrap();

        let config = CameraConfig::new(999).unwrap();
        let result = Camera::new(config, logger);
        assert!(matches!(result, Err(MediaError::Camera(_))));
    }
}
