//! Media Processing Module
//!
//! Camera capture, grayscale conversion and on-screen display built on
//! OpenCV's `videoio`, `imgproc` and `highgui` modules.

pub mod common;
pub mod error;
pub mod video;

// Re-export commonly used types
pub use error::{MediaError, Result};

pub use video::{
    Camera, CameraConfig, DisplayWindow, FrameDisplay, FrameSource, VideoFrame, frame_to_gray,
    key_matches,
};
