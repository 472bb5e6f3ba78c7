//! Video processing module
//!
//! Handles video capture, color conversion and display.

pub mod camera;
pub mod converters;
pub mod display;
pub mod frame;
pub mod traits;

// Re-exports
pub use camera::{Camera, CameraConfig};
pub use converters::frame_to_gray;
pub use display::{DisplayWindow, key_matches};
pub use frame::VideoFrame;
pub use traits::{FrameDisplay, FrameSource};
