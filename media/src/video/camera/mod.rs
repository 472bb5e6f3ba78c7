//! Camera capture module
//!
//! Provides camera configuration and video capture.

pub mod config;
pub mod device;

pub use config::CameraConfig;
pub use device::Camera;
