//! Grayscale webcam viewer
//!
//! Shows the default camera's feed in grayscale until `q` is pressed.

pub mod config;
pub mod preview;
