//! On-screen display
//!
//! HighGUI window used to render frames and read key presses.

pub mod window;

pub use window::{DisplayWindow, key_matches};
