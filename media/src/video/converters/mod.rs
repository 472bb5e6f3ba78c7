//! Frame format converters
//!
//! Utilities for converting between pixel formats

pub mod gray_converter;

pub use gray_converter::frame_to_gray;
