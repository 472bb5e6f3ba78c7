//! Color to grayscale conversion
//!
//! Reduces BGR camera frames to a single luminance channel using OpenCV's
//! standard `BGR2GRAY` weights (0.299 R + 0.587 G + 0.114 B).

use crate::error::{MediaError, Result};
use crate::video::frame::VideoFrame;
use opencv::core::Mat;
use opencv::imgproc::{COLOR_BGR2GRAY, COLOR_BGRA2GRAY, cvt_color_def};

/// Converts a color frame to a single-channel grayscale frame
///
/// The output has the same width and height as the input and keeps its
/// capture timestamp. Frames that are already single-channel are returned
/// as a copy.
///
/// # Arguments
/// * `frame` - BGR (3 channels) or BGRA (4 channels) frame
///
/// # Returns
/// * `Ok(VideoFrame)` - One-channel frame
/// * `Err(MediaError::Processing)` - Empty frame or unsupported channel count
pub fn frame_to_gray(frame: &VideoFrame) -> Result<VideoFrame> {
    if frame.is_empty() {
        return Err(MediaError::Processing(
            "Cannot convert an empty frame".to_string(),
        ));
    }

    let code = match frame.channels() {
        1 => return Ok(frame.clone()),
        3 => COLOR_BGR2GRAY,
        4 => COLOR_BGRA2GRAY,
        other => {
            return Err(MediaError::Processing(format!(
                "Unsupported channel count for grayscale conversion: {}",
                other
            )));
        }
    };

    let mut gray = Mat::default();
    cvt_color_def(frame.data(), &mut gray, code)?;

    Ok(VideoFrame::with_timestamp(gray, frame.timestamp()))
}
