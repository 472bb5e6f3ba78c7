//! Video frame representation.
//!
//! Provides the `VideoFrame` type passed between capture, conversion
//! and display.

use opencv::core::Mat;
use opencv::prelude::*;
use std::time::Instant;

/// Raw video frame
///
/// Wraps an OpenCV Mat with its dimensions, channel count and capture time.
/// Camera frames are 3-channel BGR; grayscale frames have one channel.
#[derive(Clone)]
pub struct VideoFrame {
    data: Mat,
    width: i32,
    height: i32,
    channels: i32,
    timestamp: Instant,
}

impl VideoFrame {
    /// Creates a new video frame stamped with the current time
    ///
    /// # Arguments
    /// * `mat` - OpenCV Matrix containing the frame data (typically BGR format)
    pub fn new(mat: Mat) -> Self {
        Self::with_timestamp(mat, Instant::now())
    }

    /// Creates a frame that keeps an existing capture time
    ///
    /// Used for frames derived from another frame (e.g. color conversion).
    pub fn with_timestamp(mat: Mat, timestamp: Instant) -> Self {
        let width = mat.cols();
        let height = mat.rows();
        let channels = mat.channels();

        VideoFrame {
            data: mat,
            width,
            height,
            channels,
            timestamp,
        }
    }

    /// Returns frame width in pixels
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns frame height in pixels
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of samples per pixel (3 for BGR, 1 for grayscale)
    pub fn channels(&self) -> i32 {
        self.channels
    }

    /// True when the frame holds no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns capture timestamp
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    /// Returns reference to the internal OpenCV matrix
    pub fn data(&self) -> &Mat {
        &self.data
    }

    /// Consumes the frame and returns the internal Mat
    pub fn into_mat(self) -> Mat {
        self.data
    }
}
