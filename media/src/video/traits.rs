//! Traits at the capture and display seams
//!
//! The preview loop is written against these traits so that the camera and
//! the window can be replaced (e.g. by in-memory doubles in tests).

use super::frame::VideoFrame;
use crate::error::Result;

/// A producer of video frames, such as a camera
///
/// # Responsibilities
/// - Yield one frame per `read_frame` call, blocking until it is available
/// - Report end of stream or device failure as an error
/// - Free the underlying device on `release`
pub trait FrameSource {
    /// Reads the next frame
    ///
    /// # Returns
    /// * `Ok(VideoFrame)` - A non-empty frame
    /// * `Err` - End of stream, disconnection or an empty read
    fn read_frame(&mut self) -> Result<VideoFrame>;

    /// Releases the device handle
    ///
    /// Calling it more than once must be harmless.
    fn release(&mut self) -> Result<()>;
}

/// An on-screen surface that renders frames and reports key presses
pub trait FrameDisplay {
    /// Renders a frame, creating the window on first use
    fn show(&mut self, frame: &VideoFrame) -> Result<()>;

    /// Waits up to `wait_ms` milliseconds for a key press
    ///
    /// Also pumps the window's event processing (repaint, input).
    ///
    /// # Returns
    /// * `Ok(Some(code))` - Raw key code of the pressed key
    /// * `Ok(None)` - No key pressed before the timeout
    fn poll_key(&mut self, wait_ms: i32) -> Result<Option<i32>>;

    /// Destroys all windows
    ///
    /// Calling it more than once must be harmless.
    fn close(&mut self) -> Result<()>;
}
