//! HighGUI display window.

use crate::common::constants::keys::{KEY_CODE_MASK, NO_KEY};
use crate::common::constants::logging::DISPLAY_LOG_INTERVAL;
use crate::error::{MediaError, Result};
use crate::video::frame::VideoFrame;
use crate::video::traits::FrameDisplay;
use logging::Logger;
use opencv::highgui;

/// A titled HighGUI window
///
/// The native window is created by OpenCV on the first `show`. `close`
/// destroys every HighGUI window of the process, not only this one.
pub struct DisplayWindow {
    title: String,
    logger: Logger,
    frames_shown: u64,
    created: bool,
    closed: bool,
}

impl DisplayWindow {
    /// Prepares a window with the given title
    ///
    /// # Returns
    /// * `Err(MediaError::Display)` - If the title is empty
    pub fn new(title: &str, logger: Logger) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(MediaError::Display(
                "Window title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            logger,
            frames_shown: 0,
            created: false,
            closed: false,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of frames rendered so far
    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }

    fn destroy(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.logger.info(&format!(
            "Destroying windows. Frames shown in '{}': {}",
            self.title, self.frames_shown
        ));

        highgui::destroy_all_windows()
            .map_err(|e| MediaError::Display(format!("Error destroying windows: {}", e)))
    }
}

impl FrameDisplay for DisplayWindow {
    fn show(&mut self, frame: &VideoFrame) -> Result<()> {
        if self.closed {
            return Err(MediaError::Display("Window already closed".to_string()));
        }

        highgui::imshow(&self.title, frame.data())
            .map_err(|e| MediaError::Display(format!("Failed to show frame: {}", e)))?;

        if !self.created {
            self.created = true;
            self.logger.debug(&format!(
                "Window '{}' created ({}x{})",
                self.title,
                frame.width(),
                frame.height()
            ));
        }

        self.frames_shown += 1;
        if self.frames_shown.is_multiple_of(DISPLAY_LOG_INTERVAL) {
            self.logger
                .debug(&format!("Frames shown: {}", self.frames_shown));
        }

        Ok(())
    }

    fn poll_key(&mut self, wait_ms: i32) -> Result<Option<i32>> {
        let key = highgui::wait_key(wait_ms)
            .map_err(|e| MediaError::Display(format!("Failed to poll keyboard: {}", e)))?;

        Ok(if key == NO_KEY { None } else { Some(key) })
    }

    fn close(&mut self) -> Result<()> {
        self.destroy()
    }
}

impl Drop for DisplayWindow {
    /// Tears the window down if it was shown but never closed
    fn drop(&mut self) {
        if self.created
            && let Err(e) = self.destroy()
        {
            self.logger.error(&e.to_string());
        }
    }
}

/// Checks whether a raw key code is the given character
///
/// Only the low byte of the code is compared, so modifier bits some
/// platforms add to `wait_key` results are ignored. Non-ASCII characters
/// never match.
pub fn key_matches(code: i32, key: char) -> bool {
    code != NO_KEY && key.is_ascii() && (code & KEY_CODE_MASK) == key as i32
}
