//! The preview loop and its acquire/release sequence.
//!
//! Every way out of the loop (quit key, failed read, failed conversion or
//! display) ends in the same release step, which runs exactly once.

use super::settings::PreviewSettings;
use logging::Logger;
use media::{FrameDisplay, FrameSource, MediaError, VideoFrame, frame_to_gray, key_matches};
use std::fmt;
use std::io::Write;

/// Printed when the camera cannot be opened
pub const CAMERA_UNAVAILABLE: &str = "Cannot open the webcam.";
/// Printed when a frame cannot be read
pub const FRAME_UNAVAILABLE: &str = "Cannot retrieve a frame.";

/// Lifecycle of a [`PreviewLoop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    NotStarted,
    Running,
    Stopped,
}

/// Why the loop stopped
#[derive(Debug)]
pub enum StopReason {
    /// The quit key was pressed
    UserQuit,
    /// The source failed to deliver a frame (end of stream, disconnect)
    ReadFailure(MediaError),
    /// Conversion, display or key polling failed
    ProcessingFailure(MediaError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::UserQuit => write!(f, "quit key pressed"),
            StopReason::ReadFailure(err) => write!(f, "frame read failed: {}", err),
            StopReason::ProcessingFailure(err) => write!(f, "frame processing failed: {}", err),
        }
    }
}

/// Result of a completed loop run
#[derive(Debug)]
pub struct PreviewSummary {
    pub reason: StopReason,
    /// Grayscale frames successfully shown
    pub frames_displayed: u64,
}

/// Result of the whole acquire/iterate/release sequence
#[derive(Debug)]
pub enum PreviewOutcome {
    /// The source could not be opened; nothing was shown or released
    AcquisitionFailed(MediaError),
    /// The loop ran and released its resources
    Finished(PreviewSummary),
}

#[derive(Debug, PartialEq, Eq)]
pub enum PreviewError {
    /// `run` was called on a loop that has already stopped
    AlreadyStopped,
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::AlreadyStopped => write!(f, "Preview loop has already stopped"),
        }
    }
}

impl std::error::Error for PreviewError {}

/// Owns an acquired source and a display for the duration of one preview
pub struct PreviewLoop<S: FrameSource, D: FrameDisplay> {
    source: S,
    display: D,
    settings: PreviewSettings,
    logger: Logger,
    state: LoopState,
    frames_displayed: u64,
}

impl<S: FrameSource, D: FrameDisplay> PreviewLoop<S, D> {
    pub fn new(source: S, display: D, settings: PreviewSettings, logger: Logger) -> Self {
        Self {
            source,
            display,
            settings,
            logger,
            state: LoopState::NotStarted,
            frames_displayed: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Runs the loop until it stops, then releases source and display
    ///
    /// Diagnostics for failed reads or processing are written to `out`.
    ///
    /// # Errors
    /// [`PreviewError::AlreadyStopped`] if the loop has already run.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<PreviewSummary, PreviewError> {
        if self.state != LoopState::NotStarted {
            return Err(PreviewError::AlreadyStopped);
        }
        Ok(self.drive(out))
    }

    fn drive<W: Write>(&mut self, out: &mut W) -> PreviewSummary {
        self.state = LoopState::Running;
        self.logger.info(&format!(
            "Preview running (quit key '{}', key wait {} ms)",
            self.settings.quit_key, self.settings.key_wait_ms
        ));

        let reason = self.iterate(out);

        self.state = LoopState::Stopped;
        self.logger.info(&format!(
            "Preview stopped after {} frame(s): {}",
            self.frames_displayed, reason
        ));

        self.release();

        PreviewSummary {
            reason,
            frames_displayed: self.frames_displayed,
        }
    }

    fn iterate<W: Write>(&mut self, out: &mut W) -> StopReason {
        loop {
            let frame = match self.source.read_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    self.logger.warn(&format!("Frame read failed: {}", e));
                    report(out, FRAME_UNAVAILABLE);
                    return StopReason::ReadFailure(e);
                }
            };

            if let Err(e) = self.present(&frame) {
                self.logger.error(&format!("Frame processing failed: {}", e));
                report(out, &format!("Cannot process a frame: {}", e));
                return StopReason::ProcessingFailure(e);
            }

            match self.display.poll_key(self.settings.key_wait_ms) {
                Ok(Some(code)) if key_matches(code, self.settings.quit_key) => {
                    self.logger.debug(&format!("Quit key received (code {})", code));
                    return StopReason::UserQuit;
                }
                Ok(_) => {}
                Err(e) => {
                    self.logger.error(&format!("Key polling failed: {}", e));
                    report(out, &format!("Cannot process a frame: {}", e));
                    return StopReason::ProcessingFailure(e);
                }
            }
        }
    }

    fn present(&mut self, frame: &VideoFrame) -> media::Result<()> {
        let gray = frame_to_gray(frame)?;
        self.display.show(&gray)?;
        self.frames_displayed += 1;
        Ok(())
    }

    fn release(&mut self) {
        if let Err(e) = self.source.release() {
            self.logger.error(&format!("Failed to release source: {}", e));
        }
        if let Err(e) = self.display.close() {
            self.logger.error(&format!("Failed to close display: {}", e));
        }
        self.logger.debug("Resources released");
    }
}

/// Acquires the source with `open_source`, then runs and releases the loop
///
/// If acquisition fails, [`CAMERA_UNAVAILABLE`] is written to `out` and the
/// display is dropped untouched.
pub fn run_preview<S, D, F, W>(
    open_source: F,
    display: D,
    settings: PreviewSettings,
    logger: &Logger,
    out: &mut W,
) -> PreviewOutcome
where
    S: FrameSource,
    D: FrameDisplay,
    F: FnOnce() -> media::Result<S>,
    W: Write,
{
    let source = match open_source() {
        Ok(source) => source,
        Err(e) => {
            logger.error(&format!("Video source unavailable: {}", e));
            report(out, CAMERA_UNAVAILABLE);
            return PreviewOutcome::AcquisitionFailed(e);
        }
    };

    let mut preview = PreviewLoop::new(source, display, settings, logger.for_component("Preview"));
    PreviewOutcome::Finished(preview.drive(out))
}

fn report<W: Write>(out: &mut W, message: &str) {
    let _ = writeln!(out, "{}", message);
    let _ = out.flush();
}
