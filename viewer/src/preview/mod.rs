//! Capture-display loop
//!
//! Reads camera frames, converts them to grayscale and shows them until the
//! quit key is pressed or the camera stops delivering frames.

pub mod preview_loop;
pub mod settings;

pub use preview_loop::{
    CAMERA_UNAVAILABLE, FRAME_UNAVAILABLE, LoopState, PreviewError, PreviewLoop, PreviewOutcome,
    PreviewSummary, StopReason, run_preview,
};
pub use settings::PreviewSettings;
