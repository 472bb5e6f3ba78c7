//! Common constants shared across media modules

/// Logging intervals for frame processing
pub mod logging {
    /// Log progress every N frames (camera capture)
    pub const CAMERA_LOG_INTERVAL: u64 = 1000;
    /// Log progress every N frames (window display)
    pub const DISPLAY_LOG_INTERVAL: u64 = 1000;
}

/// Keyboard codes returned by `highgui::wait_key`
pub mod keys {
    /// Value returned when no key was pressed before the timeout
    pub const NO_KEY: i32 = -1;
    /// Mask selecting the character byte of a key code
    pub const KEY_CODE_MASK: i32 = 0xFF;
}
