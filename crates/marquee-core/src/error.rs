//! Error types for Marquee Core

use thiserror::Error;

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, Error>;

/// Player error types
#[derive(Error, Debug)]
pub enum Error {
    // Element errors
    #[error("Media element is not mounted")]
    NotMounted,

    #[error("Fullscreen is not supported by this element")]
    FullscreenUnsupported,

    // Playback errors
    #[error("Playback request rejected: {0}")]
    Playback(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns true if this error is recoverable by user action
    /// (e.g. a later gesture can retry playback)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Playback(_))
    }

    /// Returns a stable code for logging
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::NotMounted => "NOT_MOUNTED",
            Error::FullscreenUnsupported => "FULLSCREEN_UNSUPPORTED",
            Error::Playback(_) => "PLAYBACK_REJECTED",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}
