// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the photobooth pipeline

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Compositing errors
    Compose(ComposeError),
    /// Capture errors
    Capture(CaptureError),
    /// Photobooth session errors
    Session(SessionError),
    /// Media encode/decode errors
    Media(MediaError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Compositing-specific errors
#[derive(Debug, Clone)]
pub enum ComposeError {
    /// Source bitmap is empty or malformed
    InvalidInput(String),
}

/// Capture-specific errors
#[derive(Debug, Clone)]
pub enum CaptureError {
    /// The frame source cannot currently provide a frame
    SourceUnavailable(String),
}

/// Photobooth session errors
#[derive(Debug, Clone)]
pub enum SessionError {
    /// A session is already running
    AlreadyActive,
    /// Capture request while the session state machine is not idle
    CaptureRejected,
}

/// Media encode/decode errors
#[derive(Debug, Clone)]
pub enum MediaError {
    /// An image failed to decode
    DecodeFailed(String),
    /// Encoding failed
    EncodingFailed(String),
    /// Save failed
    SaveFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Compose(e) => write!(f, "Compositing error: {}", e),
            AppError::Capture(e) => write!(f, "Capture error: {}", e),
            AppError::Session(e) => write!(f, "Session error: {}", e),
            AppError::Media(e) => write!(f, "Media error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AlreadyActive => write!(f, "A session is already active"),
            SessionError::CaptureRejected => {
                write!(f, "Capture rejected while a session is running")
            }
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            MediaError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            MediaError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ComposeError> for AppError {
    fn from(e: ComposeError) -> Self {
        AppError::Compose(e)
    }
}

impl From<CaptureError> for AppError {
    fn from(e: CaptureError) -> Self {
        AppError::Capture(e)
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<MediaError> for AppError {
    fn from(e: MediaError) -> Self {
        AppError::Media(e)
    }
}
