//! Error types for playback

use thiserror::Error;

/// Playback errors
///
/// State transitions themselves never fail; errors only cross the audio
/// bridge boundary as asynchronous play outcomes.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The platform rejected a play command (autoplay policy, decode
    /// failure, unreachable resource)
    #[error("Playback start failed: {0}")]
    StartFailed(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
