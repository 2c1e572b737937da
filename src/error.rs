//! Error types for silence probing

use thiserror::Error;

/// Errors that can occur while preparing a file for silence classification
///
/// Decoding and classification themselves never fail; every variant here
/// originates in the I/O boundary or in configuration.
#[derive(Debug, Error)]
pub enum SilenceError {
    /// Reading or opening a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The WAV header could not be parsed
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// The transcoder could not convert the input into a WAV artifact
    #[error("Transcode failed: {0}")]
    Transcode(String),

    /// Sample width other than 8 or 16 bits
    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Sample encoding the decoder does not interpret (e.g. IEEE float)
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Invalid configuration or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SilenceError>;
