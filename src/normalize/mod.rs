//! Format normalization
//!
//! Brings an arbitrary media file into a form the sample decoder reads:
//! WAV files are buffered directly, everything else is transcoded into a
//! temporary WAV artifact first. The artifact lives exactly as long as the
//! [`NormalizedInput`] that owns it.

pub mod temp;
pub mod transcoder;

use std::path::Path;

use crate::config::DetectorConfig;
use crate::error::SilenceError;
use crate::io::sample_buffer::PcmBuffer;
use crate::io::wav::read_wav;

pub use temp::TempArtifact;
pub use transcoder::{transcoder_for, FfmpegTranscoder, SymphoniaTranscoder, Transcoder};

/// Check whether a file can be read without transcoding
///
/// Only the file name is inspected: paths ending in `.wav` are read
/// directly. The match is case-sensitive.
pub fn is_wav(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".wav")
}

/// Buffered PCM data ready for decoding
#[derive(Debug)]
pub struct NormalizedInput {
    buffer: PcmBuffer,
    artifact: Option<TempArtifact>,
}

impl NormalizedInput {
    /// The buffered samples
    pub fn buffer(&self) -> &PcmBuffer {
        &self.buffer
    }

    /// Whether a transcoded artifact backs this input
    pub fn transcoded(&self) -> bool {
        self.artifact.is_some()
    }
}

/// Produce a PCM buffer for `path`
///
/// # Errors
///
/// Returns an error when the file cannot be read, the transcoder fails, or
/// the resulting WAV uses an encoding the decoder does not support. A
/// partially written artifact is removed before the error is returned.
pub fn normalize(path: &Path, config: &DetectorConfig) -> Result<NormalizedInput, SilenceError> {
    if is_wav(path) {
        log::debug!("{} is WAV, reading directly", path.display());
        return Ok(NormalizedInput {
            buffer: read_wav(path)?,
            artifact: None,
        });
    }

    let artifact = TempArtifact::new_in(&config.temp_dir, config.keep_artifacts);
    log::debug!(
        "Converting {} to {} ({:?})",
        path.display(),
        artifact.path().display(),
        config.transcoder
    );

    transcoder_for(config).transcode(path, artifact.path(), &config.target)?;
    let buffer = read_wav(artifact.path())?;

    Ok(NormalizedInput {
        buffer,
        artifact: Some(artifact),
    })
}
