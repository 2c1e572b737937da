//! Configuration parameters for silence probing

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SilenceError;
use crate::io::format::{BitDepth, FormatDescriptor};

/// Which transcoder converts non-WAV inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscoderKind {
    /// External `ffmpeg` process
    Ffmpeg,
    /// In-process Symphonia decoder
    Symphonia,
}

/// PCM layout a transcoder writes into its WAV artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEncoding {
    /// Bits per sample (8 or 16)
    pub bit_depth: u16,

    /// Output sample rate; `None` keeps the source rate
    pub sample_rate: Option<u32>,

    /// Output channel count; `None` keeps the source layout
    pub channels: Option<u16>,
}

impl Default for TargetEncoding {
    fn default() -> Self {
        Self {
            bit_depth: 16,
            sample_rate: None,
            channels: None,
        }
    }
}

impl TargetEncoding {
    /// Descriptor of the samples a WAV artifact with this encoding holds
    pub fn descriptor(&self) -> Result<FormatDescriptor, SilenceError> {
        match BitDepth::try_from(self.bit_depth)? {
            BitDepth::Sixteen => Ok(FormatDescriptor::pcm_s16le()),
            BitDepth::Eight => Ok(FormatDescriptor::pcm_u8()),
        }
    }
}

/// Detector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Directory that receives transcoded artifacts (default: system temp dir)
    pub temp_dir: PathBuf,

    /// Transcoder used for non-WAV inputs (default: Ffmpeg)
    pub transcoder: TranscoderKind,

    /// Path or name of the ffmpeg executable (default: "ffmpeg")
    pub ffmpeg_path: PathBuf,

    /// Encoding of transcoded artifacts (default: 16-bit, source rate and layout)
    pub target: TargetEncoding,

    /// Leave transcoded artifacts on disk (default: false)
    pub keep_artifacts: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
            transcoder: TranscoderKind::Ffmpeg,
            ffmpeg_path: PathBuf::from("ffmpeg"),
            target: TargetEncoding::default(),
            keep_artifacts: false,
        }
    }
}

impl DetectorConfig {
    /// Check the configuration before any file is touched
    ///
    /// # Errors
    ///
    /// Returns [`SilenceError::InvalidInput`] for a target encoding the
    /// decoder cannot read back, or zero rates and channel counts.
    pub fn validate(&self) -> Result<(), SilenceError> {
        if let Err(e) = self.target.descriptor() {
            return Err(SilenceError::InvalidInput(format!("target encoding: {}", e)));
        }
        if self.target.sample_rate == Some(0) {
            return Err(SilenceError::InvalidInput("target sample rate must be positive".to_string()));
        }
        if self.target.channels == Some(0) {
            return Err(SilenceError::InvalidInput("target channel count must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.transcoder, TranscoderKind::Ffmpeg);
        assert_eq!(config.target.descriptor().unwrap(), FormatDescriptor::pcm_s16le());
    }

    #[test]
    fn test_rejects_unreadable_target() {
        let mut config = DetectorConfig::default();
        config.target.bit_depth = 24;
        assert!(matches!(config.validate(), Err(SilenceError::InvalidInput(_))));

        let mut config = DetectorConfig::default();
        config.target.channels = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_8bit_target() {
        let target = TargetEncoding {
            bit_depth: 8,
            ..TargetEncoding::default()
        };
        assert_eq!(target.descriptor().unwrap(), FormatDescriptor::pcm_u8());
    }
}
