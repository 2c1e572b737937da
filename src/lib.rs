//! # Silence Probe
//!
//! Tells whether a media file carries nothing but silent audio.
//!
//! ## Features
//!
//! - **Sample decoding**: 8-bit and 16-bit PCM, either byte order, signed or offset binary
//! - **Silence classification**: a file is silent when every decoded sample is exactly zero
//! - **Format normalization**: non-WAV inputs are transcoded to a temporary WAV
//!   with ffmpeg or Symphonia, then cleaned up
//!
//! ## Quick Start
//!
//! ```no_run
//! use silence_probe::{analyze_file, is_silent, DetectorConfig};
//!
//! // Fail-safe verdict: unreadable files count as silent
//! println!("silent: {}", is_silent("with_audio.flv"));
//!
//! // Explicit result
//! let report = analyze_file("speech.wav", &DetectorConfig::default())?;
//! println!("{} samples, silent: {}", report.sample_count, report.silent);
//! # Ok::<(), silence_probe::SilenceError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Media file → Normalization → PCM bytes + format → Decoding → Amplitudes → Classification
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod normalize;

use std::path::Path;
use std::time::Instant;

// Re-export main types
pub use analysis::result::SilenceReport;
pub use config::{DetectorConfig, TargetEncoding, TranscoderKind};
pub use error::{Result, SilenceError};
pub use io::{decode_samples, BitDepth, FormatDescriptor, PcmBuffer};

use analysis::silence::first_sound;
use normalize::normalize;

/// Analyze a media file
///
/// Normalizes the file to PCM, decodes every sample, and classifies the
/// result. A temporary artifact created along the way is deleted before
/// this function returns.
///
/// # Arguments
///
/// * `path` - Media file of any container the configured transcoder reads
/// * `config` - Detector configuration
///
/// # Errors
///
/// Returns `SilenceError` if the file cannot be read or transcoded, or if
/// its samples use an unsupported encoding.
pub fn analyze_file<P: AsRef<Path>>(path: P, config: &DetectorConfig) -> Result<SilenceReport> {
    let start_time = Instant::now();
    let path = path.as_ref();

    config.validate()?;
    let input = normalize(path, config)?;

    let samples = input.buffer().amplitudes();
    let first_sound_index = first_sound(&samples);

    let report = SilenceReport {
        silent: first_sound_index.is_none(),
        sample_count: samples.len(),
        first_sound_index,
        format: input.buffer().format(),
        transcoded: input.transcoded(),
        processing_time_ms: start_time.elapsed().as_secs_f32() * 1000.0,
    };

    // Releases the temporary artifact, if any
    drop(input);

    log::debug!(
        "{}: {} samples, silent = {}",
        path.display(),
        report.sample_count,
        report.silent
    );
    Ok(report)
}

/// Check whether a media file is silent, with a custom configuration
///
/// Any failure to read, transcode, or interpret the file is logged and
/// reported as silent.
pub fn is_silent_with<P: AsRef<Path>>(path: P, config: &DetectorConfig) -> bool {
    let path = path.as_ref();
    match analyze_file(path, config) {
        Ok(report) => report.silent,
        Err(e) => {
            log::warn!("Treating {} as silent: {}", path.display(), e);
            true
        }
    }
}

/// Check whether a media file is silent, with the default configuration
///
/// # Example
///
/// ```no_run
/// if silence_probe::is_silent("recording.mp4") {
///     println!("no audible content");
/// }
/// ```
pub fn is_silent<P: AsRef<Path>>(path: P) -> bool {
    is_silent_with(path, &DetectorConfig::default())
}
