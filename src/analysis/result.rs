//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::io::format::FormatDescriptor;

/// Outcome of analysing one media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SilenceReport {
    /// `true` when every decoded sample is zero
    pub silent: bool,

    /// Number of decoded samples (all channels, interleaved)
    pub sample_count: usize,

    /// Index of the first nonzero sample
    pub first_sound_index: Option<usize>,

    /// Format the samples were decoded with
    pub format: FormatDescriptor,

    /// Whether the input went through the transcoder
    pub transcoded: bool,

    /// Wall-clock time spent, in milliseconds
    pub processing_time_ms: f32,
}
