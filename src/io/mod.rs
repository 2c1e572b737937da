//! Audio I/O modules
//!
//! PCM format descriptors, raw sample decoding, and WAV buffering.

pub mod decoder;
pub mod format;
pub mod sample_buffer;
pub mod wav;

pub use decoder::decode_samples;
pub use format::{BitDepth, FormatDescriptor};
pub use sample_buffer::PcmBuffer;
