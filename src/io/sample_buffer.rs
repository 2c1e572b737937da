//! Fully buffered PCM data

use std::io::Read;

use crate::error::SilenceError;
use crate::io::decoder::decode_samples;
use crate::io::format::FormatDescriptor;

/// Raw PCM bytes together with the format that governs them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    /// Sample data, channels interleaved
    bytes: Vec<u8>,
    /// Layout of `bytes`
    format: FormatDescriptor,
}

impl PcmBuffer {
    /// Wrap an in-memory byte buffer
    pub fn new(bytes: Vec<u8>, format: FormatDescriptor) -> Self {
        Self { bytes, format }
    }

    /// Read a stream to its end and keep everything in memory
    ///
    /// # Errors
    ///
    /// Returns [`SilenceError::Io`] if the stream fails mid-read.
    pub fn read_from<R: Read>(mut reader: R, format: FormatDescriptor) -> Result<Self, SilenceError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        log::debug!("Buffered {} PCM bytes", bytes.len());
        Ok(Self { bytes, format })
    }

    /// Raw bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Format descriptor
    pub fn format(&self) -> FormatDescriptor {
        self.format
    }

    /// Decode into amplitudes
    pub fn amplitudes(&self) -> Vec<i32> {
        decode_samples(&self.bytes, self.format)
    }
}
