//! PCM format descriptors
//!
//! A [`FormatDescriptor`] tells the sample decoder how to read a raw byte
//! buffer: how wide each sample is, which byte comes first, and whether the
//! bytes are two's complement or offset binary.
//!
//! # Example
//!
//! ```
//! use silence_probe::io::format::{BitDepth, FormatDescriptor};
//!
//! let format = FormatDescriptor::from_encoding_label(8, false, "PCM_SIGNED")?;
//! assert_eq!(format.bit_depth, BitDepth::Eight);
//! assert!(format.signed);
//! # Ok::<(), silence_probe::SilenceError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SilenceError;

/// Encoding labels starting with this marker denote signed PCM
pub const SIGNED_PCM_MARKER: &str = "PCM_SIGN";

/// Sample widths the decoder understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitDepth {
    /// One byte per sample
    Eight,
    /// Two bytes per sample
    Sixteen,
}

impl BitDepth {
    /// Number of bits per sample
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    /// Number of bytes per sample
    pub fn bytes(self) -> usize {
        match self {
            BitDepth::Eight => 1,
            BitDepth::Sixteen => 2,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = SilenceError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            other => Err(SilenceError::UnsupportedBitDepth(other)),
        }
    }
}

/// Describes how to interpret one PCM byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Width of one sample
    pub bit_depth: BitDepth,

    /// Most significant byte first (only meaningful for 16-bit samples)
    pub big_endian: bool,

    /// Two's complement (`true`) or offset binary (`false`)
    pub signed: bool,
}

impl FormatDescriptor {
    /// Create a descriptor from a numeric bit depth
    ///
    /// # Errors
    ///
    /// Returns [`SilenceError::UnsupportedBitDepth`] for anything but 8 or 16.
    pub fn new(bits: u16, big_endian: bool, signed: bool) -> Result<Self, SilenceError> {
        Ok(Self {
            bit_depth: BitDepth::try_from(bits)?,
            big_endian,
            signed,
        })
    }

    /// Create a descriptor, taking signedness from an encoding name
    ///
    /// Labels such as `PCM_SIGNED` mark signed samples; anything else
    /// (`PCM_UNSIGNED`, `PCM_FLOAT`, ...) is treated as unsigned.
    pub fn from_encoding_label(
        bits: u16,
        big_endian: bool,
        label: &str,
    ) -> Result<Self, SilenceError> {
        Self::new(bits, big_endian, label.starts_with(SIGNED_PCM_MARKER))
    }

    /// Signed 16-bit little-endian, the layout transcoders produce by default
    pub fn pcm_s16le() -> Self {
        Self {
            bit_depth: BitDepth::Sixteen,
            big_endian: false,
            signed: true,
        }
    }

    /// Unsigned 8-bit, the only 8-bit layout WAV allows
    pub fn pcm_u8() -> Self {
        Self {
            bit_depth: BitDepth::Eight,
            big_endian: false,
            signed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_depths() {
        assert_eq!(BitDepth::try_from(8).unwrap(), BitDepth::Eight);
        assert_eq!(BitDepth::try_from(16).unwrap(), BitDepth::Sixteen);
        assert_eq!(BitDepth::Sixteen.bytes(), 2);
        assert_eq!(BitDepth::Eight.bits(), 8);
    }

    #[test]
    fn test_rejects_wide_depths() {
        for bits in [0u16, 4, 12, 24, 32, 64] {
            match FormatDescriptor::new(bits, false, true) {
                Err(SilenceError::UnsupportedBitDepth(b)) => assert_eq!(b, bits),
                other => panic!("expected UnsupportedBitDepth for {}, got {:?}", bits, other),
            }
        }
    }

    #[test]
    fn test_encoding_label_signedness() {
        let signed = FormatDescriptor::from_encoding_label(8, false, "PCM_SIGNED").unwrap();
        assert!(signed.signed);

        let unsigned = FormatDescriptor::from_encoding_label(8, false, "PCM_UNSIGNED").unwrap();
        assert!(!unsigned.signed);

        // Case matters, as with the encoding names audio headers carry
        let lower = FormatDescriptor::from_encoding_label(16, true, "pcm_signed").unwrap();
        assert!(!lower.signed);
        assert!(lower.big_endian);
    }
}
