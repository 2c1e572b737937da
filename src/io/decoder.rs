//! Raw PCM sample decoding
//!
//! Turns a byte buffer into signed integer amplitudes according to a
//! [`FormatDescriptor`]. Interleaved channels are kept interleaved.
//!
//! # Example
//!
//! ```
//! use silence_probe::io::decoder::decode_samples;
//! use silence_probe::io::format::FormatDescriptor;
//!
//! let format = FormatDescriptor::new(16, true, true)?;
//! assert_eq!(decode_samples(&[0x00, 0x01, 0xFF, 0xFF], format), vec![1, -1]);
//! # Ok::<(), silence_probe::SilenceError>(())
//! ```

use crate::io::format::{BitDepth, FormatDescriptor};

/// Zero level of offset-binary 8-bit samples
const UNSIGNED_8BIT_BIAS: i32 = 128;

/// Decode a PCM byte buffer into amplitudes
///
/// # Arguments
///
/// * `bytes` - Raw PCM bytes, fully buffered
/// * `format` - How the bytes are laid out
///
/// # Returns
///
/// One amplitude per sample: `bytes.len() / 2` values for 16-bit input (a
/// trailing odd byte is ignored), `bytes.len()` values for 8-bit input.
/// 16-bit values lie in `-32768..=32767`, 8-bit values in `-128..=127`.
pub fn decode_samples(bytes: &[u8], format: FormatDescriptor) -> Vec<i32> {
    log::debug!(
        "Decoding {} bytes as {}-bit {} {}",
        bytes.len(),
        format.bit_depth.bits(),
        if format.big_endian { "big-endian" } else { "little-endian" },
        if format.signed { "signed" } else { "unsigned" }
    );

    match format.bit_depth {
        BitDepth::Sixteen => decode_16bit(bytes, format.big_endian),
        BitDepth::Eight => decode_8bit(bytes, format.signed),
    }
}

fn decode_16bit(bytes: &[u8], big_endian: bool) -> Vec<i32> {
    // chunks_exact drops the unpaired trailing byte
    bytes
        .chunks_exact(2)
        .map(|pair| {
            let (msb, lsb) = if big_endian {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            ((msb as i8 as i32) << 8) | lsb as i32
        })
        .collect()
}

fn decode_8bit(bytes: &[u8], signed: bool) -> Vec<i32> {
    if signed {
        bytes.iter().map(|&b| b as i8 as i32).collect()
    } else {
        bytes.iter().map(|&b| b as i32 - UNSIGNED_8BIT_BIAS).collect()
    }
}
