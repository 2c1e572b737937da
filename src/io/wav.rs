//! WAV artifact reading
//!
//! Parses the RIFF header with `hound`, derives the [`FormatDescriptor`] and
//! buffers the data chunk as raw bytes so the sample decoder sees the bytes
//! exactly as they are stored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec};

use crate::error::SilenceError;
use crate::io::format::FormatDescriptor;
use crate::io::sample_buffer::PcmBuffer;

/// Open a WAV file and buffer its sample data
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the header is malformed,
/// or the samples are float / wider than 16 bits.
pub fn read_wav(path: &Path) -> Result<PcmBuffer, SilenceError> {
    log::debug!("Reading WAV file: {}", path.display());
    let file = File::open(path)?;
    read_wav_from(BufReader::new(file))
}

/// Read a WAV stream and buffer its sample data
pub fn read_wav_from<R: Read>(reader: R) -> Result<PcmBuffer, SilenceError> {
    let wav = WavReader::new(reader)?;
    let spec = wav.spec();
    let format = descriptor_for(&spec)?;

    log::debug!(
        "WAV header: {} ch, {} Hz, {}-bit, {} samples",
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        wav.len()
    );

    // The inner reader sits at the start of the data chunk
    let data_len = u64::from(wav.len()) * format.bit_depth.bytes() as u64;
    PcmBuffer::read_from(wav.into_inner().take(data_len), format)
}

/// Derive the decoder format from a WAV header
///
/// WAV stores little-endian samples; 8-bit samples are offset binary and
/// wider samples are two's complement.
pub fn descriptor_for(spec: &WavSpec) -> Result<FormatDescriptor, SilenceError> {
    if spec.sample_format == SampleFormat::Float {
        return Err(SilenceError::UnsupportedEncoding(format!(
            "{}-bit IEEE float",
            spec.bits_per_sample
        )));
    }
    let label = if spec.bits_per_sample > 8 { "PCM_SIGNED" } else { "PCM_UNSIGNED" };
    FormatDescriptor::from_encoding_label(spec.bits_per_sample, false, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::format::BitDepth;
    use hound::WavWriter;
    use std::io::Cursor;

    fn wav_bytes_i16(samples: &[i16], channels: u16) -> Vec<u8> {
        let spec = WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        bytes
    }

    #[test]
    fn test_reads_16bit_data_chunk() {
        let bytes = wav_bytes_i16(&[0, 1, -1, 300], 2);
        let buffer = read_wav_from(Cursor::new(bytes)).unwrap();

        assert_eq!(buffer.format(), FormatDescriptor::pcm_s16le());
        assert_eq!(buffer.bytes(), &[0x00, 0x00, 0x01, 0x00, 0xFF, 0xFF, 0x2C, 0x01]);
        assert_eq!(buffer.amplitudes(), vec![0, 1, -1, 300]);
    }

    #[test]
    fn test_reads_8bit_as_unsigned() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 8,
            sample_format: SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            for s in [0i8, 0, -2] {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }

        let buffer = read_wav_from(Cursor::new(bytes)).unwrap();
        assert_eq!(buffer.format().bit_depth, BitDepth::Eight);
        assert!(!buffer.format().signed);
        assert_eq!(buffer.bytes(), &[128, 128, 126]);
        assert_eq!(buffer.amplitudes(), vec![0, 0, -2]);
    }

    #[test]
    fn test_rejects_float_and_24bit() {
        let float = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        assert!(matches!(descriptor_for(&float), Err(SilenceError::UnsupportedEncoding(_))));

        let wide = WavSpec {
            bits_per_sample: 24,
            sample_format: SampleFormat::Int,
            ..float
        };
        assert!(matches!(descriptor_for(&wide), Err(SilenceError::UnsupportedBitDepth(24))));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = read_wav_from(Cursor::new(b"definitely not a riff file".to_vec()));
        assert!(matches!(result, Err(SilenceError::Wav(_))));
    }
}
