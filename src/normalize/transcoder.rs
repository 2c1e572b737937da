//! Transcoders that turn arbitrary media into PCM WAV artifacts
//!
//! [`FfmpegTranscoder`] shells out to the `ffmpeg` binary and handles any
//! container ffmpeg understands, video files included. [`SymphoniaTranscoder`]
//! decodes in-process with Symphonia and writes the WAV with `hound`; it
//! covers the formats Symphonia is built with and does not resample.

use std::fs::File;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::Command;

use hound::{SampleFormat, WavSpec, WavWriter};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, Packet};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::default::{get_codecs, get_probe};

use crate::config::{DetectorConfig, TargetEncoding, TranscoderKind};
use crate::error::SilenceError;
use crate::io::format::BitDepth;

/// Sample rate assumed when a track does not declare one
const FALLBACK_SAMPLE_RATE: u32 = 44100;

/// Converts a media file into a WAV file with a given PCM encoding
pub trait Transcoder {
    /// Write `input` as a WAV file at `output`
    ///
    /// # Errors
    ///
    /// Returns [`SilenceError::Transcode`] when the input cannot be converted.
    fn transcode(&self, input: &Path, output: &Path, target: &TargetEncoding) -> Result<(), SilenceError>;
}

/// Build the transcoder selected by the configuration
pub fn transcoder_for(config: &DetectorConfig) -> Box<dyn Transcoder> {
    match config.transcoder {
        TranscoderKind::Ffmpeg => Box::new(FfmpegTranscoder::new(config.ffmpeg_path.clone())),
        TranscoderKind::Symphonia => Box::new(SymphoniaTranscoder::new()),
    }
}

/// Transcoder backed by an external ffmpeg process
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    binary: PathBuf,
}

impl FfmpegTranscoder {
    /// Use the ffmpeg executable at `binary` (a bare name is looked up in `PATH`)
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self { binary: binary.into() }
    }

    fn command(&self, input: &Path, output: &Path, target: &TargetEncoding) -> Result<Command, SilenceError> {
        let codec = match target.descriptor()?.bit_depth {
            BitDepth::Sixteen => "pcm_s16le",
            BitDepth::Eight => "pcm_u8",
        };

        let mut cmd = Command::new(&self.binary);
        cmd.args(["-nostdin", "-hide_banner", "-loglevel", "error", "-y", "-i"])
            .arg(input)
            .args(["-vn", "-acodec", codec]);
        if let Some(rate) = target.sample_rate {
            cmd.arg("-ar").arg(rate.to_string());
        }
        if let Some(channels) = target.channels {
            cmd.arg("-ac").arg(channels.to_string());
        }
        cmd.args(["-f", "wav"]).arg(output);
        Ok(cmd)
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, input: &Path, output: &Path, target: &TargetEncoding) -> Result<(), SilenceError> {
        let mut cmd = self.command(input, output, target)?;
        log::debug!("Running {:?}", cmd);

        let result = cmd.output().map_err(|e| {
            SilenceError::Transcode(format!("failed to run {}: {}", self.binary.display(), e))
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(SilenceError::Transcode(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                result.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Transcoder that decodes in-process with Symphonia
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaTranscoder;

impl SymphoniaTranscoder {
    /// Create a new Symphonia transcoder
    pub fn new() -> Self {
        Self
    }
}

fn transcode_error(context: &str, e: SymphoniaError) -> SilenceError {
    SilenceError::Transcode(format!("{}: {}", context, e))
}

/// Streams decoded packets into a WAV writer, downmixing when asked to
struct WavSink {
    writer: WavWriter<BufWriter<File>>,
    bit_depth: BitDepth,
    downmix: bool,
}

impl WavSink {
    fn create(
        output: &Path,
        sample_rate: u32,
        source_channels: u16,
        target: &TargetEncoding,
    ) -> Result<Self, SilenceError> {
        let bit_depth = target.descriptor()?.bit_depth;

        if let Some(rate) = target.sample_rate {
            if rate != sample_rate {
                return Err(SilenceError::Transcode(format!(
                    "cannot resample {} Hz to {} Hz without ffmpeg",
                    sample_rate, rate
                )));
            }
        }

        let downmix = match target.channels {
            None => false,
            Some(c) if c == source_channels => false,
            Some(1) => true,
            Some(c) => {
                return Err(SilenceError::Transcode(format!(
                    "cannot remap {} channels to {} without ffmpeg",
                    source_channels, c
                )))
            }
        };

        let spec = WavSpec {
            channels: if downmix { 1 } else { source_channels },
            sample_rate,
            bits_per_sample: bit_depth.bits(),
            sample_format: SampleFormat::Int,
        };
        let writer = WavWriter::create(output, spec)?;
        Ok(Self {
            writer,
            bit_depth,
            downmix,
        })
    }

    fn write_interleaved(&mut self, samples: &[i16], channels: usize) -> Result<(), SilenceError> {
        if self.downmix && channels > 1 {
            for frame in samples.chunks_exact(channels) {
                let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
                self.write_sample((sum / channels as i32) as i16)?;
            }
        } else {
            for &s in samples {
                self.write_sample(s)?;
            }
        }
        Ok(())
    }

    fn write_sample(&mut self, sample: i16) -> Result<(), SilenceError> {
        match self.bit_depth {
            BitDepth::Sixteen => self.writer.write_sample(sample)?,
            BitDepth::Eight => self.writer.write_sample((sample >> 8) as i8)?,
        }
        Ok(())
    }

    fn finish(self) -> Result<(), SilenceError> {
        self.writer.finalize()?;
        Ok(())
    }
}

/// What to do with the result of one `next_packet` call
enum PacketStep {
    Packet(Packet),
    EndOfStream,
    Reset,
    Failed(SymphoniaError),
}

fn classify_read(result: Result<Packet, SymphoniaError>) -> PacketStep {
    match result {
        Ok(packet) => PacketStep::Packet(packet),
        Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => PacketStep::EndOfStream,
        Err(SymphoniaError::ResetRequired) => PacketStep::Reset,
        Err(e) => PacketStep::Failed(e),
    }
}

impl Transcoder for SymphoniaTranscoder {
    fn transcode(&self, input: &Path, output: &Path, target: &TargetEncoding) -> Result<(), SilenceError> {
        let src = File::open(input)?;
        let mss = MediaSourceStream::new(Box::new(src), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = input.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| transcode_error("unsupported container", e))?;
        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| SilenceError::Transcode("no audio track found".to_string()))?;

        let track_id = track.id;
        let declared_rate = track.codec_params.sample_rate.unwrap_or(FALLBACK_SAMPLE_RATE);
        let declared_channels = track.codec_params.channels.map(|c| c.count() as u16).unwrap_or(1);
        let mut decoder = get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| transcode_error("unsupported codec", e))?;

        log::debug!(
            "Symphonia track {}: {} Hz, {} ch",
            track_id,
            declared_rate,
            declared_channels
        );

        let mut sink: Option<WavSink> = None;
        loop {
            let packet = match classify_read(format.next_packet()) {
                PacketStep::Packet(packet) => packet,
                PacketStep::EndOfStream => break,
                PacketStep::Reset => {
                    // Chained streams continue after the reset; keep decoding
                    log::debug!("Stream reset, resetting decoder");
                    decoder.reset();
                    continue;
                }
                PacketStep::Failed(e) => return Err(transcode_error("read failed", e)),
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(msg)) => {
                    log::debug!("Skipping undecodable packet: {}", msg);
                    continue;
                }
                Err(e) => return Err(transcode_error("decode failed", e)),
            };

            let spec = *decoded.spec();
            let channels = spec.channels.count();
            let mut samples = SampleBuffer::<i16>::new(decoded.capacity() as u64, spec);
            samples.copy_interleaved_ref(decoded);

            if sink.is_none() {
                sink = Some(WavSink::create(output, spec.rate, channels as u16, target)?);
            }
            if let Some(sink) = sink.as_mut() {
                sink.write_interleaved(samples.samples(), channels)?;
            }
        }

        // A track without packets still yields a valid, empty artifact
        let sink = match sink {
            Some(sink) => sink,
            None => WavSink::create(output, declared_rate, declared_channels, target)?,
        };
        sink.finish()
    }
}
