use anyhow::{Context, Result};
use libupd7759::InputFormat;
use std::io::Cursor;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{
    CodecType, DecoderOptions, CODEC_TYPE_FLAC, CODEC_TYPE_NULL, CODEC_TYPE_PCM_S16BE,
    CODEC_TYPE_PCM_S16LE,
};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoded source audio
#[derive(Debug, Clone, Default)]
pub struct PcmAudio {
    pub sample_rate: u32,
    pub channels: usize,
    /// Source stores 16-bit integer PCM
    pub pcm16: bool,
    /// Interleaved samples
    pub samples: Vec<i16>,
    // Source format (e.g., "WAV", "FLAC")
    pub source_format: Option<String>,
}

impl PcmAudio {
    /// Frames per channel
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f32 / self.sample_rate as f32
        }
    }

    /// Shape of the audio, for validation before encoding
    pub fn format(&self) -> InputFormat {
        InputFormat::new(self.sample_rate, self.channels, self.pcm16)
    }
}

/// Read an audio file
pub fn read_pcm_file(path: &Path) -> Result<PcmAudio> {
    let file = std::fs::File::open(path).context("Failed to open audio file")?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());
    read_from_source(mss, path.extension().and_then(|e| e.to_str()))
}

/// Read audio from bytes (for stdin and WASM)
pub fn read_pcm_from_bytes(bytes: &[u8]) -> Result<PcmAudio> {
    let cursor = Cursor::new(bytes.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());
    read_from_source(mss, None)
}

fn read_from_source(mss: MediaSourceStream, extension: Option<&str>) -> Result<PcmAudio> {
    // Create hint from file extension
    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    // Probe the format
    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .context("Unsupported audio format")?;

    let mut format = probed.format;

    // Find the first audio track
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No audio track found")?;

    let codec = track.codec_params.codec;
    let source_format = extension
        .map(|ext| ext.to_uppercase())
        .or_else(|| Some(codec_name(codec).to_string()));

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("Unknown sample rate")?;
    let channels = track
        .codec_params
        .channels
        .context("Unknown channel count")?
        .count();
    let pcm16 = is_pcm16(codec, track.codec_params.bits_per_sample);

    // Create decoder
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("Failed to create decoder")?;

    let mut samples = Vec::new();

    // Decode all packets
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(e) => return Err(e).context("Error reading packet"),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoded_or_fail(decoder.decode(&packet))?;

        append_samples(&decoded, &mut samples, channels);
    }

    Ok(PcmAudio {
        sample_rate,
        channels,
        pcm16,
        samples,
        source_format,
    })
}

/// Any decode failure aborts the read; a dropped packet would shorten the stream
fn decoded_or_fail<T>(result: symphonia::core::errors::Result<T>) -> Result<T> {
    result.context("Error decoding packet")
}

/// 16-bit integer PCM, raw or losslessly packed
fn is_pcm16(codec: CodecType, bits_per_sample: Option<u32>) -> bool {
    match codec {
        CODEC_TYPE_PCM_S16LE | CODEC_TYPE_PCM_S16BE => true,
        CODEC_TYPE_FLAC => bits_per_sample == Some(16),
        _ => false,
    }
}

fn codec_name(codec: CodecType) -> &'static str {
    match codec {
        CODEC_TYPE_FLAC => "FLAC",
        CODEC_TYPE_PCM_S16LE
        | CODEC_TYPE_PCM_S16BE
        | symphonia::core::codecs::CODEC_TYPE_PCM_S24LE
        | symphonia::core::codecs::CODEC_TYPE_PCM_S32LE
        | symphonia::core::codecs::CODEC_TYPE_PCM_F32LE
        | symphonia::core::codecs::CODEC_TYPE_PCM_U8 => "WAV",
        symphonia::core::codecs::CODEC_TYPE_MP3 => "MP3",
        symphonia::core::codecs::CODEC_TYPE_VORBIS => "OGG",
        symphonia::core::codecs::CODEC_TYPE_AAC => "AAC",
        _ => "UNKNOWN",
    }
}

// Other depths are converted too; `pcm16` decides whether they get encoded.
fn append_samples(buffer: &AudioBufferRef, samples: &mut Vec<i16>, channels: usize) {
    match buffer {
        AudioBufferRef::S16(buf) => {
            for frame in 0..buf.frames() {
                for ch in 0..channels {
                    samples.push(buf.chan(ch)[frame]);
                }
            }
        }
        AudioBufferRef::S32(buf) => {
            for frame in 0..buf.frames() {
                for ch in 0..channels {
                    samples.push((buf.chan(ch)[frame] >> 16) as i16);
                }
            }
        }
        AudioBufferRef::F32(buf) => {
            for frame in 0..buf.frames() {
                for ch in 0..channels {
                    samples.push(f32_to_i16(buf.chan(ch)[frame]));
                }
            }
        }
        AudioBufferRef::U8(buf) => {
            for frame in 0..buf.frames() {
                for ch in 0..channels {
                    samples.push(((buf.chan(ch)[frame] as i16) - 128) << 8);
                }
            }
        }
        _ => {
            tracing::debug!("ignoring unsupported sample buffer type");
        }
    }
}

#[inline]
fn f32_to_i16(sample: f32) -> i16 {
    (sample * 32767.0).clamp(-32768.0, 32767.0) as i16
}
