//! reupd - uPD7759 audio converter library
//!
//! Reads any audio format symphonia understands, checks that it is something
//! the chip can play (mono, 16-bit PCM, 5/6/8 kHz) and encodes it to a
//! uPD7759 ADPCM stream.
//!

pub mod audio;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

pub use audio::PcmAudio;
/// Re-export libupd7759 types
pub use libupd7759::{InputFormat, SampleRate, StreamInfo, UpdError};

/// Settings for one conversion, built once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Input audio file, stdin when None
    pub input: Option<PathBuf>,
    /// Output stream file, stdout when None
    pub output: Option<PathBuf>,
    /// Log source details while converting
    pub verbose: bool,
}

impl EncodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Human-readable input name for messages
    pub fn input_name(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }

    /// Human-readable output name for messages
    pub fn output_name(&self) -> String {
        match &self.output {
            Some(path) => path.display().to_string(),
            None => "<stdout>".to_string(),
        }
    }
}

/// Where the encoded stream goes
pub enum OutputSink {
    File(BufWriter<fs::File>),
    Stdout(BufWriter<io::Stdout>),
}

impl OutputSink {
    /// Open the sink named by the config, creating/truncating a file
    pub fn open(config: &EncodeConfig) -> Result<Self> {
        match &config.output {
            Some(path) => {
                let file = fs::File::create(path).with_context(|| {
                    format!("Failed to create output file {}", path.display())
                })?;
                Ok(OutputSink::File(BufWriter::new(file)))
            }
            None => Ok(OutputSink::Stdout(BufWriter::new(io::stdout()))),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::File(w) => w.write(buf),
            OutputSink::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::File(w) => w.flush(),
            OutputSink::Stdout(w) => w.flush(),
        }
    }
}

/// Information about a decoded audio file
#[derive(Debug, Clone, serde::Serialize)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: usize,
    pub pcm16: bool,
    pub frames: usize,
    pub duration_secs: f32,
    pub source_format: Option<String>,
}

impl From<&PcmAudio> for AudioInfo {
    fn from(audio: &PcmAudio) -> Self {
        AudioInfo {
            sample_rate: audio.sample_rate,
            channels: audio.channels,
            pcm16: audio.pcm16,
            frames: audio.frames(),
            duration_secs: audio.duration_secs(),
            source_format: audio.source_format.clone(),
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct EncodedAudio {
    pub sample_rate: SampleRate,
    pub source: AudioInfo,
    pub data: Vec<u8>,
}

/// Validate decoded audio and encode it
///
/// Fails with a [`UpdError`] when the audio isn't mono 16-bit PCM at
/// 5000, 6000 or 8000 Hz.
pub fn encode_pcm(audio: &PcmAudio) -> Result<EncodedAudio> {
    let rate = audio
        .format()
        .validate()
        .context("Audio can't be played by the uPD7759")?;

    let data = libupd7759::Encoder::new(rate).encode(&audio.samples);

    Ok(EncodedAudio {
        sample_rate: rate,
        source: AudioInfo::from(audio),
        data,
    })
}

/// Encode audio file bytes to a uPD7759 stream
///
/// # Arguments
/// * `audio_bytes` - Raw bytes of an audio file (WAV, FLAC, ...)
///
/// # Returns
/// The encoded stream together with what was read from the source
pub fn encode_from_audio(audio_bytes: &[u8]) -> Result<EncodedAudio> {
    let audio = audio::read_pcm_from_bytes(audio_bytes).context("Failed to read audio file")?;
    encode_pcm(&audio)
}

/// Get information about an audio file
pub fn get_audio_info(audio_bytes: &[u8]) -> Result<AudioInfo> {
    let audio = audio::read_pcm_from_bytes(audio_bytes).context("Failed to read audio file")?;
    Ok(AudioInfo::from(&audio))
}

/// Get framing information about a uPD7759 stream
pub fn get_stream_info(data: &[u8]) -> Result<StreamInfo> {
    libupd7759::info(data).context("Invalid uPD7759 stream")
}

/// Validate a uPD7759 stream
pub fn validate_stream(data: &[u8]) -> Result<bool> {
    libupd7759::validate(data).context("Validation failed")
}

/// Read the configured input, a file or stdin
pub fn read_input(config: &EncodeConfig) -> Result<PcmAudio> {
    match &config.input {
        Some(path) => audio::read_pcm_file(path)
            .with_context(|| format!("Failed to read audio file {}", path.display())),
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            audio::read_pcm_from_bytes(&bytes).context("Failed to read audio from stdin")
        }
    }
}

/// Run one conversion as described by the config
///
/// The sink is only opened once the audio has been validated and encoded, so
/// rejected input never creates or truncates the output.
pub fn run_encode(config: &EncodeConfig) -> Result<EncodedAudio> {
    let audio = read_input(config)?;

    if config.verbose {
        log_source(&audio);
    }

    let encoded = encode_pcm(&audio)?;
    drop(audio);

    let mut sink = OutputSink::open(config)?;
    sink.write_all(&encoded.data)
        .with_context(|| format!("Failed to write {}", config.output_name()))?;
    sink.flush()
        .with_context(|| format!("Failed to write {}", config.output_name()))?;

    tracing::info!(
        "Wrote {} bytes to {}",
        encoded.data.len(),
        config.output_name()
    );

    Ok(encoded)
}

fn log_source(audio: &PcmAudio) {
    tracing::info!("Frames:         {}", audio.frames());
    tracing::info!("Sample Rate:    {}", audio.sample_rate);
    tracing::info!("Channels:       {}", audio.channels);
    tracing::info!("16-bit PCM:     {}", audio.pcm16);
    if let Some(ref fmt) = audio.source_format {
        tracing::info!("Format:         {}", fmt);
    }
}
