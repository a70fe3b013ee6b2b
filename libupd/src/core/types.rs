//! common types for the upd7759 codec

use serde::Serialize;

// constants

/// Data bytes between two frequency markers
pub const BYTES_PER_MARKER: usize = 256;

/// Codes packed into one output byte
pub const CODES_PER_BYTE: usize = 2;

/// Bits discarded from each 16-bit sample before table lookup
pub const SAMPLE_SHIFT: u32 = 7;

/// Largest valid table index (state and sample)
pub const MAX_INDEX: i32 = 15;

// types

/// playback rate of the chip
///
/// | Rate    | Marker |
/// |---------|--------|
/// | 5000 Hz | 0x5f   |
/// | 6000 Hz | 0x59   |
/// | 8000 Hz | 0x53   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum SampleRate {
    Khz5,
    Khz6,
    Khz8,
}

impl SampleRate {
    /// all rates the chip plays back
    pub const ALL: [SampleRate; 3] = [SampleRate::Khz5, SampleRate::Khz6, SampleRate::Khz8];

    /// rate from Hz, None if the chip can't play it
    pub fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            5000 => Some(SampleRate::Khz5),
            6000 => Some(SampleRate::Khz6),
            8000 => Some(SampleRate::Khz8),
            _ => None,
        }
    }

    /// rate from its marker byte
    pub fn from_marker(marker: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|rate| rate.marker() == marker)
    }

    /// rate in Hz
    pub fn hz(self) -> u32 {
        match self {
            SampleRate::Khz5 => 5000,
            SampleRate::Khz6 => 6000,
            SampleRate::Khz8 => 8000,
        }
    }

    /// frequency marker byte written at the start of the stream and after
    /// every [`BYTES_PER_MARKER`] data bytes
    pub fn marker(self) -> u8 {
        match self {
            SampleRate::Khz5 => 0x5f,
            SampleRate::Khz6 => 0x59,
            SampleRate::Khz8 => 0x53,
        }
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = UpdError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        SampleRate::from_hz(hz).ok_or(UpdError::UnsupportedSampleRate(hz))
    }
}

impl From<SampleRate> for u32 {
    fn from(rate: SampleRate) -> Self {
        rate.hz()
    }
}

/// shape of the decoded source audio, checked before encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFormat {
    pub sample_rate: u32,
    pub channels: usize,
    /// source is 16-bit integer PCM
    pub pcm16: bool,
}

impl InputFormat {
    pub fn new(sample_rate: u32, channels: usize, pcm16: bool) -> Self {
        InputFormat {
            sample_rate,
            channels,
            pcm16,
        }
    }

    /// Check the format against what the chip accepts.
    ///
    /// Sample rate is checked first, then channel count, then bit depth.
    pub fn validate(&self) -> UpdResult<SampleRate> {
        let rate = SampleRate::try_from(self.sample_rate)?;

        if self.channels != 1 {
            return Err(UpdError::UnsupportedChannelCount(self.channels));
        }

        if !self.pcm16 {
            return Err(UpdError::UnsupportedBitDepth);
        }

        Ok(rate)
    }
}

/// framing summary of an encoded stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamInfo {
    pub sample_rate: SampleRate,
    pub marker: u8,
    /// bytes holding packed codes (markers excluded)
    pub data_bytes: usize,
    /// markers including the leading one
    pub marker_count: usize,
    /// codes carried by the data bytes; the last byte may be a padded one
    pub max_codes: usize,
    pub duration_secs: f64,
    pub stream_size: usize,
}

/// error type for upd stuff
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdError {
    #[error("unsupported sample rate: {0} Hz (only 5000, 6000 or 8000 Hz)")]
    UnsupportedSampleRate(u32),

    #[error("unsupported channel count: {0} (only mono audio)")]
    UnsupportedChannelCount(usize),

    #[error("unsupported bit depth: audio data must be 16-bit PCM")]
    UnsupportedBitDepth,

    #[error("stream is empty")]
    Truncated,

    #[error("unknown frequency marker: 0x{0:02x}")]
    UnknownMarker(u8),

    #[error("expected marker 0x{expected:02x} at offset {offset}, found 0x{found:02x}")]
    MarkerMismatch {
        offset: usize,
        expected: u8,
        found: u8,
    },
}

/// result type for upd stuff
pub type UpdResult<T> = Result<T, UpdError>;
