use crate::core::SampleRate;
use crate::Writer;

use super::AdpcmState;

/// upd7759 stream encoder
///
/// Holds nothing but the playback rate; every call to [`Encoder::encode`]
/// starts from a fresh [`AdpcmState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    sample_rate: SampleRate,
}

impl Encoder {
    pub fn new(sample_rate: SampleRate) -> Self {
        Encoder { sample_rate }
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// encode mono 16-bit samples to a upd7759 stream
    pub fn encode(&self, samples: &[i16]) -> Vec<u8> {
        let mut state = AdpcmState::new();
        let mut writer = Writer::with_capacity(self.sample_rate, samples.len());

        for &sample in samples {
            writer.push_code(state.step(sample));
        }

        let stream = writer.finish();

        tracing::trace!(
            samples = samples.len(),
            bytes = stream.len(),
            rate = self.sample_rate.hz(),
            "encoded upd7759 stream"
        );

        stream
    }

    /// encode and return the 4-bit codes without framing
    pub fn encode_codes(&self, samples: &[i16]) -> Vec<u8> {
        let mut state = AdpcmState::new();
        samples.iter().map(|&s| state.step(s)).collect()
    }
}
