#![allow(clippy::needless_range_loop)]

//! Encoder for the NEC uPD7759 ADPCM speech format.
//!
//! The stream starts with a frequency marker, then carries one 4-bit code per
//! input sample, packed two per byte. The marker is repeated after every 256
//! data bytes. There is no header, checksum or trailer.

pub mod adpcm;
pub mod core;

mod reader;
mod writer;

pub use adpcm::{sample_index, AdpcmState, Encoder};
pub use crate::core::{
    clamp_index, InputFormat, SampleRate, StreamInfo, UpdError, UpdResult, BYTES_PER_MARKER,
    CODES_PER_BYTE, STATE_TABLE, STEP_TABLE,
};
pub use reader::Reader;
pub use writer::Writer;

// api functions

/// encode mono 16-bit samples to a upd7759 stream
///
/// # Arguments
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz (5000, 6000 or 8000)
///
/// # Returns
/// upd7759 stream as byte array
///
/// # Note
/// Only the sample rate is checked here. Use [`InputFormat::validate`] when
/// channel count and bit depth also come from an untrusted source.
pub fn encode(samples: &[i16], sample_rate: u32) -> UpdResult<Vec<u8>> {
    let rate = SampleRate::try_from(sample_rate)?;
    Ok(Encoder::new(rate).encode(samples))
}

/// framing info of a upd7759 stream
pub fn info(data: &[u8]) -> UpdResult<StreamInfo> {
    Reader::new().read(data)
}

/// check the framing of a upd7759 stream
///
/// Malformed streams give `Ok(false)`.
pub fn validate(data: &[u8]) -> UpdResult<bool> {
    Ok(Reader::new().read(data).is_ok())
}

/// library version
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
