//! ADPCM encoding for the uPD7759
//!
//! One 4-bit code per sample, driven by a state register and two fixed
//! tables. Codes are framed by [`crate::Writer`].

pub mod encoder;
pub mod state;

pub use encoder::Encoder;
pub use state::{sample_index, AdpcmState};

#[cfg(test)]
mod tests;
