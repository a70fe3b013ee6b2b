use crate::core::{clamp_index, SAMPLE_SHIFT, STATE_TABLE, STEP_TABLE};

/// adaptive register of the encoder
///
/// Starts at 0 and is carried from one sample to the next. The register is
/// clamped on entry to [`AdpcmState::step`], never on exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdpcmState {
    state: i32,
}

impl AdpcmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// raw register value, may sit outside 0..=15 between steps
    pub fn value(&self) -> i32 {
        self.state
    }

    /// encode one sample into a 4-bit code
    pub fn step(&mut self, sample: i16) -> u8 {
        let sample_idx = sample_index(sample);

        self.state = clamp_index(self.state) as i32;
        self.state = STATE_TABLE[sample_idx] - self.state;

        // the fresh state picks the step row before it is clamped again
        let row = clamp_index(self.state);
        let code = STEP_TABLE[row][sample_idx] - sample_idx as i32;

        (code & 0x0f) as u8
    }
}

/// table column for a sample: bits 7..14 as a signed byte, saturated into 0..=15
#[inline]
pub fn sample_index(sample: i16) -> usize {
    let raw = (sample >> SAMPLE_SHIFT) as i8;
    clamp_index(raw as i32)
}
