//! Internal adpcm tests

use super::*;
use crate::SampleRate;

#[test]
fn test_sample_index_uses_bits_7_to_14() {
    assert_eq!(sample_index(0), 0);
    assert_eq!(sample_index(127), 0);
    assert_eq!(sample_index(128), 1);
    assert_eq!(sample_index(896), 7);
    assert_eq!(sample_index(1920), 15);
    assert_eq!(sample_index(4096), 15);
    // 0x7fff >> 7 = 0xff -> -1 as a signed byte
    assert_eq!(sample_index(i16::MAX), 0);
    // -0x8000 >> 7 = -256 -> 0 as a signed byte
    assert_eq!(sample_index(i16::MIN), 0);
    assert_eq!(sample_index(-1), 0);
}

#[test]
fn test_state_goes_negative_between_steps() {
    let mut state = AdpcmState::new();
    assert_eq!(state.step(0), 0);
    // STATE_TABLE[0] - 0
    assert_eq!(state.value(), -1);

    // clamped back to 0 on entry, same result every time
    assert_eq!(state.step(0), 0);
    assert_eq!(state.value(), -1);
}

#[test]
fn test_step_uses_fresh_state_for_row() {
    let mut state = AdpcmState::new();

    // idx 7: state = 3 - 0 = 3, code = STEP[3][7] - 7 = 19 - 7
    assert_eq!(state.step(896), 12);
    assert_eq!(state.value(), 3);

    // idx 7: state = 3 - 3 = 0, code = STEP[0][7] - 7 = 10 - 7
    assert_eq!(state.step(896), 3);
    assert_eq!(state.value(), 0);
}

#[test]
fn test_negative_codes_keep_low_nibble() {
    let mut state = AdpcmState::new();
    // idx 15: state = 3, code = STEP[3][15] - 15 = -34 -> 0xe
    assert_eq!(state.step(1920), 0x0e);

    let mut state = AdpcmState::new();
    // idx 2: state = 0, code = STEP[0][2] - 2 = -1 -> 0xf
    assert_eq!(state.step(256), 0x0f);
}

#[test]
fn test_encode_codes_matches_framed_stream() {
    let samples = [896, 256, 896];
    let encoder = Encoder::new(SampleRate::Khz8);

    // 896: 0xc (state 3), 256: state 0 - 3 = -3, row 0, 1 - 2 = -1 -> 0xf,
    // 896: state clamps to 0, 3 - 0 = 3 -> 0xc
    assert_eq!(encoder.encode_codes(&samples), vec![0xc, 0xf, 0xc]);
    assert_eq!(encoder.encode(&samples), vec![0x53, 0xcf, 0xc0]);
}

#[test]
fn test_encoders_share_nothing() {
    let encoder = Encoder::new(SampleRate::Khz6);
    let samples: Vec<i16> = (0..1000).map(|i| ((i * 37) % 4000) as i16).collect();

    let first = encoder.encode(&samples);
    let second = encoder.encode(&samples);
    assert_eq!(first, second);
}
