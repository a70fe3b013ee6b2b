//! Edge case and stability tests for the upd7759 encoder
use libupd7759::{encode, AdpcmState, Encoder, Reader, SampleRate, BYTES_PER_MARKER};

// Helper to just encode
fn encode_samples(samples: &[i16], rate: SampleRate) -> Vec<u8> {
    Encoder::new(rate).encode(samples)
}

// Helper to check if data is valid (can be parsed)
fn is_valid_upd(data: &[u8]) -> bool {
    Reader::new().read(data).is_ok()
}

// Expected stream length for a code count
fn expected_len(codes: usize) -> usize {
    let full = codes / 2;
    1 + codes.div_ceil(2) + full / BYTES_PER_MARKER
}

// ============================================================================
// Edge Case: Extreme Audio Values
// ============================================================================

#[test]
fn test_max_sample_values() {
    let stream = encode_samples(&[i16::MAX; 4096], SampleRate::Khz8);
    assert_eq!(stream.len(), expected_len(4096));
    assert!(is_valid_upd(&stream));
}

#[test]
fn test_min_sample_values() {
    let stream = encode_samples(&[i16::MIN; 4096], SampleRate::Khz8);
    assert_eq!(stream.len(), expected_len(4096));
    assert!(is_valid_upd(&stream));
}

#[test]
fn test_alternating_extremes() {
    let samples: Vec<i16> = (0..4097)
        .map(|i| if i % 2 == 0 { i16::MAX } else { i16::MIN })
        .collect();
    let a = encode_samples(&samples, SampleRate::Khz5);
    let b = encode_samples(&samples, SampleRate::Khz5);

    assert_eq!(a, b);
    assert_eq!(a.len(), expected_len(4097));
    assert_eq!(a.last().unwrap() & 0x0f, 0);
}

#[test]
fn test_state_stays_bounded_under_sweep() {
    let mut state = AdpcmState::new();
    for s in (i16::MIN..=i16::MAX).step_by(3) {
        let code = state.step(s);
        assert!(code <= 0x0f);
        // STATE_TABLE spans -1..=3, minus a clamped 0..=15
        assert!((-16..=3).contains(&state.value()));
    }
}

// ============================================================================
// Edge Case: Lengths
// ============================================================================

#[test]
fn test_odd_lengths_are_padded() {
    for len in [1usize, 3, 511, 513, 1025] {
        let samples = vec![1920i16; len];
        let stream = encode_samples(&samples, SampleRate::Khz6);

        assert_eq!(stream.len(), expected_len(len), "len {}", len);
        assert_eq!(stream.last().unwrap() & 0x0f, 0, "len {}", len);
    }
}

#[test]
fn test_exact_block_ends_with_marker() {
    let stream = encode_samples(&[700; BYTES_PER_MARKER * 2 * 3], SampleRate::Khz8);

    assert_eq!(stream.len(), 1 + 3 * (BYTES_PER_MARKER + 1));
    assert_eq!(*stream.last().unwrap(), 0x53);
    assert!(is_valid_upd(&stream));
}

#[test]
fn test_purge_byte_closing_a_block() {
    // 255 full bytes plus one purge byte fill the block without a marker
    let stream = encode_samples(&[700; BYTES_PER_MARKER * 2 - 1], SampleRate::Khz8);

    assert_eq!(stream.len(), 1 + BYTES_PER_MARKER);
    assert!(is_valid_upd(&stream));
}

#[test]
fn test_long_input() {
    let samples: Vec<i16> = (0..8000 * 10)
        .map(|i| ((i as f32 * 0.013).sin() * 1800.0) as i16)
        .collect();
    let stream = encode(&samples, 8000).unwrap();

    assert_eq!(stream.len(), expected_len(samples.len()));
    let info = Reader::new().read(&stream).unwrap();
    assert_eq!(info.max_codes, samples.len());
}

// ============================================================================
// Edge Case: Low Bits Ignored
// ============================================================================

#[test]
fn test_low_seven_bits_do_not_matter() {
    let coarse: Vec<i16> = (0..600).map(|i| ((i % 16) * 128) as i16).collect();
    let noisy: Vec<i16> = coarse
        .iter()
        .enumerate()
        .map(|(i, &s)| s | (i % 128) as i16)
        .collect();

    assert_eq!(
        encode_samples(&coarse, SampleRate::Khz5),
        encode_samples(&noisy, SampleRate::Khz5)
    );
}

#[test]
fn test_negative_samples_saturate_to_zero_index() {
    let negative: Vec<i16> = (1..700).map(|i| -(i * 40) as i16).collect();
    let zeros = vec![0i16; negative.len()];

    // the shifted byte wraps, so only keep samples whose byte is <= 0
    let same: Vec<i16> = negative
        .iter()
        .copied()
        .filter(|&s| ((s >> 7) as i8) <= 0)
        .collect();
    assert_eq!(
        encode_samples(&same, SampleRate::Khz5),
        encode_samples(&zeros[..same.len()], SampleRate::Khz5)
    );
}
