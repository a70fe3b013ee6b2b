//! Helpers shared by the reupd integration tests

#![allow(dead_code)]

use std::io::Write;

// Build a WAV file in memory (RIFF)
pub fn wav_bytes(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
    let mut buffer = Vec::new();

    let bytes_per_sample = 2u32;
    let data_size = samples.len() as u32 * bytes_per_sample;

    buffer.write_all(b"RIFF").unwrap();
    buffer.write_all(&(36 + data_size).to_le_bytes()).unwrap();
    buffer.write_all(b"WAVE").unwrap();

    // fmt chunk
    buffer.write_all(b"fmt ").unwrap();
    buffer.write_all(&16u32.to_le_bytes()).unwrap();
    buffer.write_all(&1u16.to_le_bytes()).unwrap(); // format = PCM
    buffer.write_all(&channels.to_le_bytes()).unwrap();
    buffer.write_all(&sample_rate.to_le_bytes()).unwrap();
    let byte_rate = sample_rate * channels as u32 * bytes_per_sample;
    buffer.write_all(&byte_rate.to_le_bytes()).unwrap();
    let block_align = channels * bytes_per_sample as u16;
    buffer.write_all(&block_align.to_le_bytes()).unwrap();
    buffer.write_all(&16u16.to_le_bytes()).unwrap();

    // data chunk
    buffer.write_all(b"data").unwrap();
    buffer.write_all(&data_size.to_le_bytes()).unwrap();
    for &sample in samples {
        buffer.write_all(&sample.to_le_bytes()).unwrap();
    }

    buffer
}

pub fn tone(len: usize) -> Vec<i16> {
    (0..len)
        .map(|i| ((i as f32 * 0.07).sin() * 2000.0) as i16)
        .collect()
}
