//! Example: Convert an audio file to a uPD7759 stream and inspect it
//!
//! Run with: cargo run --example convert_audio input.wav output.bin

use reupd::{encode_from_audio, get_stream_info};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input-audio> <output-stream>", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    println!("Reading {}...", input_path);
    let audio_bytes = fs::read(input_path)?;

    // Get audio info
    let info = reupd::get_audio_info(&audio_bytes)?;
    println!("  Sample rate: {} Hz", info.sample_rate);
    println!("  Channels: {}", info.channels);
    println!("  16-bit PCM: {}", if info.pcm16 { "yes" } else { "no" });
    println!("  Duration: {:.2}s", info.duration_secs);

    println!("\nEncoding to uPD7759...");
    let encoded = encode_from_audio(&audio_bytes)?;

    // Show compression stats
    let original_size = audio_bytes.len();
    let compressed_size = encoded.data.len();
    let ratio = original_size as f32 / compressed_size as f32;

    println!("  Original: {} bytes", original_size);
    println!("  Compressed: {} bytes", compressed_size);
    println!("  Ratio: {:.1}x", ratio);

    fs::write(output_path, &encoded.data)?;
    println!("\nWrote stream to {}", output_path);

    let stream_info = get_stream_info(&encoded.data)?;
    println!("\nStream Info:");
    println!("  Marker: 0x{:02x}", stream_info.marker);
    println!("  Markers: {}", stream_info.marker_count);
    println!("  Data bytes: {}", stream_info.data_bytes);
    println!("  Duration: {:.2}s", stream_info.duration_secs);

    Ok(())
}
