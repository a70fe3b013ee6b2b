use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use reupd::EncodeConfig;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reupd")]
#[command(version)]
#[command(about = "uPD7759 ADPCM audio converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode mono 16-bit PCM audio (5, 6 or 8 kHz) to a uPD7759 stream
    Encode {
        /// Input audio file, stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output stream file, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print details about the source audio to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show framing information about a uPD7759 stream
    Info {
        /// Input stream file
        input: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the framing of a uPD7759 stream
    Validate {
        /// Input stream file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            verbose,
        } => {
            let config = EncodeConfig {
                input,
                output,
                verbose,
            };
            init_logging(config.verbose);
            encode(&config)?;
        }
        Commands::Info { input, json } => {
            init_logging(false);
            info(&input, json)?;
        }
        Commands::Validate { input } => {
            init_logging(false);
            validate(&input)?;
        }
    }

    Ok(())
}

/// Logs go to stderr, stdout may carry the encoded stream
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn encode(config: &EncodeConfig) -> Result<()> {
    tracing::info!("Reading {}...", config.input_name());

    let encoded = reupd::run_encode(config)?;

    tracing::info!(
        "Encoded {:.2}s of audio at {} Hz",
        encoded.source.duration_secs,
        encoded.sample_rate.hz()
    );

    Ok(())
}

fn info(input: &PathBuf, json: bool) -> Result<()> {
    let data = fs::read(input).context("Failed to read uPD7759 stream")?;
    let stream_info = reupd::get_stream_info(&data)?;

    if json {
        let json_str =
            serde_json::to_string_pretty(&stream_info).context("Failed to serialize info")?;
        println!("{}", json_str);
        return Ok(());
    }

    println!("uPD7759 Stream");
    println!("───────────────────────────────");
    println!("  Sample rate: {} Hz", stream_info.sample_rate.hz());
    println!("  Marker:      0x{:02x}", stream_info.marker);
    println!("  Markers:     {}", stream_info.marker_count);
    println!("  Data bytes:  {}", stream_info.data_bytes);
    println!("  Samples:     <= {}", stream_info.max_codes);
    println!("  Duration:    {:.2}s", stream_info.duration_secs);
    println!("  File size:   {} bytes", stream_info.stream_size);

    Ok(())
}

fn validate(input: &PathBuf) -> Result<()> {
    let data = fs::read(input).context("Failed to read uPD7759 stream")?;

    if reupd::validate_stream(&data)? {
        println!("✓ {} is a valid uPD7759 stream", input.display());
        Ok(())
    } else {
        bail!("✗ {} is not a valid uPD7759 stream", input.display())
    }
}
