//! cardiq — derive the 12-lead set from a reduced ECG recording and run the
//! adaptive predictive encoder over one channel.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use cardiq_core::{synthesize, AdaptiveEncoder, EncoderConfig, SignalRecord};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "cardiq")]
#[command(about = "Adaptive linear-prediction compression for reduced-lead ECG records")]
struct Cli {
    #[command(flatten)]
    config: EncoderConfig,

    /// Interleaved channels in the input record
    #[arg(long, default_value_t = 12)]
    channels: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the eight missing leads from a reduced recording
    Synthesize {
        /// Input record (interleaved little-endian f64 frames)
        input: PathBuf,
        /// Write the derived leads as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the adaptive predictive encoder over one channel
    Encode {
        /// Input record (interleaved little-endian f64 frames)
        input: PathBuf,
        /// Channel to encode (lead II by default)
        #[arg(long, default_value_t = 1)]
        channel: usize,
        /// Write per-index records as JSON lines
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let channels = cli.channels;
    let config = cli.config;

    match cli.command {
        Commands::Synthesize { input, output } => {
            run_synthesize(&input, channels, output.as_deref())
        }
        Commands::Encode {
            input,
            channel,
            output,
        } => run_encode(&input, channels, channel, config, output.as_deref()),
    }
}

fn run_synthesize(input: &Path, channels: usize, output: Option<&Path>) -> anyhow::Result<()> {
    let record = SignalRecord::open(input, channels)
        .with_context(|| format!("reading record {}", input.display()))?;
    info!(
        samples = record.sample_count(),
        channels = record.channel_count(),
        "record loaded"
    );

    let leads = record.recorded_leads()?;
    let derived = synthesize(&leads)?;
    info!(
        samples = leads.sample_count(),
        "derived leads III, aVR, aVF, aVL, V2, V3, V4, V6"
    );

    if let Some(path) = output {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &derived)?;
        info!(path = %path.display(), "derived leads written");
    }
    Ok(())
}

fn run_encode(
    input: &Path,
    channels: usize,
    channel: usize,
    config: EncoderConfig,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let record = SignalRecord::open(input, channels)
        .with_context(|| format!("reading record {}", input.display()))?;
    let samples = record.channel(channel)?;

    let encoder = AdaptiveEncoder::new(config)?;
    info!(
        channel,
        samples = samples.len(),
        fallback = ?encoder.fallback_kind(),
        "encoding"
    );

    let mut writer = match output {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };

    let mut records = 0usize;
    let mut fallbacks = 0usize;
    let mut degenerate = 0usize;
    let mut abs_sum = 0.0f64;
    let mut abs_max = 0.0f64;

    for prediction in encoder.encode(samples) {
        records += 1;
        match prediction.residual {
            Some(residual) => {
                let abs = residual.abs();
                abs_sum += abs;
                abs_max = abs_max.max(abs);
            }
            None => degenerate += 1,
        }
        if prediction.fallback.is_some() {
            fallbacks += 1;
        }
        if let Some(w) = writer.as_mut() {
            serde_json::to_writer(&mut *w, &prediction)?;
            w.write_all(b"\n")?;
        }
    }

    let defined = records - degenerate;
    let mean_abs = if defined > 0 {
        abs_sum / defined as f64
    } else {
        0.0
    };
    info!(
        records,
        fallbacks,
        degenerate,
        mean_abs_residual = mean_abs,
        max_abs_residual = abs_max,
        "pass complete"
    );
    Ok(())
}
