//! `g726-frames`: run a G.726 encode/decode session over a sample file
//!
//! ```text
//! g726-frames --law a --enc --rate 24 speech.wav speech.g726 256 1 256
//! ```
//!
//! encodes 256 frames of 256 A-law samples, starting at frame 1, at
//! 24 kbit/s.

mod defaults;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use defaults::{Defaults, RateSetting};
use frame_core::{Law, Mode, RateSchedule, SessionConfig};
use logging::{LoggingConfig, log_welcome, parse_log_level, setup_logging};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Frame-windowed G.726 encoder/decoder harness
#[derive(Parser, Debug)]
#[command(name = "g726-frames", author, version, about, long_about = None)]
struct Args {
    /// Sample law of the files: a (A-law), u (u-law) or l (linear PCM)
    #[arg(long)]
    law: Option<Law>,

    /// Bit rate in kbit/s (16, 24, 32, 40) or a per-frame schedule like 32-24
    #[arg(long)]
    rate: Option<String>,

    /// Run the encoder only
    #[arg(long, conflicts_with = "dec")]
    enc: bool,

    /// Run the decoder only
    #[arg(long)]
    dec: bool,

    /// Don't reset the codec state before the first frame
    #[arg(long)]
    noreset: bool,

    /// Size of the pass-through header in samples
    #[arg(long, value_name = "N")]
    header_samples: Option<usize>,

    /// Defaults file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Input sample file
    input: PathBuf,

    /// Output sample file
    output: PathBuf,

    /// Samples per frame [default: 32]
    frame_size: Option<usize>,

    /// First frame to process, 1-based [default: 1]
    first_frame: Option<u64>,

    /// Number of frames to process, 0 for all [default: 0]
    frame_count: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match parse_log_level(&args.log_level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut log_config = LoggingConfig::new(level, "g726-frames");
    if args.json_logs {
        log_config = log_config.with_json();
    }
    if level == tracing::Level::TRACE {
        log_config = log_config.with_file_info();
    }
    if let Err(e) = setup_logging(log_config) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    log_welcome("g726-frames", env!("CARGO_PKG_VERSION"));
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    codec_core::init();

    let defaults = Defaults::discover(args.config.as_deref())?;
    let config = session_config(args, &defaults)?;
    info!("Input: {}", args.input.display());
    info!("Output: {}", args.output.display());

    let source = File::open(&args.input)
        .with_context(|| format!("Opening input file {} failed", args.input.display()))?;
    let sink = File::create(&args.output)
        .with_context(|| format!("Opening output file {} failed", args.output.display()))?;

    let report = frame_core::transcode(config, BufReader::new(source), BufWriter::new(sink))
        .with_context(|| format!("Transcoding {} failed", args.input.display()))?;

    if report.stopped_early {
        info!(
            "Input ended after {} of {} frame(s)",
            report.frames, report.window.frame_count
        );
    }
    Ok(())
}

/// Merge command-line values over the defaults file
fn session_config(args: &Args, defaults: &Defaults) -> Result<SessionConfig> {
    let mode = if args.enc {
        Mode::Encode
    } else if args.dec {
        Mode::Decode
    } else {
        defaults.mode.unwrap_or_default()
    };

    let rates = args
        .rate
        .clone()
        .or_else(|| defaults.rate.as_ref().map(RateSetting::to_option))
        .map(|option| RateSchedule::parse(&option))
        .unwrap_or_default();

    let mut builder = SessionConfig::builder()
        .law(args.law.or(defaults.law).unwrap_or_default())
        .mode(mode)
        .rates(rates)
        .reset(!args.noreset && defaults.reset.unwrap_or(true));

    if let Some(frame_size) = args.frame_size.or(defaults.frame_size) {
        builder = builder.frame_size(frame_size);
    }
    if let Some(header_samples) = args.header_samples.or(defaults.header_samples) {
        builder = builder.header_samples(header_samples);
    }
    if let Some(first_frame) = args.first_frame {
        builder = builder.first_frame(first_frame);
    }
    if let Some(frame_count) = args.frame_count {
        builder = builder.frame_count(frame_count);
    }

    Ok(builder.build()?)
}
