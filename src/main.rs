//! diarize command line interface
//!
//! Identifies speakers in an audio file and prints their turns as JSON.

use clap::Parser;
use diarize_rs::output;
use diarize_rs::pipeline::{DEFAULT_MODEL, PipelineConfig, PyannotePipeline};
use diarize_rs::{Device, DiarizeError, DiarizeResult, Diarizer, SpeakerBounds};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "diarize")]
#[command(about = "Speaker diarization - who spoke when", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(after_help = "Example: diarize recording.mp3 diarization.json 2 4\n\
Pass \"\" as OUTPUT_JSON to set speaker counts without saving a file.\n\
Speaker counts must be non-negative integers; negative values are rejected.")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Input audio file
    #[arg(value_name = "AUDIO_FILE")]
    audio_file: PathBuf,

    /// Also save the result as pretty-printed JSON (empty: don't save)
    #[arg(value_name = "OUTPUT_JSON")]
    output_json: Option<String>,

    /// Minimum number of speakers (0 lets the model decide)
    #[arg(value_name = "MIN_SPEAKERS")]
    min_speakers: Option<u32>,

    /// Maximum number of speakers (0 lets the model decide)
    #[arg(value_name = "MAX_SPEAKERS")]
    max_speakers: Option<u32>,

    /// Ignored trailing arguments
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Pretrained pipeline to load
    #[arg(long, value_name = "ID", default_value = DEFAULT_MODEL)]
    model: String,

    /// Python interpreter with pyannote.audio installed
    #[arg(long, value_name = "PATH", default_value = "python3")]
    python: PathBuf,

    /// Compute device (auto, cpu, cuda)
    #[arg(long, default_value = "auto")]
    device: Device,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    // The probe is best effort; symphonia logs its own misses at error level
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .filter_module("symphonia_core", log::LevelFilter::Off)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> DiarizeResult<()> {
    debug!("diarize-rs {}", diarize_rs::VERSION);

    if !cli.extra.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    if !cli.audio_file.exists() {
        return Err(DiarizeError::FileNotFound(cli.audio_file));
    }

    match diarize_rs::probe::probe(&cli.audio_file) {
        Ok(metadata) => info!("Input: {}", metadata),
        Err(e) => warn!("Could not probe {}: {}", cli.audio_file.display(), e),
    }

    let config = PipelineConfig::default()
        .with_python(cli.python)
        .with_model(cli.model)
        .with_device(cli.device);
    let bounds = SpeakerBounds::new(cli.min_speakers, cli.max_speakers);

    let mut diarizer = Diarizer::new(PyannotePipeline::new(config));
    let result = diarizer.diarize(&cli.audio_file, &bounds)?;

    let durations = result.speaker_durations();
    for speaker in result.speakers() {
        debug!("{}: {:.1}s", speaker, durations[speaker]);
    }

    let output_json = cli.output_json.filter(|p| !p.is_empty()).map(PathBuf::from);
    if let Some(path) = &output_json {
        output::save_json(path, &result)?;
        eprintln!("Saved diarization to: {}", path.display());
    }

    output::print_summary(&result)?;

    // Compact JSON on stdout for piping
    println!("{}", output::to_json(&result)?);

    Ok(())
}
