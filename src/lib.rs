#![warn(missing_docs)]

//! # diarize-rs: speaker diarization driver
//!
//! Runs a pretrained speaker-diarization pipeline over an audio file and
//! reshapes its speaker turns into a small JSON document.
//!
//! ## Features
//!
//! - **Diarize** - who spoke when, via an external pretrained pipeline
//! - **Bounds** - optional minimum/maximum speaker counts
//! - **Probe** - audio duration and format for logging
//! - **Output** - compact JSON on stdout, pretty JSON on disk
//!
//! ## Quick Start
//!
//! ```ignore
//! use diarize_rs::{Diarizer, SpeakerBounds};
//! use diarize_rs::pipeline::{PipelineConfig, PyannotePipeline};
//!
//! let pipeline = PyannotePipeline::new(PipelineConfig::default());
//! let mut diarizer = Diarizer::new(pipeline);
//! let result = diarizer.diarize("meeting.wav", &SpeakerBounds::new(Some(2), Some(4)))?;
//! println!("{}", diarize_rs::output::to_json(&result)?);
//! ```

/// Core data types
pub mod core;
/// Diarization adapter over a pipeline
pub mod diarizer;
/// Error types for diarization
pub mod error;
/// JSON output and summaries
pub mod output;
/// Pretrained pipeline implementations
pub mod pipeline;
/// Audio metadata probing
pub mod probe;

pub use core::{AudioMetadata, Diarization, Segment};
pub use diarizer::Diarizer;
pub use error::{DiarizeError, DiarizeResult};
pub use pipeline::{Device, Pipeline, SpeakerBounds, Track};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
