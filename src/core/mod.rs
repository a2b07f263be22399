//! Core data types

/// Audio metadata reported by the probe
pub mod audio;
/// Speaker segments and diarization results
pub mod segment;

pub use audio::AudioMetadata;
pub use segment::{Diarization, Segment};
