//! Pretrained diarization pipeline implementations

/// pyannote.audio run through a Python interpreter
pub mod pyannote;

pub use pyannote::{DEFAULT_MODEL, PipelineConfig, PyannotePipeline};

use crate::error::{DiarizeError, DiarizeResult};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// One contiguous interval attributed to a single speaker
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Speaker label
    pub speaker: String,
}

/// Optional speaker-count bounds handed to the pipeline
///
/// A bound of `None` is not passed at all, leaving the choice to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeakerBounds {
    /// Minimum number of speakers
    pub min: Option<u32>,
    /// Maximum number of speakers
    pub max: Option<u32>,
}

impl SpeakerBounds {
    /// Create bounds; zero means "unset"
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        SpeakerBounds {
            min: min.filter(|&n| n > 0),
            max: max.filter(|&n| n > 0),
        }
    }

    /// Check that min does not exceed max when both are set
    pub fn validate(&self) -> DiarizeResult<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(DiarizeError::InvalidArgument(format!(
                "min_speakers ({}) is greater than max_speakers ({})",
                min, max
            ))),
            _ => Ok(()),
        }
    }

    /// Check if neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Compute device for inference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Device {
    /// Use an accelerator when one is available
    #[default]
    Auto,
    /// General-purpose compute only
    Cpu,
    /// CUDA accelerator
    Cuda,
}

impl Device {
    /// Name understood by the pipeline runtime
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Auto => "auto",
            Device::Cpu => "cpu",
            Device::Cuda => "cuda",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = DiarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Device::Auto),
            "cpu" => Ok(Device::Cpu),
            "cuda" | "gpu" => Ok(Device::Cuda),
            other => Err(DiarizeError::InvalidArgument(format!(
                "unknown device '{}' (expected auto, cpu or cuda)",
                other
            ))),
        }
    }
}

/// Trait for pretrained diarization pipelines
pub trait Pipeline {
    /// Run inference over an audio file and return speaker tracks in emission order
    fn run(&mut self, audio: &Path, bounds: &SpeakerBounds) -> DiarizeResult<Vec<Track>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bounds_are_unset() {
        let bounds = SpeakerBounds::new(Some(0), Some(0));
        assert!(bounds.is_unbounded());

        let bounds = SpeakerBounds::new(Some(2), None);
        assert_eq!(bounds.min, Some(2));
        assert_eq!(bounds.max, None);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(SpeakerBounds::new(Some(2), Some(4)).validate().is_ok());
        assert!(SpeakerBounds::new(Some(3), Some(3)).validate().is_ok());
        assert!(SpeakerBounds::new(Some(5), None).validate().is_ok());
        assert!(SpeakerBounds::new(Some(5), Some(2)).validate().is_err());
    }

    #[test]
    fn test_device_from_str() {
        assert_eq!("auto".parse::<Device>().unwrap(), Device::Auto);
        assert_eq!("CPU".parse::<Device>().unwrap(), Device::Cpu);
        assert_eq!("gpu".parse::<Device>().unwrap(), Device::Cuda);
        assert!("tpu".parse::<Device>().is_err());
    }
}
