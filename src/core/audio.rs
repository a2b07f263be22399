use crate::error::{DiarizeError, DiarizeResult};
use std::fmt;
use std::time::Duration;

/// Audio metadata/information
#[derive(Debug, Clone, PartialEq)]
pub struct AudioMetadata {
    /// Total duration of the audio, when the container reports a frame count
    pub duration: Option<Duration>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u32,
    /// Codec short name (e.g., "pcm_s16le", "mp3", "flac")
    pub codec: String,
}

impl AudioMetadata {
    /// Create new metadata
    pub fn new(sample_rate: u32, channels: u32, codec: String) -> DiarizeResult<Self> {
        if sample_rate == 0 {
            return Err(DiarizeError::Probe("Invalid sample rate: 0".to_string()));
        }

        Ok(AudioMetadata {
            duration: None,
            sample_rate,
            channels,
            codec,
        })
    }

    /// Set duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set duration from a frame count at this sample rate
    pub fn with_frames(self, frames: u64) -> Self {
        let secs = frames as f64 / self.sample_rate as f64;
        self.with_duration(Duration::from_secs_f64(secs))
    }

    /// Get duration in seconds
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration.map(|d| d.as_secs_f64())
    }
}

impl fmt::Display for AudioMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.duration_secs() {
            Some(secs) => write!(f, "{:.1}s, ", secs)?,
            None => write!(f, "unknown duration, ")?,
        }
        write!(
            f,
            "{} Hz, {} ch, {}",
            self.sample_rate, self.channels, self.codec
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_metadata() {
        let metadata = AudioMetadata::new(16000, 1, "pcm_s16le".to_string())
            .unwrap()
            .with_frames(48000);

        assert_eq!(metadata.sample_rate, 16000);
        assert_eq!(metadata.channels, 1);
        assert_eq!(metadata.duration_secs(), Some(3.0));
    }

    #[test]
    fn test_audio_metadata_invalid_rate() {
        assert!(AudioMetadata::new(0, 1, "mp3".to_string()).is_err());
    }

    #[test]
    fn test_display() {
        let metadata = AudioMetadata::new(44100, 2, "mp3".to_string()).unwrap();
        assert_eq!(metadata.to_string(), "unknown duration, 44100 Hz, 2 ch, mp3");

        let metadata = metadata.with_duration(Duration::from_millis(1500));
        assert_eq!(metadata.to_string(), "1.5s, 44100 Hz, 2 ch, mp3");
    }
}
