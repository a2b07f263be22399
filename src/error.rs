use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for diarization operations
pub type DiarizeResult<T> = Result<T, DiarizeError>;

/// Error types for the diarization driver
#[derive(Error, Debug)]
pub enum DiarizeError {
    /// IO error (file operations, process spawning)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input audio file does not exist
    #[error("Audio file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The external pipeline or its runtime is not installed
    #[error("{0}")]
    MissingDependency(String),

    /// The pipeline ran but did not produce a usable result
    #[error("Diarization failed: {0}")]
    DiarizationFailed(String),

    /// Rejected argument value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Audio metadata could not be read
    #[error("Probe error: {0}")]
    Probe(String),
}

impl From<symphonia::core::errors::Error> for DiarizeError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        match err {
            symphonia::core::errors::Error::IoError(e) => DiarizeError::Io(e),
            e => DiarizeError::Probe(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = DiarizeError::FileNotFound(PathBuf::from("missing.wav"));
        assert_eq!(err.to_string(), "Audio file not found: missing.wav");
    }

    #[test]
    fn test_diarization_failed_carries_cause() {
        let err = DiarizeError::DiarizationFailed("CUDA out of memory".to_string());
        assert_eq!(err.to_string(), "Diarization failed: CUDA out of memory");
    }
}
