//! Audio metadata probing

/// Symphonia-based probe
pub mod symphonia;

use crate::core::AudioMetadata;
use crate::error::DiarizeResult;
use std::path::Path;

/// Read duration and format information from an audio file
pub fn probe<P: AsRef<Path>>(path: P) -> DiarizeResult<AudioMetadata> {
    self::symphonia::probe_file(path.as_ref())
}
