use crate::core::{Diarization, Segment};
use crate::error::{DiarizeError, DiarizeResult};
use crate::pipeline::{Pipeline, SpeakerBounds};
use log::{debug, info};
use std::path::Path;

/// Runs a pipeline over one file and reshapes its tracks into a [`Diarization`]
pub struct Diarizer<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Diarizer<P> {
    /// Create a diarizer over a pipeline
    pub fn new(pipeline: P) -> Self {
        Diarizer { pipeline }
    }

    /// Get reference to the pipeline
    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Diarize an audio file
    ///
    /// The file must exist and the bounds must be consistent before the
    /// pipeline is invoked. Pipeline errors other than a missing dependency
    /// are reported as [`DiarizeError::DiarizationFailed`].
    pub fn diarize<A: AsRef<Path>>(
        &mut self,
        audio: A,
        bounds: &SpeakerBounds,
    ) -> DiarizeResult<Diarization> {
        let audio = audio.as_ref();

        if !audio.exists() {
            return Err(DiarizeError::FileNotFound(audio.to_path_buf()));
        }
        bounds.validate()?;

        info!("Processing: {}", audio.display());

        let tracks = self.pipeline.run(audio, bounds).map_err(|e| match e {
            e @ (DiarizeError::MissingDependency(_) | DiarizeError::DiarizationFailed(_)) => e,
            e => DiarizeError::DiarizationFailed(e.to_string()),
        })?;

        let segments = tracks
            .into_iter()
            .map(|t| Segment::new(t.start, t.end, t.speaker))
            .collect();

        let result = Diarization::new(audio, segments);
        debug!(
            "{} segments from {} speakers",
            result.segments().len(),
            result.num_speakers()
        );

        Ok(result)
    }
}
