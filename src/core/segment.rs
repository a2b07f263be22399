use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// One speaker turn: `speaker` talks from `start` to `end` (seconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Speaker label assigned by the pipeline (e.g. "SPEAKER_00")
    pub speaker: String,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: f64, end: f64, speaker: impl Into<String>) -> Self {
        Segment {
            start,
            end,
            speaker: speaker.into(),
        }
    }

    /// Length of the turn in seconds
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// Diarization of a single audio file
///
/// Segments keep the order the pipeline emitted them in; nothing here
/// sorts or merges them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diarization {
    audio_file: String,
    num_speakers: usize,
    segments: Vec<Segment>,
}

impl Diarization {
    /// Build a result, counting distinct speaker labels
    pub fn new<P: AsRef<Path>>(audio_file: P, segments: Vec<Segment>) -> Self {
        let num_speakers = segments
            .iter()
            .map(|s| s.speaker.as_str())
            .collect::<HashSet<_>>()
            .len();

        Diarization {
            audio_file: audio_file.as_ref().to_string_lossy().into_owned(),
            num_speakers,
            segments,
        }
    }

    /// Path of the diarized audio file, as given
    pub fn audio_file(&self) -> &str {
        &self.audio_file
    }

    /// Number of distinct speaker labels
    pub fn num_speakers(&self) -> usize {
        self.num_speakers
    }

    /// Segments in emission order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct speaker labels in order of first appearance
    pub fn speakers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .map(|s| s.speaker.as_str())
            .filter(|speaker| seen.insert(*speaker))
            .collect()
    }

    /// Total speaking time per speaker, in seconds
    pub fn speaker_durations(&self) -> BTreeMap<&str, f64> {
        let mut totals = BTreeMap::new();
        for segment in &self.segments {
            *totals.entry(segment.speaker.as_str()).or_insert(0.0) += segment.duration();
        }
        totals
    }

    /// Check if no speech was attributed to anyone
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diarization {
        Diarization::new(
            "meeting.wav",
            vec![
                Segment::new(0.5, 2.0, "SPEAKER_01"),
                Segment::new(2.1, 4.0, "SPEAKER_00"),
                Segment::new(4.0, 5.0, "SPEAKER_01"),
            ],
        )
    }

    #[test]
    fn test_num_speakers_counts_distinct_labels() {
        let result = sample();
        assert_eq!(result.num_speakers(), 2);
        assert_eq!(result.segments().len(), 3);
    }

    #[test]
    fn test_empty_result() {
        let result = Diarization::new("silence.wav", Vec::new());
        assert_eq!(result.num_speakers(), 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_speakers_first_appearance() {
        assert_eq!(sample().speakers(), vec!["SPEAKER_01", "SPEAKER_00"]);
    }

    #[test]
    fn test_speaker_durations() {
        let result = sample();
        let totals = result.speaker_durations();
        assert!((totals["SPEAKER_01"] - 2.5).abs() < 1e-9);
        assert!((totals["SPEAKER_00"] - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_serialized_field_order() {
        let json = serde_json::to_string(&Diarization::new(
            "a.wav",
            vec![Segment::new(0.0, 1.5, "SPEAKER_00")],
        ))
        .unwrap();
        assert_eq!(
            json,
            r#"{"audio_file":"a.wav","num_speakers":1,"segments":[{"start":0.0,"end":1.5,"speaker":"SPEAKER_00"}]}"#
        );
    }
}
