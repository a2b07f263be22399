//! JSON output and human-readable summaries

use crate::core::Diarization;
use crate::error::DiarizeResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Compact single-line JSON, as written to stdout
pub fn to_json(result: &Diarization) -> DiarizeResult<String> {
    Ok(serde_json::to_string(result)?)
}

/// Write pretty-printed JSON to a file
pub fn save_json<P: AsRef<Path>>(path: P, result: &Diarization) -> DiarizeResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.flush()?;
    Ok(())
}

/// Write the end-of-run summary
pub fn write_summary<W: Write>(mut out: W, result: &Diarization) -> DiarizeResult<()> {
    writeln!(out)?;
    writeln!(out, "Diarization complete!")?;
    writeln!(out, "Detected {} speakers", result.num_speakers())?;
    writeln!(out, "Total segments: {}", result.segments().len())?;
    Ok(())
}

/// Print the end-of-run summary to stderr
pub fn print_summary(result: &Diarization) -> DiarizeResult<()> {
    write_summary(std::io::stderr().lock(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Segment;
    use tempfile::NamedTempFile;

    fn sample() -> Diarization {
        Diarization::new(
            "call.wav",
            vec![
                Segment::new(0.0, 1.25, "SPEAKER_00"),
                Segment::new(1.25, 3.5, "SPEAKER_01"),
            ],
        )
    }

    #[test]
    fn test_file_matches_stdout_json() {
        let temp_file = NamedTempFile::new().unwrap();
        let result = sample();

        save_json(temp_file.path(), &result).unwrap();
        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        let compact = to_json(&result).unwrap();

        let from_file: serde_json::Value = serde_json::from_str(&written).unwrap();
        let from_stdout: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(from_file, from_stdout);

        // Same document once indentation is stripped
        let stripped: String = written
            .lines()
            .map(|l| l.trim_start())
            .collect::<Vec<_>>()
            .join("")
            .replace("\": ", "\":");
        assert_eq!(stripped, compact);
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let temp_file = NamedTempFile::new().unwrap();
        save_json(temp_file.path(), &sample()).unwrap();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(written.starts_with("{\n  \"audio_file\": \"call.wav\""));
    }

    #[test]
    fn test_compact_is_single_line() {
        let compact = to_json(&sample()).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"{"audio_file":"call.wav","num_speakers":2,"#));
    }

    #[test]
    fn test_summary() {
        let mut buf = Vec::new();
        write_summary(&mut buf, &sample()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\nDiarization complete!\nDetected 2 speakers\nTotal segments: 2\n"
        );
    }
}
