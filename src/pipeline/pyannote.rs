use super::{Device, Pipeline, SpeakerBounds, Track};
use crate::error::{DiarizeError, DiarizeResult};
use log::{debug, info};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Pretrained model loaded when none is configured
pub const DEFAULT_MODEL: &str = "pyannote/speaker-diarization-3.1";

/// Exit status the runner script uses when its imports fail
const IMPORT_ERROR_STATUS: i32 = 3;

/// Runner executed by the interpreter.
///
/// Arguments: audio path, model id, device, min speakers, max speakers.
/// Empty bounds are not forwarded to the pipeline. Everything except the
/// final JSON document goes to stderr.
const RUNNER: &str = r#"
import json
import sys

try:
    import torch
    from pyannote.audio import Pipeline
except ImportError as e:
    print(e, file=sys.stderr)
    sys.exit(3)

audio, model, device, min_speakers, max_speakers = sys.argv[1:6]

pipeline = Pipeline.from_pretrained(model, use_auth_token=None)

if device == "cuda" or (device == "auto" and torch.cuda.is_available()):
    pipeline.to(torch.device("cuda"))
    device = "cuda"
else:
    device = "cpu"

params = {}
if min_speakers:
    params["min_speakers"] = int(min_speakers)
if max_speakers:
    params["max_speakers"] = int(max_speakers)

print(f"Processing: {audio}", file=sys.stderr)
diarization = pipeline(audio, **params)

tracks = [
    {"start": float(turn.start), "end": float(turn.end), "speaker": speaker}
    for turn, _, speaker in diarization.itertracks(yield_label=True)
]
print(json.dumps({"device": device, "tracks": tracks}))
"#;

/// Settings for the pyannote pipeline runner
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Python interpreter with `pyannote.audio` and `torch` installed
    pub python: PathBuf,
    /// Pretrained pipeline identifier
    pub model: String,
    /// Requested compute device
    pub device: Device,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            python: PathBuf::from("python3"),
            model: DEFAULT_MODEL.to_string(),
            device: Device::Auto,
        }
    }
}

impl PipelineConfig {
    /// Set interpreter
    pub fn with_python<P: Into<PathBuf>>(mut self, python: P) -> Self {
        self.python = python.into();
        self
    }

    /// Set model id
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set device
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }
}

/// What the runner prints on success
#[derive(Debug, Deserialize)]
struct RunnerOutput {
    device: String,
    tracks: Vec<Track>,
}

/// pyannote.audio pipeline run in an external Python interpreter
#[derive(Debug, Clone)]
pub struct PyannotePipeline {
    config: PipelineConfig,
}

impl PyannotePipeline {
    /// Create a pipeline runner
    pub fn new(config: PipelineConfig) -> Self {
        PyannotePipeline { config }
    }

    /// Build the interpreter invocation for one run
    fn command(&self, audio: &Path, bounds: &SpeakerBounds) -> Command {
        let bound = |b: Option<u32>| b.map(|n| n.to_string()).unwrap_or_default();

        let mut cmd = Command::new(&self.config.python);
        cmd.arg("-c")
            .arg(RUNNER)
            .arg(audio)
            .arg(&self.config.model)
            .arg(self.config.device.as_str())
            .arg(bound(bounds.min))
            .arg(bound(bounds.max))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn check_status(&self, output: &Output) -> DiarizeResult<()> {
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("pipeline stderr:\n{}", stderr.trim_end());

        if output.status.code() == Some(IMPORT_ERROR_STATUS) {
            return Err(DiarizeError::MissingDependency(format!(
                "pyannote.audio not installed ({}). Run: pip install pyannote.audio torch",
                stderr.trim()
            )));
        }

        Err(DiarizeError::DiarizationFailed(failure_cause(
            &stderr,
            &output.status.to_string(),
        )))
    }
}

impl Pipeline for PyannotePipeline {
    fn run(&mut self, audio: &Path, bounds: &SpeakerBounds) -> DiarizeResult<Vec<Track>> {
        info!(
            "Loading pipeline {} (first run downloads the model, ~300MB)",
            self.config.model
        );
        debug!(
            "interpreter: {}, device: {}, bounds: {:?}",
            self.config.python.display(),
            self.config.device,
            bounds
        );

        let output = match self.command(audio, bounds).output() {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DiarizeError::MissingDependency(format!(
                    "Python interpreter not found: {}",
                    self.config.python.display()
                )));
            }
            Err(e) => return Err(DiarizeError::Io(e)),
        };

        self.check_status(&output)?;

        let result = parse_output(&output.stdout)?;
        info!(
            "Pipeline ran on {} and emitted {} tracks",
            result.device,
            result.tracks.len()
        );
        Ok(result.tracks)
    }
}

/// Parse the runner's stdout; the JSON document is the last non-empty line
fn parse_output(stdout: &[u8]) -> DiarizeResult<RunnerOutput> {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| DiarizeError::DiarizationFailed("pipeline produced no output".to_string()))?;

    serde_json::from_str(line).map_err(|e| {
        DiarizeError::DiarizationFailed(format!("unreadable pipeline output: {}", e))
    })
}

/// Last non-empty stderr line (the exception message of a traceback)
fn failure_cause(stderr: &str, status: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("pipeline exited with {}", status))
}
