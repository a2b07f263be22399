use crate::core::AudioMetadata;
use crate::error::{DiarizeError, DiarizeResult};
use std::fs::File;
use std::path::Path;
use symphonia::core::codecs::CODEC_TYPE_NULL;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Probe a file with symphonia's default format registry
pub fn probe_file(path: &Path) -> DiarizeResult<AudioMetadata> {
    let file = Box::new(File::open(path)?);
    let mss = MediaSourceStream::new(file, Default::default());

    // Extension helps format detection for headerless streams
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| DiarizeError::Probe("No audio track found".to_string()))?;

    let params = &track.codec_params;

    let sample_rate = params
        .sample_rate
        .ok_or_else(|| DiarizeError::Probe("Unknown sample rate".to_string()))?;

    let channels = params.channels.map(|c| c.count() as u32).unwrap_or(0);

    let codec = symphonia::default::get_codecs()
        .get_codec(params.codec)
        .map(|d| d.short_name.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let metadata = AudioMetadata::new(sample_rate, channels, codec)?;

    Ok(match params.n_frames {
        Some(frames) => metadata.with_frames(frames),
        None => metadata,
    })
}
