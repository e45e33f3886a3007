//! Offline speech-to-text via a whisper.cpp binary.
//!
//! The recognizer is orchestrated, not reimplemented: audio is handed to the
//! external binary and its word-level JSON output is mapped into the caption
//! records the rest of the crate consumes.

use std::path::{Path, PathBuf};

use crate::{
    captions::model::Caption,
    foundation::error::{SeamlineError, SeamlineResult},
};

/// Location and settings of the external whisper binary.
#[derive(Clone, Debug)]
pub struct WhisperConfig {
    /// Path to the whisper.cpp CLI binary.
    pub binary: PathBuf,
    /// Path to the ggml model file.
    pub model: PathBuf,
    /// Spoken language hint, e.g. `"es"`.
    pub language: String,
}

impl WhisperConfig {
    /// Build a config from binary, model and language.
    pub fn new(
        binary: impl Into<PathBuf>,
        model: impl Into<PathBuf>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            binary: binary.into(),
            model: model.into(),
            language: language.into(),
        }
    }
}

/// The caption sidecar path for a media file (`clip.mp4` -> `clip.json`).
///
/// A sidecar that already exists means the file was transcribed in an earlier
/// run and can be skipped.
pub fn caption_sidecar_path(media: &Path) -> PathBuf {
    media.with_extension("json")
}

/// Run the whisper binary on a 16 kHz mono WAV and return word-level captions.
///
/// The binary is invoked with word splitting and token-level timestamps and
/// asked to write full JSON next to the input; that JSON is then read back
/// and mapped via [`captions_from_whisper_json`].
#[cfg(feature = "media-ffmpeg")]
pub fn transcribe_audio(cfg: &WhisperConfig, wav: &Path) -> SeamlineResult<Vec<Caption>> {
    let out_base = wav.with_extension("");
    let out = std::process::Command::new(&cfg.binary)
        .arg("-m")
        .arg(&cfg.model)
        .arg("-f")
        .arg(wav)
        .args(["-l", &cfg.language])
        .args([
            "--output-json-full",
            "--split-on-word",
            "--max-len",
            "1",
            "--no-prints",
        ])
        .arg("--output-file")
        .arg(&out_base)
        .output()
        .map_err(|e| SeamlineError::probe(format!("failed to run whisper binary: {e}")))?;
    if !out.status.success() {
        return Err(SeamlineError::probe(format!(
            "whisper transcription failed for '{}': {}",
            wav.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let json_path = out_base.with_extension("json");
    let json = std::fs::read_to_string(&json_path).map_err(|e| {
        SeamlineError::probe(format!(
            "failed to read whisper output '{}': {e}",
            json_path.display()
        ))
    })?;
    captions_from_whisper_json(&json)
}

/// Stub used when the `media-ffmpeg` feature is disabled.
#[cfg(not(feature = "media-ffmpeg"))]
pub fn transcribe_audio(_cfg: &WhisperConfig, _wav: &Path) -> SeamlineResult<Vec<Caption>> {
    Err(SeamlineError::probe(
        "transcription requires the 'media-ffmpeg' feature",
    ))
}

/// Map whisper.cpp full-JSON output into caption records.
///
/// With word splitting enabled each transcription segment is one word; its
/// confidence is the mean token probability when the binary reports one.
pub fn captions_from_whisper_json(json: &str) -> SeamlineResult<Vec<Caption>> {
    #[derive(serde::Deserialize)]
    struct WhisperOffsets {
        from: f64,
        to: f64,
    }
    #[derive(serde::Deserialize)]
    struct WhisperToken {
        #[serde(default)]
        p: Option<f64>,
    }
    #[derive(serde::Deserialize)]
    struct WhisperSegment {
        offsets: WhisperOffsets,
        text: String,
        #[serde(default)]
        tokens: Vec<WhisperToken>,
    }
    #[derive(serde::Deserialize)]
    struct WhisperOutput {
        transcription: Vec<WhisperSegment>,
    }

    let parsed: WhisperOutput = serde_json::from_str(json)
        .map_err(|e| SeamlineError::serde(format!("whisper json parse failed: {e}")))?;

    let mut captions = Vec::new();
    for segment in parsed.transcription {
        let text = segment.text.trim();
        if text.is_empty() || text.starts_with("[_") {
            continue;
        }

        let probabilities: Vec<f64> = segment.tokens.iter().filter_map(|t| t.p).collect();
        let confidence = if probabilities.is_empty() {
            None
        } else {
            Some(probabilities.iter().sum::<f64>() / probabilities.len() as f64)
        };

        captions.push(Caption {
            text: text.to_string(),
            start_ms: segment.offsets.from,
            end_ms: segment.offsets.to,
            timestamp_ms: (segment.offsets.from + segment.offsets.to) / 2.0,
            confidence,
        });
    }
    Ok(captions)
}

#[cfg(test)]
#[path = "../../tests/unit/prep/transcribe.rs"]
mod tests;
