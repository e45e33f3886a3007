//! Audio preparation via the system `ffmpeg` binary.
//!
//! Some TTS pipelines emit WAV containers that downstream parsers reject;
//! re-encoding to plain pcm_s16le fixes them. Transcription additionally
//! needs a 16 kHz mono copy of whatever audio the source carries.

use std::path::Path;

use crate::foundation::error::{SeamlineError, SeamlineResult};

/// Re-encode `input` into a standard WAV: pcm_s16le, 44.1 kHz, stereo.
#[cfg(feature = "media-ffmpeg")]
pub fn reencode_to_standard_wav(input: &Path, output: &Path) -> SeamlineResult<()> {
    run_ffmpeg(input, output, &["-acodec", "pcm_s16le", "-ar", "44100", "-ac", "2"])
}

/// Extract the audio of `input` as a 16 kHz mono s16 WAV for transcription.
#[cfg(feature = "media-ffmpeg")]
pub fn extract_transcription_wav(input: &Path, output: &Path) -> SeamlineResult<()> {
    run_ffmpeg(input, output, &["-ar", "16000", "-ac", "1", "-sample_fmt", "s16"])
}

#[cfg(feature = "media-ffmpeg")]
fn run_ffmpeg(input: &Path, output: &Path, codec_args: &[&str]) -> SeamlineResult<()> {
    if !input.exists() {
        return Err(SeamlineError::validation(format!(
            "input file '{}' does not exist",
            input.display()
        )));
    }
    ensure_parent_dir(output)?;

    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(input)
        .args(codec_args)
        .arg("-y")
        .arg(output)
        .output()
        .map_err(|e| SeamlineError::probe(format!("failed to run ffmpeg: {e}")))?;
    if !out.status.success() {
        return Err(SeamlineError::probe(format!(
            "ffmpeg re-encode failed for '{}': {}",
            input.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    Ok(())
}

/// Stub used when the `media-ffmpeg` feature is disabled.
#[cfg(not(feature = "media-ffmpeg"))]
pub fn reencode_to_standard_wav(_input: &Path, _output: &Path) -> SeamlineResult<()> {
    Err(SeamlineError::probe(
        "audio preparation requires the 'media-ffmpeg' feature",
    ))
}

/// Stub used when the `media-ffmpeg` feature is disabled.
#[cfg(not(feature = "media-ffmpeg"))]
pub fn extract_transcription_wav(_input: &Path, _output: &Path) -> SeamlineResult<()> {
    Err(SeamlineError::probe(
        "audio preparation requires the 'media-ffmpeg' feature",
    ))
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> SeamlineResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
