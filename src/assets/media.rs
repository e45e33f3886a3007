use std::path::{Path, PathBuf};

use crate::foundation::error::{SeamlineError, SeamlineResult};

/// Container-level metadata for one clip source, as reported by `ffprobe`.
#[derive(Clone, Debug)]
pub struct VideoSourceInfo {
    /// Probed source path.
    pub source_path: PathBuf,
    /// Video stream width in pixels.
    pub width: u32,
    /// Video stream height in pixels.
    pub height: u32,
    /// Container duration in seconds, always finite and > 0.
    pub duration_sec: f64,
    /// Whether the container carries an audio stream.
    pub has_audio: bool,
}

/// Probe a clip source with the system `ffprobe` binary.
///
/// Fails when the binary is missing, the source cannot be opened, no video
/// stream exists, or the container reports no usable duration. Callers that
/// tolerate per-clip failure (the duration resolver) catch the error and fall
/// back; this function never substitutes defaults itself.
#[cfg(feature = "media-ffmpeg")]
pub fn probe_video(source_path: &Path) -> SeamlineResult<VideoSourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| SeamlineError::probe(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(SeamlineError::probe(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| SeamlineError::probe(format!("ffprobe json parse failed: {e}")))?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            SeamlineError::probe(format!(
                "no video stream found in '{}'",
                source_path.display()
            ))
        })?;
    let width = video_stream
        .width
        .ok_or_else(|| SeamlineError::probe("missing video width from ffprobe"))?;
    let height = video_stream
        .height
        .ok_or_else(|| SeamlineError::probe("missing video height from ffprobe"))?;

    let duration_sec = parsed
        .format
        .as_ref()
        .and_then(|f| f.duration.as_ref())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d > 0.0)
        .ok_or_else(|| {
            SeamlineError::probe(format!(
                "no usable duration reported for '{}'",
                source_path.display()
            ))
        })?;
    let has_audio = parsed
        .streams
        .iter()
        .any(|s| s.codec_type.as_deref() == Some("audio"));

    Ok(VideoSourceInfo {
        source_path: source_path.to_path_buf(),
        width,
        height,
        duration_sec,
        has_audio,
    })
}

/// Probe stub used when the `media-ffmpeg` feature is disabled.
#[cfg(not(feature = "media-ffmpeg"))]
pub fn probe_video(_source_path: &Path) -> SeamlineResult<VideoSourceInfo> {
    Err(SeamlineError::probe(
        "probing media sources requires the 'media-ffmpeg' feature",
    ))
}
