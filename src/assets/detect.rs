//! Asset auto-detection over an injected listing.
//!
//! The hosting surface supplies the flat file listing (its static-asset
//! registry, a directory walk, a fixture in tests); detection itself never
//! touches the filesystem.

const VIDEO_EXTS: &[&str] = &["mp4", "mov", "avi", "webm"];
const AUDIO_EXTS: &[&str] = &["mp3", "wav", "m4a", "aac"];
const CAPTION_EXTS: &[&str] = &["json", "srt", "vtt"];

const VIDEO_PREFIX: &str = "videos/";
const AUDIO_PREFIX: &str = "audio/";

/// One entry of the host's asset listing.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AssetEntry {
    /// Listing-relative file name, e.g. `videos/01_intro.mp4`.
    pub name: String,
}

/// Assets partitioned out of a flat listing by naming convention.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectedAssets {
    /// Ordered clip sources (`videos/` prefix, lexicographic).
    pub videos: Vec<String>,
    /// At most one audio bed (`audio/` prefix).
    pub audio: Option<String>,
    /// At most one caption sidecar (`audio/` prefix, json/srt/vtt).
    pub captions: Option<String>,
}

/// Partition `files` into videos, one audio track and one caption file.
///
/// Matching is case-insensitive on the name; the original casing is returned.
/// Videos are sorted lexicographically so array position defines playback
/// order. Audio and caption candidates are also sorted before taking the
/// first, so the pick does not depend on listing order.
pub fn detect_assets(files: &[AssetEntry]) -> DetectedAssets {
    let mut videos: Vec<String> = files
        .iter()
        .filter(|f| matches_convention(&f.name, VIDEO_PREFIX, VIDEO_EXTS))
        .map(|f| f.name.clone())
        .collect();
    videos.sort();

    DetectedAssets {
        videos,
        audio: first_sorted(files, AUDIO_PREFIX, AUDIO_EXTS),
        captions: first_sorted(files, AUDIO_PREFIX, CAPTION_EXTS),
    }
}

fn first_sorted(files: &[AssetEntry], prefix: &str, exts: &[&str]) -> Option<String> {
    let mut candidates: Vec<String> = files
        .iter()
        .filter(|f| matches_convention(&f.name, prefix, exts))
        .map(|f| f.name.clone())
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

fn matches_convention(name: &str, prefix: &str, exts: &[&str]) -> bool {
    let lower = name.to_ascii_lowercase();
    if !lower.starts_with(prefix) {
        return false;
    }
    exts.iter().any(|ext| {
        lower
            .strip_suffix(ext)
            .and_then(|rest| rest.strip_suffix('.'))
            .is_some()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/detect.rs"]
mod tests;
