use crate::{
    assets::detect::DetectedAssets,
    foundation::error::{SeamlineError, SeamlineResult},
    schedule::sequencer::DEFAULT_TRANSITION_FRAMES,
};

/// Crossfade configuration shared by all adjacent clip pairs.
///
/// There is no per-pair override; a single length applies to every seam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionConfig {
    /// Crossfade length in frames.
    pub duration_frames: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_frames: DEFAULT_TRANSITION_FRAMES,
        }
    }
}

/// Props for the stitched multi-clip composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContinuousProps {
    /// Ordered clip sources; array position defines playback order.
    pub sources: Vec<String>,
    /// Optional audio bed played under the whole composition.
    pub audio: Option<String>,
    /// Optional caption sidecar consumed by the display surface.
    pub captions: Option<String>,
    /// Crossfade configuration.
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl ContinuousProps {
    /// Build props from an auto-detected asset partition.
    pub fn from_detected(assets: DetectedAssets) -> Self {
        Self {
            sources: assets.videos,
            audio: assets.audio,
            captions: assets.captions,
            transition: TransitionConfig::default(),
        }
    }

    /// Reject prop sets that cannot be scheduled.
    pub fn validate(&self) -> SeamlineResult<()> {
        if self.sources.is_empty() {
            return Err(SeamlineError::validation(
                "at least one video source is required",
            ));
        }
        if let Some(idx) = self.sources.iter().position(|s| s.trim().is_empty()) {
            return Err(SeamlineError::validation(format!(
                "video source {idx} is empty"
            )));
        }
        Ok(())
    }
}

/// Props for the single-clip meme composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemeProps {
    /// Background clip source.
    pub video: String,
    /// JSON sidecar with title and caption lines.
    pub data: String,
}

/// Caption line stacked over the meme background.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemeCaption {
    /// Display text.
    pub text: String,
}

/// Contents of the meme data sidecar.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemeData {
    /// Meme title.
    pub title: String,
    /// Caption lines in stacking order.
    pub captions: Vec<MemeCaption>,
}

/// Parse a meme data sidecar's JSON contents.
pub fn parse_meme_data(json: &str) -> SeamlineResult<MemeData> {
    serde_json::from_str(json)
        .map_err(|e| SeamlineError::serde(format!("meme data json parse failed: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
