use std::path::Path;

use rayon::prelude::*;

use crate::{
    assets::media,
    foundation::core::Fps,
    foundation::error::SeamlineResult,
};

/// Fallback duration substituted when a probe fails, in seconds.
pub const FALLBACK_DURATION_SECS: f64 = 4.0;

/// Maps a clip source to its playable duration in seconds.
///
/// Implementations may shell out to an external prober, hit a metadata cache,
/// or return canned values in tests. `Sync` because the resolver probes clips
/// concurrently.
pub trait DurationProber: Sync {
    /// Probe one source, returning its duration in seconds or an error.
    fn probe_duration_sec(&self, source: &str) -> SeamlineResult<f64>;
}

/// [`DurationProber`] backed by the system `ffprobe` binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfprobeProber;

impl DurationProber for FfprobeProber {
    fn probe_duration_sec(&self, source: &str) -> SeamlineResult<f64> {
        media::probe_video(Path::new(source)).map(|info| info.duration_sec)
    }
}

/// How a clip's duration was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DurationOrigin {
    /// Reported by the prober.
    Probed,
    /// Substituted after a probe failure.
    Fallback,
}

/// Resolved metadata for one clip.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClipMetadata {
    /// The clip source this metadata belongs to.
    pub source: String,
    /// Frame-rate-quantized playable duration, always >= 1.
    pub duration_frames: u64,
    /// Whether the duration was probed or substituted.
    pub origin: DurationOrigin,
}

/// Whether a duration set is provisional or final.
///
/// A `Pending` set carries fallback durations only, so a host can render a
/// loading state and re-run the sequencer once the `Resolved` set arrives.
/// Metadata is resolved once per render and never refetched mid-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionPhase {
    /// Probes have not completed; durations are fallbacks.
    Pending,
    /// All probes completed or fell back.
    Resolved,
}

/// The resolver's output: one metadata entry per input source, same order.
#[derive(Clone, Debug)]
pub struct ResolvedDurations {
    /// Resolution phase of this set.
    pub phase: ResolutionPhase,
    /// Per-clip metadata, index-aligned with the input sources.
    pub clips: Vec<ClipMetadata>,
}

impl ResolvedDurations {
    /// Durations in frames, index-aligned with the input sources.
    pub fn durations(&self) -> Vec<u64> {
        self.clips.iter().map(|c| c.duration_frames).collect()
    }

    /// Whether scheduling may use this set as final.
    pub fn is_ready(&self) -> bool {
        self.phase == ResolutionPhase::Resolved
    }

    /// Sources whose durations fell back after a probe failure.
    pub fn fallback_sources(&self) -> Vec<&str> {
        self.clips
            .iter()
            .filter(|c| c.origin == DurationOrigin::Fallback)
            .map(|c| c.source.as_str())
            .collect()
    }
}

/// Fallback duration in frames at the given frame rate.
pub fn fallback_frames(fps: Fps) -> u64 {
    fps.secs_to_frames_round(FALLBACK_DURATION_SECS).max(1)
}

/// Build the all-fallback `Pending` set for an initial provisional render.
pub fn provisional_durations(sources: &[String], fps: Fps) -> ResolvedDurations {
    let fallback = fallback_frames(fps);
    ResolvedDurations {
        phase: ResolutionPhase::Pending,
        clips: sources
            .iter()
            .map(|source| ClipMetadata {
                source: source.clone(),
                duration_frames: fallback,
                origin: DurationOrigin::Fallback,
            })
            .collect(),
    }
}

/// Resolve every source to a positive frame duration, tolerating per-clip
/// failure independently.
///
/// Probes run concurrently; output order matches input order. A failed probe
/// (error, non-finite or non-positive duration) is logged and replaced by the
/// fallback; it never aborts the batch, so the output length always equals
/// the input length.
#[tracing::instrument(skip(prober, sources), fields(clip_count = sources.len()))]
pub fn resolve_durations(
    prober: &dyn DurationProber,
    sources: &[String],
    fps: Fps,
) -> ResolvedDurations {
    let fallback = fallback_frames(fps);
    let clips = sources
        .par_iter()
        .map(|source| {
            let duration_sec = match prober.probe_duration_sec(source) {
                Ok(secs) if secs.is_finite() && secs > 0.0 => Some(secs),
                Ok(secs) => {
                    tracing::warn!(
                        source = %source,
                        reported = secs,
                        "probe reported unusable duration, using fallback"
                    );
                    None
                }
                Err(err) => {
                    tracing::warn!(source = %source, error = %err, "duration probe failed, using fallback");
                    None
                }
            };

            match duration_sec {
                Some(secs) => ClipMetadata {
                    source: source.clone(),
                    duration_frames: fps.secs_to_frames_round(secs).max(1),
                    origin: DurationOrigin::Probed,
                },
                None => ClipMetadata {
                    source: source.clone(),
                    duration_frames: fallback,
                    origin: DurationOrigin::Fallback,
                },
            }
        })
        .collect();

    ResolvedDurations {
        phase: ResolutionPhase::Resolved,
        clips,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolve.rs"]
mod tests;
