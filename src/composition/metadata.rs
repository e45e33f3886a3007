//! Render metadata derivation: ties the resolver and sequencer together the
//! way a hosting surface invokes them, and applies display-level defaults.

use crate::{
    assets::resolve::{self, DurationProber, ResolvedDurations},
    composition::model::{ContinuousProps, MemeProps},
    foundation::core::{Canvas, Fps},
    foundation::error::SeamlineResult,
    schedule::sequencer::{self, Timeline},
};

/// Default output frame rate.
pub const DEFAULT_FPS: Fps = Fps { num: 30, den: 1 };

/// Default vertical canvas.
pub const DEFAULT_CANVAS: Canvas = Canvas {
    width: 1080,
    height: 1920,
};

/// Display floor for the stitched composition: 60 s at 30 fps.
pub const MIN_CONTINUOUS_DURATION_FRAMES: u64 = 1800;

/// Composition-level metadata consumed by the hosting render surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderMetadata {
    /// Output frame rate.
    pub fps: Fps,
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Total composition length in frames.
    pub duration_in_frames: u64,
}

/// A schedule bundle for the stitched composition: resolved durations, the
/// timeline, and the render metadata derived from it.
#[derive(Clone, Debug)]
pub struct ContinuousSchedule {
    /// Per-clip resolved durations (phase tells provisional from final).
    pub durations: ResolvedDurations,
    /// The computed per-clip schedule.
    pub timeline: Timeline,
    /// Metadata for the hosting surface.
    pub metadata: RenderMetadata,
}

/// Derive metadata from a computed timeline.
///
/// `min_duration_frames` is a display floor only: it pads the composition's
/// reported length, never the per-clip schedule.
pub fn continuous_metadata(
    timeline: &Timeline,
    fps: Fps,
    canvas: Canvas,
    min_duration_frames: u64,
) -> RenderMetadata {
    RenderMetadata {
        fps,
        canvas,
        duration_in_frames: timeline.total_frames.max(min_duration_frames),
    }
}

/// Resolve durations, schedule, and derive metadata in one pass.
///
/// This is the `Resolved`-phase entry point; probes block until every clip
/// has a real or fallback duration, since a partially resolved set would
/// produce a malformed schedule.
pub fn schedule_continuous(
    prober: &dyn DurationProber,
    props: &ContinuousProps,
    fps: Fps,
) -> SeamlineResult<ContinuousSchedule> {
    props.validate()?;
    let durations = resolve::resolve_durations(prober, &props.sources, fps);
    build_schedule(props, durations, fps)
}

/// Build the provisional `Pending`-phase schedule from fallback durations.
///
/// Hosts render a loading state against this and re-invoke
/// [`schedule_continuous`] when real metadata arrives.
pub fn provisional_continuous(
    props: &ContinuousProps,
    fps: Fps,
) -> SeamlineResult<ContinuousSchedule> {
    props.validate()?;
    let durations = resolve::provisional_durations(&props.sources, fps);
    build_schedule(props, durations, fps)
}

fn build_schedule(
    props: &ContinuousProps,
    durations: ResolvedDurations,
    fps: Fps,
) -> SeamlineResult<ContinuousSchedule> {
    let timeline =
        sequencer::build_timeline(&durations.durations(), props.transition.duration_frames)?;
    let metadata =
        continuous_metadata(&timeline, fps, DEFAULT_CANVAS, MIN_CONTINUOUS_DURATION_FRAMES);
    Ok(ContinuousSchedule {
        durations,
        timeline,
        metadata,
    })
}

/// Derive metadata for the single-clip meme composition.
///
/// Unlike the stitched path there is no batch to protect, so a probe failure
/// propagates; the host decides whether to surface an error state.
pub fn meme_metadata(
    prober: &dyn DurationProber,
    props: &MemeProps,
    fps: Fps,
    canvas: Canvas,
) -> SeamlineResult<RenderMetadata> {
    let duration_sec = prober.probe_duration_sec(&props.video)?;
    Ok(RenderMetadata {
        fps,
        canvas,
        duration_in_frames: fps.secs_to_frames_round(duration_sec).max(1),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/composition/metadata.rs"]
mod tests;
