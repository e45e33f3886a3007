//! Start-frame and crossfade scheduling for an ordered clip list.
//!
//! Scheduling is a pure function of the resolved durations and the transition
//! length, with no clocks and no hidden state. The hosting surface may
//! evaluate frames out of order or in parallel and call into the produced
//! [`Timeline`] from any number of contexts.

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{SeamlineError, SeamlineResult},
};

/// Default crossfade length in frames (0.5 s at 30 fps).
pub const DEFAULT_TRANSITION_FRAMES: u64 = 15;

/// Piecewise-linear opacity ramp for one scheduled clip.
///
/// Fade-in covers `[start, start + transition]`, fade-out covers
/// `[start + duration - transition, start + duration]`; opacity is 1.0
/// between them. Where a very short clip makes both windows cover the same
/// frame, fade-out wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OpacityCurve {
    start: u64,
    duration: u64,
    transition: u64,
    fade_in: bool,
    fade_out: bool,
}

impl OpacityCurve {
    /// Sample the curve at an absolute timeline frame.
    pub fn sample(&self, frame: FrameIndex) -> f64 {
        let f = frame.0 as f64;
        if self.fade_out {
            let out_start = (self.start + self.duration - self.transition) as f64;
            if f >= out_start {
                let t = (f - out_start) / (self.transition as f64);
                return (1.0 - t).clamp(0.0, 1.0);
            }
        }
        if self.fade_in {
            let t = (f - self.start as f64) / (self.transition as f64);
            return t.clamp(0.0, 1.0);
        }
        1.0
    }

    /// Whether the clip fades in (every clip but the first).
    pub fn has_fade_in(&self) -> bool {
        self.fade_in
    }

    /// Whether the clip fades out (every clip but the last).
    pub fn has_fade_out(&self) -> bool {
        self.fade_out
    }
}

/// One clip's slot on the assembled timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEntry {
    /// Absolute start frame; clip `i + 1` starts `transition` frames before
    /// clip `i` ends.
    pub start: FrameIndex,
    /// Full playable duration; never truncated by the next clip's start.
    pub duration_frames: u64,
    /// Opacity ramps driving the crossfade.
    pub opacity: OpacityCurve,
}

impl TimelineEntry {
    /// The clip's play window `[start, start + duration)`.
    pub fn play_range(&self) -> FrameRange {
        FrameRange {
            start: self.start,
            end: FrameIndex(self.start.0 + self.duration_frames),
        }
    }
}

/// Complete per-clip schedule for a composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Scheduled entries in playback order.
    pub entries: Vec<TimelineEntry>,
    /// Total timeline length: last start plus last duration.
    pub total_frames: u64,
}

/// Compute the timeline for `durations` with a shared crossfade length.
///
/// `start[0] = 0`; `start[i] = start[i-1] + durations[i-1] - transition_frames`.
/// Clips play out their full duration; only their visible windows overlap, by
/// exactly `transition_frames`.
///
/// Fails fast with a [`SeamlineError::Schedule`] error on an empty clip list,
/// a zero duration, or a transition length that does not fit every clip
/// participating in a transition (`n >= 2`). Invalid configurations are never
/// clamped.
pub fn build_timeline(durations: &[u64], transition_frames: u64) -> SeamlineResult<Timeline> {
    if durations.is_empty() {
        return Err(SeamlineError::schedule(
            "cannot schedule an empty clip list; at least one clip is required",
        ));
    }
    if let Some(idx) = durations.iter().position(|&d| d == 0) {
        return Err(SeamlineError::schedule(format!(
            "clip {idx} has zero duration"
        )));
    }
    let n = durations.len();
    if n >= 2
        && let Some(idx) = durations.iter().position(|&d| transition_frames >= d)
    {
        return Err(SeamlineError::schedule(format!(
            "transition of {transition_frames} frames does not fit clip {idx} \
             ({} frames); every transitioning clip must outlast the crossfade",
            durations[idx]
        )));
    }

    let fades = n >= 2 && transition_frames > 0;
    let mut entries = Vec::with_capacity(n);
    let mut start = 0u64;
    for (i, &duration) in durations.iter().enumerate() {
        if i > 0 {
            // Checked above: transition_frames < durations[i-1].
            start = start + durations[i - 1] - transition_frames;
        }
        entries.push(TimelineEntry {
            start: FrameIndex(start),
            duration_frames: duration,
            opacity: OpacityCurve {
                start,
                duration,
                transition: transition_frames,
                fade_in: fades && i > 0,
                fade_out: fades && i < n - 1,
            },
        });
    }

    let total_frames = start + durations[n - 1];
    Ok(Timeline {
        entries,
        total_frames,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/sequencer.rs"]
mod tests;
