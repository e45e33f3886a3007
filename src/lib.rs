//! Seamline assembles the scheduling data for short vertical video
//! compositions: ordered clips stitched with crossfade transitions, an
//! optional audio bed, and word-level captions grouped into display pages.
//!
//! The crate computes *when and how* things appear; it renders nothing.
//! Decoding, compositing and text layout belong to the hosting surface;
//! duration probing and transcription are delegated to external binaries.
//!
//! # Pipeline overview
//!
//! 1. **Detect**: partition a flat asset listing into ordered clips, one audio
//!    bed and one caption sidecar ([`detect_assets`])
//! 2. **Resolve**: map every clip to a frame-quantized duration, tolerating
//!    per-clip probe failure ([`resolve_durations`])
//! 3. **Schedule**: compute start frames and opacity ramps so consecutive
//!    clips crossfade by exactly the transition length ([`build_timeline`])
//! 4. **Derive**: produce the composition metadata a hosting surface needs
//!    ([`schedule_continuous`], [`meme_metadata`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: scheduling is a pure function of resolved
//!   durations and the transition config; identical inputs give bit-identical
//!   timelines.
//! - **No IO in scheduling**: external IO happens in the resolver and prep
//!   steps, never while a timeline is being computed or sampled.
//! - **Fail fast on authoring mistakes**: a transition longer than a clip or
//!   an empty clip list is an error, never a silent clamp.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod captions;
mod composition;
mod foundation;
mod prep;
mod schedule;

pub use assets::detect::{AssetEntry, DetectedAssets, detect_assets};
pub use assets::media::{VideoSourceInfo, probe_video};
pub use assets::resolve::{
    ClipMetadata, DurationOrigin, DurationProber, FALLBACK_DURATION_SECS, FfprobeProber,
    ResolutionPhase, ResolvedDurations, fallback_frames, provisional_durations, resolve_durations,
};
pub use captions::model::{Caption, parse_captions};
pub use captions::pages::{
    CaptionPage, DEFAULT_COMBINE_WITHIN_MS, group_into_pages, page_at_ms, page_frame_range,
};
pub use composition::metadata::{
    ContinuousSchedule, DEFAULT_CANVAS, DEFAULT_FPS, MIN_CONTINUOUS_DURATION_FRAMES,
    RenderMetadata, continuous_metadata, meme_metadata, provisional_continuous,
    schedule_continuous,
};
pub use composition::model::{
    ContinuousProps, MemeCaption, MemeData, MemeProps, TransitionConfig, parse_meme_data,
};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use foundation::error::{SeamlineError, SeamlineResult};
pub use prep::audio::{
    ensure_parent_dir, extract_transcription_wav, is_ffmpeg_on_path, reencode_to_standard_wav,
};
pub use prep::transcribe::{
    WhisperConfig, caption_sidecar_path, captions_from_whisper_json, transcribe_audio,
};
pub use schedule::sequencer::{
    DEFAULT_TRANSITION_FRAMES, OpacityCurve, Timeline, TimelineEntry, build_timeline,
};
