use super::*;

use crate::foundation::error::SeamlineError;

fn starts(timeline: &Timeline) -> Vec<u64> {
    timeline.entries.iter().map(|e| e.start.0).collect()
}

#[test]
fn three_equal_clips_overlap_by_transition() {
    let timeline = build_timeline(&[90, 90, 90], 15).unwrap();
    assert_eq!(starts(&timeline), vec![0, 75, 150]);
    assert_eq!(timeline.total_frames, 240);
}

#[test]
fn single_clip_has_no_fades() {
    let timeline = build_timeline(&[120], 15).unwrap();
    assert_eq!(starts(&timeline), vec![0]);
    assert_eq!(timeline.total_frames, 120);

    let entry = &timeline.entries[0];
    assert!(!entry.opacity.has_fade_in());
    assert!(!entry.opacity.has_fade_out());
    for frame in [0, 7, 60, 119] {
        assert_eq!(entry.opacity.sample(FrameIndex(frame)), 1.0);
    }
}

#[test]
fn crossfade_opacity_ramps_meet_at_the_seam() {
    let timeline = build_timeline(&[60, 60], 15).unwrap();
    assert_eq!(starts(&timeline), vec![0, 45]);
    assert_eq!(timeline.total_frames, 105);

    let outgoing = &timeline.entries[0].opacity;
    let incoming = &timeline.entries[1].opacity;
    assert_eq!(incoming.sample(FrameIndex(45)), 0.0);
    assert_eq!(incoming.sample(FrameIndex(60)), 1.0);
    assert_eq!(outgoing.sample(FrameIndex(45)), 1.0);
    assert_eq!(outgoing.sample(FrameIndex(60)), 0.0);
    // Halfway through the seam both ramps sit at 0.5.
    assert!((incoming.sample(FrameIndex(52)) - 7.0 / 15.0).abs() < 1e-12);
    assert!((outgoing.sample(FrameIndex(52)) - 8.0 / 15.0).abs() < 1e-12);
}

#[test]
fn transition_exceeding_a_clip_is_a_config_error() {
    let err = build_timeline(&[10, 60], 15).unwrap_err();
    assert!(matches!(err, SeamlineError::Schedule(_)));
    assert!(err.to_string().contains("clip 0"));
}

#[test]
fn transition_equal_to_a_clip_is_a_config_error() {
    assert!(build_timeline(&[15, 60], 15).is_err());
}

#[test]
fn empty_clip_list_fails_fast() {
    let err = build_timeline(&[], 15).unwrap_err();
    assert!(matches!(err, SeamlineError::Schedule(_)));
}

#[test]
fn zero_duration_clip_is_rejected() {
    assert!(build_timeline(&[60, 0], 15).is_err());
    assert!(build_timeline(&[0], 0).is_err());
}

#[test]
fn oversized_transition_is_fine_for_a_single_clip() {
    // No pair transitions exist, so the transition length is irrelevant.
    let timeline = build_timeline(&[50], 100).unwrap();
    assert_eq!(timeline.total_frames, 50);
}

#[test]
fn starts_are_monotonic_and_overlaps_exact() {
    let durations = [50u64, 40, 60, 35];
    let transition = 20u64;
    let timeline = build_timeline(&durations, transition).unwrap();
    let s = starts(&timeline);

    for i in 1..s.len() {
        assert!(s[i] >= s[i - 1]);
        assert_eq!(s[i - 1] + durations[i - 1] - s[i], transition);
    }
    assert_eq!(timeline.total_frames, s[3] + durations[3]);
}

#[test]
fn scheduling_is_deterministic() {
    let durations = [90u64, 45, 120, 33];
    let a = build_timeline(&durations, 12).unwrap();
    let b = build_timeline(&durations, 12).unwrap();
    assert_eq!(a, b);

    for (ea, eb) in a.entries.iter().zip(&b.entries) {
        for frame in 0..a.total_frames {
            // Bit-identical, not merely close.
            assert_eq!(
                ea.opacity.sample(FrameIndex(frame)).to_bits(),
                eb.opacity.sample(FrameIndex(frame)).to_bits()
            );
        }
    }
}

#[test]
fn boundary_opacity_is_exact() {
    let durations = [90u64, 90, 90];
    let transition = 15u64;
    let timeline = build_timeline(&durations, transition).unwrap();
    let n = timeline.entries.len();

    for (i, entry) in timeline.entries.iter().enumerate() {
        let start = entry.start.0;
        let end = start + entry.duration_frames;
        if i > 0 {
            assert_eq!(entry.opacity.sample(FrameIndex(start)), 0.0);
            assert_eq!(entry.opacity.sample(FrameIndex(start + transition)), 1.0);
        }
        if i < n - 1 {
            assert_eq!(entry.opacity.sample(FrameIndex(end - transition)), 1.0);
            assert_eq!(entry.opacity.sample(FrameIndex(end)), 0.0);
        }
    }
}

#[test]
fn fade_out_wins_where_both_windows_overlap() {
    // Middle clip of 16 frames with a 15-frame transition: its fade-in
    // window [15, 30] and fade-out window [16, 31] overlap almost entirely.
    let timeline = build_timeline(&[30, 16, 30], 15).unwrap();
    let middle = &timeline.entries[1].opacity;

    assert_eq!(timeline.entries[1].start, FrameIndex(15));
    let expected_fade_out = 1.0 - 4.0 / 15.0;
    assert!((middle.sample(FrameIndex(20)) - expected_fade_out).abs() < 1e-12);
}

#[test]
fn zero_transition_schedules_back_to_back() {
    let timeline = build_timeline(&[60, 60], 0).unwrap();
    assert_eq!(starts(&timeline), vec![0, 60]);
    assert_eq!(timeline.total_frames, 120);
    for entry in &timeline.entries {
        assert!(!entry.opacity.has_fade_in());
        assert!(!entry.opacity.has_fade_out());
        assert_eq!(entry.opacity.sample(entry.start), 1.0);
    }
}

#[test]
fn play_range_spans_full_duration() {
    let timeline = build_timeline(&[90, 45], 10).unwrap();
    let entry = &timeline.entries[1];
    let range = entry.play_range();
    assert_eq!(range.start, entry.start);
    assert_eq!(range.len_frames(), entry.duration_frames);
}
