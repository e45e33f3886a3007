use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_clamp_stays_inside() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(2));
    assert_eq!(r.clamp(FrameIndex(3)), FrameIndex(3));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(4));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn quantization_rounds_to_nearest() {
    let fps = Fps::new(30, 1).unwrap();
    // 4.49 s * 30 = 134.7 frames quantizes up, not down.
    assert_eq!(fps.secs_to_frames_round(4.49), 135);
    assert_eq!(fps.secs_to_frames_round(4.0), 120);
    assert_eq!(fps.secs_to_frames_round(4.01), 120);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);
}

#[test]
fn millis_quantization_matches_secs() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.millis_to_frames_round(1200.0), 36);
    assert_eq!(
        fps.millis_to_frames_round(2500.0),
        fps.secs_to_frames_round(2.5)
    );
}

#[test]
fn ntsc_rate_roundtrip() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_round(secs), 123);
}
