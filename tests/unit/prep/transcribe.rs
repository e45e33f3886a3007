use super::*;

const SAMPLE: &str = r#"{
    "systeminfo": "AVX = 1",
    "transcription": [
        {
            "timestamps": {"from": "00:00:00,060", "to": "00:00:00,480"},
            "offsets": {"from": 60, "to": 480},
            "text": " Las",
            "tokens": [{"text": " Las", "p": 0.98}]
        },
        {
            "timestamps": {"from": "00:00:00,480", "to": "00:00:01,020"},
            "offsets": {"from": 480, "to": 1020},
            "text": " abejas",
            "tokens": [{"text": " ab", "p": 0.9}, {"text": "ejas", "p": 0.8}]
        },
        {
            "timestamps": {"from": "00:00:01,020", "to": "00:00:01,020"},
            "offsets": {"from": 1020, "to": 1020},
            "text": "[_TT_102]",
            "tokens": []
        }
    ]
}"#;

#[test]
fn maps_word_segments_to_captions() {
    let captions = captions_from_whisper_json(SAMPLE).unwrap();
    assert_eq!(captions.len(), 2);

    assert_eq!(captions[0].text, "Las");
    assert_eq!(captions[0].start_ms, 60.0);
    assert_eq!(captions[0].end_ms, 480.0);
    assert_eq!(captions[0].timestamp_ms, 270.0);
    assert_eq!(captions[0].confidence, Some(0.98));
}

#[test]
fn confidence_is_mean_token_probability() {
    let captions = captions_from_whisper_json(SAMPLE).unwrap();
    let confidence = captions[1].confidence.unwrap();
    assert!((confidence - 0.85).abs() < 1e-12);
}

#[test]
fn special_and_empty_segments_are_skipped() {
    let captions = captions_from_whisper_json(SAMPLE).unwrap();
    assert!(captions.iter().all(|c| !c.text.starts_with("[_")));
}

#[test]
fn segment_without_token_probabilities_has_no_confidence() {
    let json = r#"{
        "transcription": [
            {"offsets": {"from": 0, "to": 100}, "text": " hola", "tokens": []}
        ]
    }"#;
    let captions = captions_from_whisper_json(json).unwrap();
    assert_eq!(captions[0].confidence, None);
}

#[test]
fn rejects_malformed_output() {
    assert!(captions_from_whisper_json("{}").is_err());
    assert!(captions_from_whisper_json("garbage").is_err());
}

#[test]
fn sidecar_path_replaces_the_media_extension() {
    use std::path::Path;
    assert_eq!(
        caption_sidecar_path(Path::new("public/audio/tts.wav")),
        Path::new("public/audio/tts.json")
    );
    assert_eq!(
        caption_sidecar_path(Path::new("clips/intro.mp4")),
        Path::new("clips/intro.json")
    );
}
