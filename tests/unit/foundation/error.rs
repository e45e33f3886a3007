use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SeamlineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SeamlineError::probe("x").to_string().contains("probe error:"));
    assert!(
        SeamlineError::schedule("x")
            .to_string()
            .contains("schedule error:")
    );
    assert!(
        SeamlineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SeamlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
