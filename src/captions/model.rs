use crate::foundation::error::{SeamlineError, SeamlineResult};

/// One word-level caption record.
///
/// The JSON schema (camelCase field names) is defined by the external
/// transcription step; this crate consumes it and never redefines it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    /// Caption text for this token.
    pub text: String,
    /// Display start in milliseconds.
    pub start_ms: f64,
    /// Display end in milliseconds.
    pub end_ms: f64,
    /// Timestamp the token was recognized at, in milliseconds.
    pub timestamp_ms: f64,
    /// Recognition confidence in `[0, 1]`, when the transcriber reports one.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Caption {
    /// Validate a single record's timing fields.
    pub fn validate(&self) -> SeamlineResult<()> {
        if !self.start_ms.is_finite() || self.start_ms < 0.0 {
            return Err(SeamlineError::validation(format!(
                "caption '{}' has invalid startMs",
                self.text
            )));
        }
        if !self.end_ms.is_finite() || self.end_ms < self.start_ms {
            return Err(SeamlineError::validation(format!(
                "caption '{}' has endMs before startMs",
                self.text
            )));
        }
        Ok(())
    }
}

/// Parse and validate a caption sidecar file's JSON contents.
pub fn parse_captions(json: &str) -> SeamlineResult<Vec<Caption>> {
    let captions: Vec<Caption> = serde_json::from_str(json)
        .map_err(|e| SeamlineError::serde(format!("caption json parse failed: {e}")))?;
    for caption in &captions {
        caption.validate()?;
    }
    Ok(captions)
}

#[cfg(test)]
#[path = "../../tests/unit/captions/model.rs"]
mod tests;
