//! Grouping of word-level captions into display pages.
//!
//! Short-form vertical video shows a few words at a time; tokens whose start
//! falls within a fixed window of the page start are combined into one page.

use crate::{
    captions::model::Caption,
    foundation::core::{Fps, FrameIndex, FrameRange},
};

/// Default page window: tokens starting within 1.2 s of the page start are
/// shown together.
pub const DEFAULT_COMBINE_WITHIN_MS: f64 = 1200.0;

/// A group of captions displayed together.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaptionPage {
    /// Page display start in milliseconds (start of its first token).
    pub start_ms: f64,
    /// Page display end in milliseconds (max end over its tokens).
    pub end_ms: f64,
    /// Tokens joined into one display string.
    pub text: String,
    /// The word-level tokens making up the page.
    pub tokens: Vec<Caption>,
}

/// Group captions into pages; a token starts a new page when its start lies
/// more than `combine_within_ms` after the current page's start.
///
/// Input order does not matter: tokens are sorted by start time first, so the
/// paging is deterministic for a given record set.
pub fn group_into_pages(captions: &[Caption], combine_within_ms: f64) -> Vec<CaptionPage> {
    let mut sorted: Vec<&Caption> = captions.iter().collect();
    sorted.sort_by(|a, b| a.start_ms.total_cmp(&b.start_ms));

    let mut pages = Vec::<CaptionPage>::new();
    for caption in sorted {
        let start_new_page = match pages.last() {
            None => true,
            Some(page) => caption.start_ms - page.start_ms > combine_within_ms,
        };

        if start_new_page {
            pages.push(CaptionPage {
                start_ms: caption.start_ms,
                end_ms: caption.end_ms,
                text: caption.text.trim().to_string(),
                tokens: vec![caption.clone()],
            });
        } else if let Some(page) = pages.last_mut() {
            page.end_ms = page.end_ms.max(caption.end_ms);
            let trimmed = caption.text.trim();
            if !trimmed.is_empty() {
                if !page.text.is_empty() {
                    page.text.push(' ');
                }
                page.text.push_str(trimmed);
            }
            page.tokens.push(caption.clone());
        }
    }
    pages
}

/// Convert a page's display window to a timeline frame range.
pub fn page_frame_range(page: &CaptionPage, fps: Fps) -> FrameRange {
    let start = fps.millis_to_frames_round(page.start_ms);
    let end = fps.millis_to_frames_round(page.end_ms).max(start);
    FrameRange {
        start: FrameIndex(start),
        end: FrameIndex(end),
    }
}

/// The page covering `at_ms`, if any.
///
/// Pages are checked latest-first so an overlap resolves to the most recently
/// started page.
pub fn page_at_ms(pages: &[CaptionPage], at_ms: f64) -> Option<&CaptionPage> {
    pages
        .iter()
        .rev()
        .find(|p| p.start_ms <= at_ms && at_ms < p.end_ms)
}

#[cfg(test)]
#[path = "../../tests/unit/captions/pages.rs"]
mod tests;
