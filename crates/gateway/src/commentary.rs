//! Commentary Generator: prompt construction, one provider call, and
//! extraction with a fixed fallback.
//!
//! Commentary is best-effort. [`CommentaryGenerator::generate_commentary`]
//! has no error path; anything short of a non-empty first choice resolves
//! to [`apod_core::FALLBACK_COMMENTARY`].

use std::sync::Arc;

use apod_core::text::excerpt;
use apod_core::{CommentaryRequest, CommentaryResult};

use crate::upstream::TextProvider;

/// Upper bound on generated tokens per request.
pub const MAX_OUTPUT_TOKENS: u32 = 100;

/// Longest description excerpt placed in the prompt, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1500;

/// Word count the poem is asked to aim for.
pub const TARGET_WORDS: u32 = 50;

pub struct CommentaryGenerator {
    provider: Arc<dyn TextProvider>,
}

impl CommentaryGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        CommentaryGenerator { provider }
    }

    /// Single attempt; the caller retries by asking again.
    pub async fn generate_commentary(&self, request: &CommentaryRequest) -> CommentaryResult {
        let prompt = build_prompt(request);

        match self.provider.complete(&prompt, MAX_OUTPUT_TOKENS).await {
            Ok(Some(text)) if !text.is_empty() => {
                tracing::info!(title = %request.subject_title, "commentary generated");
                CommentaryResult::now(text)
            }
            Ok(_) => {
                tracing::warn!(title = %request.subject_title, "text provider returned no content");
                CommentaryResult::fallback()
            }
            Err(err) => {
                tracing::warn!(title = %request.subject_title, error = %err, "commentary generation failed");
                CommentaryResult::fallback()
            }
        }
    }
}

/// Deterministic prompt from the title and a bounded excerpt of the description.
pub fn build_prompt(request: &CommentaryRequest) -> String {
    format!(
        "Generate an interesting cosmic complete poem of around {} words of text about the following NASA image:\nTitle: \"{}\"\nDescription: \"{}\"",
        TARGET_WORDS,
        request.subject_title,
        excerpt(&request.subject_description, MAX_DESCRIPTION_CHARS)
    )
}
