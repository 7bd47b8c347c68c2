//! Client side of the Commentary Generator.
//!
//! The prompt and the provider credential live behind the gateway; this
//! half derives the request from the current record and swallows every
//! failure into the fallback text.

use std::sync::Arc;

use apod_core::{CommentaryRequest, CommentaryResult, CommentarySource, PictureRecord};

#[derive(Clone)]
pub struct CommentaryClient {
    source: Arc<dyn CommentarySource>,
}

impl CommentaryClient {
    pub fn new(source: Arc<dyn CommentarySource>) -> Self {
        CommentaryClient { source }
    }

    /// One attempt, never an error: failures become the fallback text.
    pub async fn generate_commentary(&self, record: &PictureRecord) -> CommentaryResult {
        let request = CommentaryRequest::from(record);

        match self.source.fetch_commentary(&request).await {
            Ok(result) if !result.text.is_empty() => result,
            Ok(_) => CommentaryResult::fallback(),
            Err(err) => {
                tracing::debug!(error = %err, "commentary unavailable, using fallback");
                CommentaryResult::fallback()
            }
        }
    }
}
