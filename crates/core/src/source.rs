//! Async seams between the orchestration logic and the network.
//!
//! The client talks to the gateway through these traits; tests swap in
//! in-memory implementations to control timing and outcomes.

use async_trait::async_trait;
use time::Date;

use crate::error::FetchError;
use crate::model::{CommentaryRequest, CommentaryResult, PictureRecord};

/// Something that can produce the picture of the day for a date.
///
/// `None` means "today" as the provider defines it.
#[async_trait]
pub trait PictureSource: Send + Sync {
    async fn fetch_picture(&self, date: Option<Date>) -> Result<PictureRecord, FetchError>;
}

/// Something that can produce commentary for a picture.
#[async_trait]
pub trait CommentarySource: Send + Sync {
    async fn fetch_commentary(
        &self,
        request: &CommentaryRequest,
    ) -> Result<CommentaryResult, FetchError>;
}
