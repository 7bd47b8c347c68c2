//! Clients for the two upstream providers.
//!
//! Both speak `ureq` inside `spawn_blocking` and report
//! [`UpstreamError`] with full detail; callers decide what to log and what
//! to hide.

pub mod apod;
pub mod chat;

use async_trait::async_trait;

use apod_core::{PictureRecord, UpstreamError};

pub use apod::ApodUpstream;
pub use chat::ChatCompletionsClient;

/// The picture-of-the-day provider.
///
/// `date` is forwarded verbatim; validation is the provider's job.
#[async_trait]
pub trait PictureUpstream: Send + Sync {
    async fn fetch_picture(&self, date: Option<&str>) -> Result<PictureRecord, UpstreamError>;
}

/// A chat-style text-generation provider.
///
/// Sends one user turn and returns the first choice's content, or `None`
/// when the provider answered without any.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32)
        -> Result<Option<String>, UpstreamError>;
}
