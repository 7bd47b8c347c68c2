//! apod-core: shared building blocks for the APOD explorer.
//!
//! Holds everything the gateway and the client agree on:
//!
//! - [`PictureRecord`], [`CommentaryRequest`], [`CommentaryResult`] -- wire/data model
//! - [`RequestState`] -- the Idle/Loading/Success/Failed lifecycle
//! - [`FetchError`] -- the caller-facing error taxonomy, and [`UpstreamError`]
//!   for the detail that is only ever logged
//! - [`PictureSource`], [`CommentarySource`] -- async seams over the network
//! - [`http`] -- `ureq` agent construction and blocking-call offloading

use std::time::Duration;

pub mod date;
pub mod error;
pub mod http;
pub mod model;
pub mod source;
pub mod state;
pub mod text;

pub use error::{FetchError, UpstreamError};
pub use model::{CommentaryRequest, CommentaryResult, MediaType, PictureRecord};
pub use source::{CommentarySource, PictureSource};
pub use state::RequestState;

/// Crate version reported by the gateway's health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timeout applied to every outbound HTTP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Text shown in place of a poem when generation fails or yields nothing.
pub const FALLBACK_COMMENTARY: &str = "No poem generated.";
