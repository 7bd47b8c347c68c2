//! Picture-of-the-day records and commentary payloads.
//!
//! Field names on the wire follow the upstream provider (`media_type`,
//! `hdurl`), so the gateway can forward a normalized record without a
//! second representation.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::date::{iso_date, rfc3339};

/// Kind of media a record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// One astronomy-picture-of-the-day entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureRecord {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    pub url: String,
    #[serde(rename = "hdurl", default, skip_serializing_if = "Option::is_none")]
    pub hd_url: Option<String>,
}

impl PictureRecord {
    /// Whether `url` can be rendered as an image.
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }
}

/// Subject of a commentary request, derived from the current record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryRequest {
    pub subject_title: String,
    pub subject_description: String,
}

impl From<&PictureRecord> for CommentaryRequest {
    fn from(record: &PictureRecord) -> Self {
        CommentaryRequest {
            subject_title: record.title.clone(),
            subject_description: record.explanation.clone(),
        }
    }
}

/// Generated commentary for the picture currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryResult {
    pub text: String,
    #[serde(with = "rfc3339")]
    pub generated_at: OffsetDateTime,
}

impl CommentaryResult {
    /// Commentary stamped with the current time.
    pub fn now(text: impl Into<String>) -> Self {
        CommentaryResult {
            text: text.into(),
            generated_at: OffsetDateTime::now_utc(),
        }
    }

    /// The fixed fallback shown when no poem could be produced.
    pub fn fallback() -> Self {
        Self::now(crate::FALLBACK_COMMENTARY)
    }

    pub fn is_fallback(&self) -> bool {
        self.text == crate::FALLBACK_COMMENTARY
    }
}
