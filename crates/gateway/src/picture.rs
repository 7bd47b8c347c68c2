//! Picture Gateway: forwards a date to the upstream provider and collapses
//! every failure into [`FetchError::PictureFetchFailed`].

use std::sync::Arc;

use apod_core::{FetchError, PictureRecord};

use crate::upstream::PictureUpstream;

pub struct PictureGateway {
    upstream: Arc<dyn PictureUpstream>,
}

impl PictureGateway {
    pub fn new(upstream: Arc<dyn PictureUpstream>) -> Self {
        PictureGateway { upstream }
    }

    /// One upstream call, no retry, no cache.
    pub async fn fetch_picture(&self, date: Option<&str>) -> Result<PictureRecord, FetchError> {
        match self.upstream.fetch_picture(date).await {
            Ok(record) => {
                tracing::info!(date = ?date, record_date = %record.date, "picture fetched");
                Ok(record)
            }
            Err(err) => {
                tracing::warn!(date = ?date, error = %err, "upstream picture fetch failed");
                Err(FetchError::PictureFetchFailed)
            }
        }
    }
}
