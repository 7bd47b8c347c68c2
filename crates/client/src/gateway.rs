//! HTTP client for the gateway's `/api/apod` and `/api/commentary` routes.

use std::time::Duration;

use async_trait::async_trait;
use time::Date;

use apod_core::date::format_iso_date;
use apod_core::http::{agent, classify, join_url, run_blocking};
use apod_core::{
    CommentaryRequest, CommentaryResult, CommentarySource, FetchError, PictureRecord,
    PictureSource,
};

/// Speaks to the gateway; holds no upstream credential.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    agent: ureq::Agent,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        GatewayClient {
            base_url: base_url.into(),
            agent: agent(timeout),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PictureSource for GatewayClient {
    async fn fetch_picture(&self, date: Option<Date>) -> Result<PictureRecord, FetchError> {
        let url = join_url(&self.base_url, "api/apod");
        let date = date.map(format_iso_date);
        let agent = self.agent.clone();

        run_blocking(move || {
            let mut request = agent.get(&url);
            if let Some(ref date) = date {
                request = request.query("date", date);
            }
            let response = request.call().map_err(classify)?;
            response
                .into_body()
                .read_json::<PictureRecord>()
                .map_err(classify)
        })
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "picture request to gateway failed");
            FetchError::PictureFetchFailed
        })
    }
}

#[async_trait]
impl CommentarySource for GatewayClient {
    async fn fetch_commentary(
        &self,
        request: &CommentaryRequest,
    ) -> Result<CommentaryResult, FetchError> {
        let url = join_url(&self.base_url, "api/commentary");
        let body = request.clone();
        let agent = self.agent.clone();

        run_blocking(move || {
            let response = agent.post(&url).send_json(&body).map_err(classify)?;
            response
                .into_body()
                .read_json::<CommentaryResult>()
                .map_err(classify)
        })
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "commentary request to gateway failed");
            FetchError::CommentaryFetchFailed
        })
    }
}
