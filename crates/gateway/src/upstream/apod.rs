//! Astronomy Picture of the Day upstream: `GET {base}/planetary/apod`.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use apod_core::http::{agent, classify, join_url, run_blocking};
use apod_core::{PictureRecord, UpstreamError};

use super::PictureUpstream;

/// Talks to the upstream provider with the gateway's credential.
///
/// - `api_key` is appended as a query parameter and never leaves the process
///   any other way
/// - `date` is forwarded as-is; the provider rejects future or malformed dates
pub struct ApodUpstream {
    base_url: String,
    api_key: String,
    agent: ureq::Agent,
}

impl ApodUpstream {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        ApodUpstream {
            base_url: base_url.into(),
            api_key: api_key.into(),
            agent: agent(timeout),
        }
    }
}

impl fmt::Debug for ApodUpstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApodUpstream")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PictureUpstream for ApodUpstream {
    async fn fetch_picture(&self, date: Option<&str>) -> Result<PictureRecord, UpstreamError> {
        let url = join_url(&self.base_url, "planetary/apod");
        let api_key = self.api_key.clone();
        let date = date.map(str::to_string);
        let agent = self.agent.clone();

        run_blocking(move || {
            let mut request = agent.get(&url).query("api_key", &api_key);
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
    }
}
