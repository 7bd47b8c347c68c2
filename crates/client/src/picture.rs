//! Picture Client: loads a record for a date and correlates each load with
//! a monotonically increasing [`RequestToken`].
//!
//! Only the most recently issued token is current. Results carrying an
//! older token are stale and must not touch state.

use std::future::Future;
use std::sync::Arc;

use time::Date;

use apod_core::{FetchError, PictureRecord, PictureSource, RequestState};

/// Correlates an async result with the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues tokens and remembers which one is current.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token; every earlier token becomes stale.
    pub fn next(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Make every issued token stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

pub struct PictureClient {
    source: Arc<dyn PictureSource>,
    sequence: RequestSequence,
}

impl PictureClient {
    pub fn new(source: Arc<dyn PictureSource>) -> Self {
        PictureClient {
            source,
            sequence: RequestSequence::new(),
        }
    }

    /// Fetch and validate one record. `None` asks for today's picture.
    ///
    /// Resolves to `Success` only when the record's date matches the
    /// requested one; any mismatch or gateway failure is
    /// `Failed(PictureFetchFailed)`.
    pub async fn load_picture(&self, date: Option<Date>) -> RequestState<PictureRecord> {
        resolve(Arc::clone(&self.source), date).await
    }

    /// Start a load that can outlive `&self`, paired with its token.
    pub fn begin(
        &mut self,
        date: Option<Date>,
    ) -> (
        RequestToken,
        impl Future<Output = RequestState<PictureRecord>> + Send + 'static,
    ) {
        let token = self.sequence.next();
        (token, resolve(Arc::clone(&self.source), date))
    }

    /// Whether a result for `token` may still update state.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.sequence.is_current(token)
    }
}

async fn resolve(source: Arc<dyn PictureSource>, date: Option<Date>) -> RequestState<PictureRecord> {
    match source.fetch_picture(date).await {
        Ok(record) => match date {
            Some(requested) if record.date != requested => {
                tracing::warn!(
                    requested = %requested,
                    received = %record.date,
                    "gateway returned a record for a different date"
                );
                RequestState::Failed(FetchError::PictureFetchFailed)
            }
            _ => RequestState::Success(record),
        },
        Err(_) => RequestState::Failed(FetchError::PictureFetchFailed),
    }
}
