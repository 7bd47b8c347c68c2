//! Request lifecycle shared by the picture and commentary fetches.

use crate::error::FetchError;

/// Lifecycle of one asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failed(FetchError),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The payload, if the fetch succeeded.
    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if the fetch failed.
    pub fn failure(&self) -> Option<FetchError> {
        match self {
            RequestState::Failed(err) => Some(*err),
            _ => None,
        }
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> From<Result<T, FetchError>> for RequestState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => RequestState::Success(value),
            Err(err) => RequestState::Failed(err),
        }
    }
}
