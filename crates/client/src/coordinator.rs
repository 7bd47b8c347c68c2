//! View Coordinator: owns the composed view state and sequences the picture
//! and commentary fetches.
//!
//! Actions ([`ViewCoordinator::select_date`],
//! [`ViewCoordinator::request_commentary`]) update state synchronously and
//! spawn the network work. Results come back through
//! [`ViewCoordinator::next_completion`], which is the only place async
//! results are folded into state. A result whose token is no longer current
//! is dropped there. A task that panics resolves the same way its request
//! would have failed.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use time::Date;
use tokio::task::{self, JoinSet};

use apod_core::{
    CommentaryResult, CommentarySource, FetchError, PictureRecord, PictureSource, RequestState,
};

use crate::commentary::CommentaryClient;
use crate::picture::{PictureClient, RequestSequence, RequestToken};

/// Everything presentation needs to render one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub picture: RequestState<PictureRecord>,
    pub commentary: RequestState<CommentaryResult>,
    /// `None` means today.
    pub selected_date: Option<Date>,
}

/// A finished piece of async work, tagged with the token it was issued under.
enum Completion {
    Picture {
        token: RequestToken,
        state: RequestState<PictureRecord>,
    },
    Commentary {
        token: RequestToken,
        result: CommentaryResult,
    },
}

/// What a spawned task was doing, kept so a panicked task can still resolve.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Picture(RequestToken),
    Commentary(RequestToken),
}

impl Pending {
    fn failed(self) -> Completion {
        match self {
            Pending::Picture(token) => Completion::Picture {
                token,
                state: RequestState::Failed(FetchError::PictureFetchFailed),
            },
            Pending::Commentary(token) => Completion::Commentary {
                token,
                result: CommentaryResult::fallback(),
            },
        }
    }
}

pub struct ViewCoordinator {
    pictures: PictureClient,
    commentary: CommentaryClient,
    commentary_sequence: RequestSequence,
    state: ViewState,
    in_flight: JoinSet<Completion>,
    pending: HashMap<task::Id, Pending>,
}

impl ViewCoordinator {
    pub fn new(pictures: Arc<dyn PictureSource>, commentary: Arc<dyn CommentarySource>) -> Self {
        ViewCoordinator {
            pictures: PictureClient::new(pictures),
            commentary: CommentaryClient::new(commentary),
            commentary_sequence: RequestSequence::new(),
            state: ViewState::default(),
            in_flight: JoinSet::new(),
            pending: HashMap::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Select a date (`None` for today) and start loading its picture.
    ///
    /// Commentary is cleared immediately, before the picture arrives, and any
    /// commentary still in flight is made stale.
    pub fn select_date(&mut self, date: Option<Date>) {
        self.state.selected_date = date;
        self.state.picture = RequestState::Loading;
        self.clear_commentary();

        let (token, load) = self.pictures.begin(date);
        tracing::debug!(?date, ?token, "picture load started");
        self.spawn(Pending::Picture(token), async move {
            Completion::Picture {
                token,
                state: load.await,
            }
        });
    }

    /// Ask for commentary on the current picture.
    ///
    /// No-op (returns `false`) unless the picture loaded successfully and is
    /// an image, and no commentary request is already pending.
    pub fn request_commentary(&mut self) -> bool {
        if self.state.commentary.is_loading() {
            return false;
        }
        let record = match self.state.picture.success() {
            Some(record) if record.is_image() => record.clone(),
            _ => return false,
        };

        self.state.commentary = RequestState::Loading;
        let token = self.commentary_sequence.next();
        let client = self.commentary.clone();
        self.spawn(Pending::Commentary(token), async move {
            Completion::Commentary {
                token,
                result: client.generate_commentary(&record).await,
            }
        });
        true
    }

    /// Whether any spawned work has not been folded into state yet.
    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Wait for the next finished fetch and fold it into state.
    ///
    /// Returns `false` when nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        match self.in_flight.join_next_with_id().await {
            Some(Ok((id, completion))) => {
                self.pending.remove(&id);
                self.apply(completion);
                true
            }
            Some(Err(err)) => {
                tracing::error!(error = %err, "fetch task did not complete");
                if let Some(pending) = self.pending.remove(&err.id()) {
                    self.apply(pending.failed());
                }
                true
            }
            None => false,
        }
    }

    /// Drain every in-flight fetch.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    fn spawn<F>(&mut self, pending: Pending, work: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let handle = self.in_flight.spawn(work);
        self.pending.insert(handle.id(), pending);
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Picture { token, state } => {
                if !self.pictures.is_current(token) {
                    tracing::debug!(?token, "discarding stale picture result");
                    return;
                }
                if state.success().is_some() {
                    self.clear_commentary();
                }
                self.state.picture = state;
            }
            Completion::Commentary { token, result } => {
                if !self.commentary_sequence.is_current(token) {
                    tracing::debug!(?token, "discarding stale commentary result");
                    return;
                }
                self.state.commentary = RequestState::Success(result);
            }
        }
    }

    fn clear_commentary(&mut self) {
        self.state.commentary = RequestState::Idle;
        self.commentary_sequence.invalidate();
    }
}
