//! apod-client: the client-side orchestration of the APOD explorer.
//!
//! - [`GatewayClient`] -- HTTP access to the gateway (no credentials here)
//! - [`PictureClient`] -- picture loads correlated by [`RequestToken`]
//! - [`CommentaryClient`] -- best-effort commentary with a fixed fallback
//! - [`ViewCoordinator`] -- owns [`ViewState`] and sequences the two fetches

pub mod commentary;
pub mod config;
pub mod coordinator;
pub mod gateway;
pub mod picture;

pub use commentary::CommentaryClient;
pub use config::ClientConfig;
pub use coordinator::{ViewCoordinator, ViewState};
pub use gateway::GatewayClient;
pub use picture::{PictureClient, RequestSequence, RequestToken};
