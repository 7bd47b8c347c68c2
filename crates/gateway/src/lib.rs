//! apod-gateway: the server-side half of the APOD explorer.
//!
//! Holds both upstream credentials and exposes two proxy routes:
//!
//! - `GET  /api/apod?date=YYYY-MM-DD` -- picture of the day via [`PictureGateway`]
//! - `POST /api/commentary`           -- a short poem via [`CommentaryGenerator`]
//!
//! Nothing that reaches a caller carries upstream error detail; failures are
//! logged with `tracing` and collapsed into [`apod_core::FetchError`].

pub mod commentary;
pub mod config;
pub mod picture;
pub mod serve;
pub mod upstream;

pub use commentary::CommentaryGenerator;
pub use config::{ConfigError, GatewayConfig};
pub use picture::PictureGateway;
pub use serve::{router, start_server, AppState};
