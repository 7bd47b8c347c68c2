//! Application state shared across request handlers.

use std::sync::Arc;

use crate::commentary::CommentaryGenerator;
use crate::config::GatewayConfig;
use crate::picture::PictureGateway;
use crate::upstream::{ApodUpstream, ChatCompletionsClient};

/// Read-only after startup; handlers only borrow it.
pub struct AppState {
    pub pictures: PictureGateway,
    pub commentary: CommentaryGenerator,
}

impl AppState {
    pub fn new(pictures: PictureGateway, commentary: CommentaryGenerator) -> Self {
        AppState {
            pictures,
            commentary,
        }
    }

    /// Wire the real upstream clients from configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let pictures = ApodUpstream::new(
            config.upstream_url.clone(),
            config.picture_api_key.clone(),
            config.timeout,
        );
        let text = ChatCompletionsClient::new(
            config.text_url.clone(),
            config.text_api_key.clone(),
            config.text_model.clone(),
            config.timeout,
        );

        AppState::new(
            PictureGateway::new(Arc::new(pictures)),
            CommentaryGenerator::new(Arc::new(text)),
        )
    }
}
