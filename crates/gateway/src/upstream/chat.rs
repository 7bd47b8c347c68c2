//! Chat-completions upstream (OpenRouter / OpenAI-compatible).

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use apod_core::http::{agent, classify, join_url, run_blocking};
use apod_core::UpstreamError;

use super::TextProvider;

// ── Request / Response types ─────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Bearer-authenticated client for `POST {base}/chat/completions`.
pub struct ChatCompletionsClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    agent: ureq::Agent,
}

impl ChatCompletionsClient {
    /// Without an `api_key` every call fails with
    /// [`UpstreamError::MissingCredential`] and no request is sent.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        ChatCompletionsClient {
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            agent: agent(timeout),
        }
    }
}

impl fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionsClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

#[async_trait]
impl TextProvider for ChatCompletionsClient {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<Option<String>, UpstreamError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or(UpstreamError::MissingCredential("text provider"))?;

        let url = join_url(&self.base_url, "chat/completions");
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            max_tokens,
        };
        let agent = self.agent.clone();

        run_blocking(move || {
            let response = agent
                .post(&url)
                .header("Authorization", &format!("Bearer {}", api_key))
                .header("Content-Type", "application/json")
                .send_json(&body)
                .map_err(classify)?;

            let parsed: ChatResponse = response.into_body().read_json().map_err(classify)?;
            Ok(parsed.first_content())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> Option<String> {
        serde_json::from_value::<ChatResponse>(body)
            .unwrap()
            .first_content()
    }

    #[test]
    fn first_choice_content_is_taken_verbatim() {
        let body = serde_json::json!({
            "id": "gen-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  Stars drift\nin dust  "}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        });
        assert_eq!(parse(body).as_deref(), Some("  Stars drift\nin dust  "));
    }

    #[test]
    fn empty_choices_yield_none() {
        assert_eq!(parse(serde_json::json!({"choices": []})), None);
    }

    #[test]
    fn missing_message_or_content_yields_none() {
        assert_eq!(parse(serde_json::json!({"choices": [{}]})), None);
        assert_eq!(
            parse(serde_json::json!({"choices": [{"message": {"role": "assistant"}}]})),
            None
        );
        assert_eq!(
            parse(serde_json::json!({"choices": [{"message": {"content": null}}]})),
            None
        );
    }

    #[test]
    fn request_body_has_one_user_turn() {
        let body = ChatRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hello".to_string(),
            }],
            max_tokens: 100,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "hello"}],
                "max_tokens": 100
            })
        );
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let client = ChatCompletionsClient::new(
            "http://127.0.0.1:9",
            None,
            "gpt-3.5-turbo",
            Duration::from_secs(1),
        );
        let result = client.complete("anything", 100).await;
        assert_eq!(
            result,
            Err(UpstreamError::MissingCredential("text provider"))
        );
    }

    #[test]
    fn debug_output_hides_the_key() {
        let client = ChatCompletionsClient::new(
            "https://openrouter.ai/api/v1",
            Some("sk-or-secret".to_string()),
            "gpt-3.5-turbo",
            Duration::from_secs(1),
        );
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("sk-or-secret"));
        assert!(rendered.contains("has_api_key: true"));
    }
}
