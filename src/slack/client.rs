//! Slack Web API client module
//!
//! Covers the two Web API methods the bot calls: `chat.postMessage` and `views.open`.
//! No retries; a failed call is reported once to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent};
use std::sync::LazyLock;
use tracing::debug;

use crate::errors::SlackError;

static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

/// Web API surface used by the effect executor. Implemented by [`SlackClient`]
/// and by test doubles.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Post a plain-text message to a channel.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), SlackError>;

    /// Open a modal for `trigger_id`, returning Slack's response body.
    async fn open_view(&self, trigger_id: &str, view: &Value) -> Result<Value, SlackError>;
}

/// Bot-token authenticated Slack Web API client.
pub struct SlackClient {
    token: SlackApiToken,
    api_base_url: String,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String, api_base_url: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            api_base_url,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base_url)
    }

    async fn call<B: Serialize + Sync>(&self, method: &str, body: &B) -> Result<Value, SlackError> {
        let resp = HTTP_CLIENT
            .post(self.method_url(method))
            .bearer_auth(&self.token.token_value.0)
            .json(body)
            .send()
            .await
            .map_err(|e| SlackError::HttpError(format!("{method}: {e}")))?;

        if !resp.status().is_success() {
            return Err(SlackError::ApiError(format!(
                "{method} HTTP {}",
                resp.status()
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SlackError::ApiError(format!("{method} JSON parse error: {e}")))?;

        if body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            Ok(body)
        } else {
            Err(SlackError::PlatformError {
                method: method.to_string(),
                code: body
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            })
        }
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack returns `ok: false`.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), SlackError> {
        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        );

        self.call("chat.postMessage", &post_req).await?;
        debug!(channel_id = %channel_id, "chat.postMessage succeeded");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack returns `ok: false`.
    async fn open_view(&self, trigger_id: &str, view: &Value) -> Result<Value, SlackError> {
        let payload = json!({
            "trigger_id": trigger_id,
            "view": view
        });

        self.call("views.open", &payload).await
    }
}
