//! Posting follow-up messages through a slash command's `response_url`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::errors::SlackError;

#[async_trait]
pub trait ResponseRelay: Send + Sync {
    /// POST `payload` as JSON to `response_url`. A single attempt.
    async fn post(&self, response_url: &str, payload: &Value) -> Result<(), SlackError>;
}

/// `reqwest`-backed relay using the transport's default timeouts.
#[derive(Clone, Default)]
pub struct HttpResponseRelay {
    http: Client,
}

impl HttpResponseRelay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseRelay for HttpResponseRelay {
    /// # Errors
    ///
    /// Returns `SlackError::HttpError` for an unusable URL, a transport failure or
    /// a non-2xx status.
    async fn post(&self, response_url: &str, payload: &Value) -> Result<(), SlackError> {
        let url = Url::parse(response_url)
            .map_err(|e| SlackError::HttpError(format!("Invalid response_url: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SlackError::HttpError(format!(
                "Unsupported response_url scheme: {}",
                url.scheme()
            )));
        }

        let resp = self.http.post(url).json(payload).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(SlackError::HttpError(format!(
                "response_url HTTP {status}: {body}"
            )))
        }
    }
}
