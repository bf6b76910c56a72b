use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Failed to parse Slack event: {0}")]
    ParseError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Slack API {method} returned error: {code}")]
    PlatformError { method: String, code: String },

    #[error("private_metadata is {0} characters, Slack allows at most 3000")]
    MetadataTooLong(usize),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SlackError {
    /// Short machine-readable code suitable for showing back to the user.
    ///
    /// Platform errors surface Slack's own code (e.g. `invalid_trigger_id`);
    /// everything else maps to a category name.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            SlackError::PlatformError { code, .. } => code,
            SlackError::MetadataTooLong(_) => "private_metadata_too_long",
            SlackError::ParseError(_) => "parse_error",
            SlackError::ApiError(_) => "api_error",
            SlackError::HttpError(_) => "http_error",
            SlackError::ConfigError(_) => "config_error",
        }
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(error: serde_json::Error) -> Self {
        SlackError::ParseError(error.to_string())
    }
}
