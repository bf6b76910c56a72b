use std::env;

use crate::errors::SlackError;

const DEFAULT_LOG_LEVEL: &str = "debug";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_EVENTS_PATH: &str = "/slack/events";
const DEFAULT_SLACK_API_BASE_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_signing_secret: String,
    pub slack_bot_token: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Dump every verified request (with tokens redacted) at debug level.
    pub request_log_enabled: bool,
    pub port: u16,
    pub events_path: String,
    pub slack_api_base_url: String,
}

impl AppConfig {
    /// Load configuration from a `.env` file (if any) and the process environment.
    ///
    /// Values in `.env` take precedence over variables already set in the environment.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` when a required variable is missing or a
    /// numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, SlackError> {
        dotenvy::dotenv_override().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| SlackError::ConfigError(format!("{key} is not set")))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| SlackError::ConfigError(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            slack_signing_secret: required("SLACK_SIGNING_SECRET")?,
            slack_bot_token: required("SLACK_BOT_TOKEN")?,
            log_level: lookup("SLACK_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or_default(),
            request_log_enabled: lookup("SLACK_REQUEST_LOG_ENABLED").as_deref() == Some("1"),
            port,
            events_path: lookup("SLACK_EVENTS_PATH")
                .unwrap_or_else(|| DEFAULT_EVENTS_PATH.to_string()),
            slack_api_base_url: lookup("SLACK_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SLACK_API_BASE_URL.to_string()),
        })
    }
}
