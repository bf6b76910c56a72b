//! Request dumper for debugging.
//!
//! When `SLACK_REQUEST_LOG_ENABLED=1`, every verified request is logged at
//! debug level with its tokens masked. Dumping never blocks dispatch.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::dispatch::InboundEvent;
use crate::errors::SlackError;

const REDACTED_BOT_TOKEN: &str = "xoxb-***";
const REDACTED_USER_TOKEN: &str = "xoxp-***";
const REDACTED_VERIFICATION_TOKEN: &str = "***";

/// Per-request context handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestContext {
    pub correlation_id: String,
    pub kind: &'static str,
    pub bot_token: String,
    pub user_token: Option<String>,
    pub team_id: Option<String>,
    pub user_id: Option<String>,
    pub channel_id: Option<String>,
    pub body: Value,
}

impl RequestContext {
    /// Build the context for a parsed inbound event.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ParseError` if the event cannot be rendered as JSON.
    pub fn for_event(
        correlation_id: &str,
        bot_token: &str,
        event: &InboundEvent,
    ) -> Result<Self, SlackError> {
        let (team_id, user_id, channel_id, body) = match event {
            InboundEvent::AppMention(mention) => (
                None,
                Some(mention.user.clone()),
                Some(mention.channel.clone()),
                serde_json::to_value(mention)?,
            ),
            InboundEvent::SlashCommand(command) => (
                Some(command.team_id.clone()),
                Some(command.user_id.clone()),
                Some(command.channel_id.clone()),
                serde_json::to_value(command)?,
            ),
            InboundEvent::ViewSubmission(submission) => (
                submission.team_id.clone(),
                Some(submission.user_id.clone()),
                None,
                submission.view.clone(),
            ),
            InboundEvent::UrlVerification { .. } | InboundEvent::Unsupported { .. } => {
                (None, None, None, Value::Null)
            }
        };

        Ok(Self {
            correlation_id: correlation_id.to_string(),
            kind: event.kind().as_str(),
            bot_token: bot_token.to_string(),
            user_token: None,
            team_id,
            user_id,
            channel_id,
            body,
        })
    }

    /// A copy with the bot token, any user token and the body's legacy
    /// verification `token` masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.bot_token = REDACTED_BOT_TOKEN.to_string();
        if copy.user_token.is_some() {
            copy.user_token = Some(REDACTED_USER_TOKEN.to_string());
        }
        if let Some(token) = copy.body.get_mut("token") {
            *token = Value::String(REDACTED_VERIFICATION_TOKEN.to_string());
        }
        copy
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestDumper {
    enabled: bool,
}

impl RequestDumper {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The text that would be logged for `ctx`, or `None` when dumping is off.
    #[must_use]
    pub fn render(&self, ctx: &RequestContext) -> Option<String> {
        if !self.enabled {
            return None;
        }
        match serde_json::to_string_pretty(&ctx.redacted()) {
            Ok(dump) => Some(dump),
            Err(e) => {
                warn!("Failed to render request dump: {}", e);
                None
            }
        }
    }

    pub fn dump(&self, ctx: &RequestContext) {
        if let Some(dump) = self.render(ctx) {
            debug!("Dumping request data for debugging...\n\n{}\n", dump);
        }
    }
}
