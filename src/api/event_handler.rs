//! Handler for Slack Events API callbacks.
//!
//! Only `app_mention` is handled: the bot greets whoever mentioned it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::models::Outbound;

/// The fields of an `app_mention` event the bot reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMentionEvent {
    pub user: String,
    pub channel: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub ts: String,
}

/// Reply text for a mention of the bot by `user_id`.
#[must_use]
pub fn greeting(user_id: &str) -> String {
    format!(":wave: <@{user_id}> Hi there!")
}

/// Greet the mentioning user in the channel the mention came from.
#[must_use]
pub fn handle_app_mention(event: &AppMentionEvent) -> Vec<Outbound> {
    debug!(
        channel = %event.channel,
        user = %event.user,
        text = %event.text,
        "app_mention event received"
    );

    vec![Outbound::PostMessage {
        channel: event.channel.clone(),
        text: greeting(&event.user),
    }]
}
