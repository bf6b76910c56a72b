//! Response-related utilities for Slack interactions.
//!
//! This module provides standardized ways to create and format
//! responses sent to Slack.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::models::LeaveRequest;

/// Visibility of a message posted through a `response_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Only the invoking user sees the message.
    #[default]
    Ephemeral,
    InChannel,
}

/// Create a JSON payload for an ephemeral response
///
/// Ephemeral messages are only visible to the user who triggered the command.
///
/// # Examples
///
/// ```
/// use leavebot::slack::response_builder::create_ephemeral_payload;
///
/// let payload = create_ephemeral_payload("This message is only visible to you");
/// assert_eq!(payload["response_type"], "ephemeral");
/// ```
#[must_use]
pub fn create_ephemeral_payload(text: &str) -> Value {
    json!({
        "text": text,
        "response_type": ResponseType::Ephemeral
    })
}

/// Plain-text rendering of a leave request, used as the notification fallback.
#[must_use]
pub fn leave_request_fallback_text(request: &LeaveRequest) -> String {
    format!(
        "[fallback] 休暇を申請しました\n取得日：{}\n休暇種別：{}\n取得理由：{}",
        request.date, request.leave_type, request.reason
    )
}

/// Build the message relayed to the slash command's `response_url` after a
/// leave request is submitted.
#[must_use]
pub fn build_leave_request_message(request: &LeaveRequest, response_type: ResponseType) -> Value {
    json!({
        "response_type": response_type,
        "text": leave_request_fallback_text(request),
        "blocks": [
            {
                "type": "section",
                "text": { "type": "mrkdwn", "text": "*休暇を申請しました！！*" }
            },
            {
                "type": "section",
                "fields": [
                    { "type": "mrkdwn", "text": format!("*取得日：* {}", request.date) },
                    { "type": "mrkdwn", "text": format!("*休暇種別：* {}", request.leave_type) },
                    { "type": "mrkdwn", "text": format!("*取得理由：* {}", request.reason) }
                ]
            }
        ]
    })
}

/// Text acknowledged back to the user when `views.open` fails.
#[must_use]
pub fn open_modal_failure_text(code: &str) -> String {
    format!(":x: Failed to open a modal due to *{code}* ...")
}
