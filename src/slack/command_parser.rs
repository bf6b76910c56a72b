use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::SlackError;

/// Slack's documented limit for a view's `private_metadata`.
pub const PRIVATE_METADATA_LIMIT: usize = 3000;

/// Structure representing a Slack slash command invocation.
/// This contains all the fields that Slack sends when a user invokes a slash command.
///
/// The whole invocation is carried through the modal's `private_metadata` so the
/// submission handler can recover the `response_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlackCommandEvent {
    pub token: String,
    pub team_id: String,
    pub team_domain: String,
    pub channel_id: String,
    pub channel_name: String,
    pub user_id: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
    pub trigger_id: String,
    pub command_ts: String,
}

impl SlackCommandEvent {
    /// Serialize the invocation for a view's `private_metadata`.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ParseError` if serialization fails and
    /// `SlackError::MetadataTooLong` if the result exceeds [`PRIVATE_METADATA_LIMIT`].
    pub fn to_private_metadata(&self) -> Result<String, SlackError> {
        let json = serde_json::to_string(self)?;
        let len = json.chars().count();
        if len > PRIVATE_METADATA_LIMIT {
            return Err(SlackError::MetadataTooLong(len));
        }
        Ok(json)
    }

    /// Recover an invocation previously stored with [`Self::to_private_metadata`].
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ParseError` if the metadata is not a JSON object or
    /// carries no `response_url`.
    pub fn from_private_metadata(metadata: &str) -> Result<Self, SlackError> {
        let command: SlackCommandEvent = serde_json::from_str(metadata)
            .map_err(|e| SlackError::ParseError(format!("Invalid private_metadata: {e}")))?;
        if command.response_url.is_empty() {
            return Err(SlackError::ParseError(
                "private_metadata has no response_url".to_string(),
            ));
        }
        Ok(command)
    }
}

/// Decodes URL encoded string using percent_encoding crate
///
/// # Examples
///
/// ```
/// use leavebot::slack::command_parser::decode_url_component;
///
/// let decoded_plus = decode_url_component("hello+world").unwrap();
/// assert_eq!(decoded_plus, "hello world");
/// ```
///
/// # Errors
///
/// Returns an error message if the decoded bytes are not valid UTF-8.
pub fn decode_url_component(input: &str) -> Result<String, String> {
    // '+' must become a space before percent-decoding so an encoded "%2B" survives.
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.to_string())
        .map_err(|e| format!("Failed to decode URL component: {e}"))
}

/// Parses URL-encoded form data into a SlackCommandEvent structure.
///
/// Missing fields are left empty.
///
/// # Examples
///
/// ```
/// use leavebot::slack::command_parser::parse_form_data;
///
/// let form_data = "token=abc123&team_id=T123&team_domain=example&\
///                  channel_id=C123&channel_name=general&user_id=U123&\
///                  user_name=username&command=%2Fopen-modal&text=&\
///                  response_url=https%3A%2F%2Fhooks.slack.com%2F&\
///                  trigger_id=123.456&command_ts=1609753200";
///
/// let event = parse_form_data(form_data).unwrap();
/// assert_eq!(event.command, "/open-modal");
/// assert_eq!(event.channel_name, "general");
/// ```
///
/// # Errors
///
/// Returns an error message if a key or value cannot be decoded.
pub fn parse_form_data(form_data: &str) -> Result<SlackCommandEvent, String> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&') {
        if let Some(idx) = pair.find('=') {
            let key = decode_url_component(&pair[..idx])
                .map_err(|e| format!("Failed to decode key: {e}"))?;
            let value = decode_url_component(&pair[idx + 1..])
                .map_err(|e| format!("Failed to decode value: {e}"))?;
            map.insert(key, value);
        }
    }

    let mut field = |name: &str| map.remove(name).unwrap_or_default();

    Ok(SlackCommandEvent {
        token: field("token"),
        team_id: field("team_id"),
        team_domain: field("team_domain"),
        channel_id: field("channel_id"),
        channel_name: field("channel_name"),
        user_id: field("user_id"),
        user_name: field("user_name"),
        command: field("command"),
        text: field("text"),
        response_url: field("response_url"),
        trigger_id: field("trigger_id"),
        command_ts: field("command_ts"),
    })
}
