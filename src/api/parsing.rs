use axum::http::HeaderMap;
use serde_json::Value;
use tracing::warn;

use super::dispatch::InboundEvent;
use super::event_handler::AppMentionEvent;
use super::view_submission::ViewSubmission;
use crate::errors::SlackError;
use crate::slack::command_parser::{SlackCommandEvent, decode_url_component, parse_form_data};

pub fn is_interactive_body(body: &str) -> bool {
    body.starts_with("payload=") || body.contains("&payload=")
}

/// Extract and JSON-decode the `payload` field of an interactivity request.
///
/// # Errors
///
/// Returns `SlackError::ParseError` if the field is missing or is not JSON.
pub fn parse_interactive_payload(form_body: &str) -> Result<Value, SlackError> {
    for pair in form_body.split('&') {
        if let Some(eq_idx) = pair.find('=') {
            let key = &pair[..eq_idx];
            if key == "payload" {
                let raw_val = &pair[eq_idx + 1..];
                let decoded = decode_url_component(raw_val).map_err(|e| {
                    SlackError::ParseError(format!("Failed to decode payload: {e}"))
                })?;
                let v: Value = serde_json::from_str(&decoded)
                    .map_err(|e| SlackError::ParseError(format!("Invalid JSON payload: {e}")))?;
                return Ok(v);
            }
        }
    }
    Err(SlackError::ParseError("Missing payload field".to_string()))
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// # Errors
///
/// Returns `SlackError::ParseError` if the form body cannot be decoded.
pub fn parse_slack_event(payload: &str) -> Result<SlackCommandEvent, SlackError> {
    parse_form_data(payload)
        .map_err(|e| SlackError::ParseError(format!("Failed to parse form data: {e}")))
}

pub fn get_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Classify a verified request body into one of the inbound event kinds.
///
/// JSON bodies are Events API callbacks, `payload=` form bodies are
/// interactivity requests, and any other form body is a slash command.
///
/// # Errors
///
/// Returns `SlackError::ParseError` when the body matches a known shape but
/// its content cannot be decoded.
pub fn parse_inbound(body: &str) -> Result<InboundEvent, SlackError> {
    if let Ok(json_body) = serde_json::from_str::<Value>(body) {
        return parse_events_api(&json_body);
    }

    if is_interactive_body(body) {
        let payload = parse_interactive_payload(body)?;
        return parse_interactive(&payload);
    }

    parse_slack_event(body).map(InboundEvent::SlashCommand)
}

fn parse_events_api(json_body: &Value) -> Result<InboundEvent, SlackError> {
    match v_str(json_body, &["type"]).unwrap_or("") {
        "url_verification" => {
            let challenge = v_str(json_body, &["challenge"])
                .ok_or_else(|| SlackError::ParseError("url_verification without challenge".into()))?;
            Ok(InboundEvent::UrlVerification {
                challenge: challenge.to_string(),
            })
        }
        "event_callback" => {
            let event = json_body
                .get("event")
                .ok_or_else(|| SlackError::ParseError("event_callback without event".into()))?;
            match v_str(event, &["type"]).unwrap_or("") {
                // Any valid envelope is acked with 200, even if the event itself is malformed.
                "app_mention" => match serde_json::from_value::<AppMentionEvent>(event.clone()) {
                    Ok(mention) => Ok(InboundEvent::AppMention(mention)),
                    Err(e) => {
                        warn!("Malformed app_mention event: {}", e);
                        Ok(InboundEvent::Unsupported {
                            kind: "event_callback/app_mention".to_string(),
                        })
                    }
                },
                other => Ok(InboundEvent::Unsupported {
                    kind: format!("event_callback/{other}"),
                }),
            }
        }
        other => Ok(InboundEvent::Unsupported {
            kind: other.to_string(),
        }),
    }
}

fn parse_interactive(payload: &Value) -> Result<InboundEvent, SlackError> {
    match v_str(payload, &["type"]).unwrap_or("") {
        "view_submission" => {
            let view = payload
                .get("view")
                .cloned()
                .ok_or_else(|| SlackError::ParseError("view_submission without view".into()))?;
            Ok(InboundEvent::ViewSubmission(ViewSubmission {
                callback_id: v_str(&view, &["callback_id"]).unwrap_or("").to_string(),
                user_id: v_str(payload, &["user", "id"]).unwrap_or("").to_string(),
                team_id: v_str(payload, &["team", "id"]).map(ToString::to_string),
                view,
            }))
        }
        other => Ok(InboundEvent::Unsupported {
            kind: format!("interactive/{other}"),
        }),
    }
}
