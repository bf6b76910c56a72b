//! Response builders for acknowledging Slack requests.
//!
//! Slack expects every request to be answered within three seconds; an [`Ack`]
//! is the one answer a dispatched request produces.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};

use crate::slack::response_builder::create_ephemeral_payload;

/// Body returned by the health-check route.
pub const HEALTH_BODY: &str = "Leave request bot is running!";

/// The acknowledgment sent back for one inbound request.
#[derive(Debug, Clone, PartialEq)]
pub enum Ack {
    /// Plain 200; closes a submitted modal.
    Empty,
    /// 200 with an ephemeral message to the invoking user.
    Ephemeral(String),
    /// Echo for Events API URL verification.
    Challenge(String),
    /// Keep the modal open and show errors next to the given blocks.
    ViewErrors(Map<String, Value>),
    /// Non-200 response with an error body.
    Failure { status: u16, message: String },
}

impl IntoResponse for Ack {
    fn into_response(self) -> Response {
        match self {
            Ack::Empty => ok_empty(),
            Ack::Ephemeral(text) => ok_ephemeral(&text),
            Ack::Challenge(challenge) => Json(json!({ "challenge": challenge })).into_response(),
            Ack::ViewErrors(errors) => ok_modal_errors(&errors),
            Ack::Failure { status, message } => err_response(status, &message),
        }
    }
}

/// Returns a 200 OK response with an empty body.
#[must_use]
pub fn ok_empty() -> Response {
    StatusCode::OK.into_response()
}

/// Returns a 200 OK response with an ephemeral Slack message.
#[must_use]
pub fn ok_ephemeral(text: &str) -> Response {
    Json(create_ephemeral_payload(text)).into_response()
}

/// Returns a 200 OK response with modal validation errors.
#[must_use]
pub fn ok_modal_errors(errors: &Map<String, Value>) -> Response {
    Json(json!({ "response_action": "errors", "errors": errors })).into_response()
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": message }))).into_response()
}
