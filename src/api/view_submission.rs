use serde_json::Value;
use tracing::{debug, info};

use super::parsing::v_str;
use crate::core::models::{LeaveRequest, LeaveType, Outbound};
use crate::errors::SlackError;
use crate::slack::command_parser::SlackCommandEvent;
use crate::slack::modal_builder::{
    DATE_BLOCK_ID, INPUT_ACTION_ID, REASON_BLOCK_ID, TYPE_BLOCK_ID,
};
use crate::slack::response_builder::{ResponseType, build_leave_request_message};

/// A `view_submission` interactivity payload, reduced to what routing needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSubmission {
    pub callback_id: String,
    pub user_id: String,
    pub team_id: Option<String>,
    pub view: Value,
}

fn required_str<'a>(view: &'a Value, path: &[&str]) -> Result<&'a str, SlackError> {
    v_str(view, path).ok_or_else(|| {
        SlackError::ParseError(format!("view.{} missing", path.join(".")))
    })
}

/// Read the date, leave type and reason out of `view.state.values`.
///
/// Only presence is checked (plus the leave type being a known code); the
/// date format and reason content are taken as submitted.
///
/// # Errors
///
/// Returns `SlackError::ParseError` if any of the three fields is absent.
pub fn extract_leave_request(view: &Value) -> Result<LeaveRequest, SlackError> {
    let date = required_str(
        view,
        &["state", "values", DATE_BLOCK_ID, INPUT_ACTION_ID, "selected_date"],
    )?;
    let leave_type: LeaveType = required_str(
        view,
        &[
            "state",
            "values",
            TYPE_BLOCK_ID,
            INPUT_ACTION_ID,
            "selected_option",
            "value",
        ],
    )?
    .parse()?;
    let reason = required_str(
        view,
        &["state", "values", REASON_BLOCK_ID, INPUT_ACTION_ID, "value"],
    )?;

    Ok(LeaveRequest {
        date: date.to_string(),
        leave_type,
        reason: reason.to_string(),
    })
}

/// Recover the slash command invocation stored in the view's `private_metadata`.
///
/// # Errors
///
/// Returns `SlackError::ParseError` if the metadata is missing or not an invocation.
pub fn recover_command(view: &Value) -> Result<SlackCommandEvent, SlackError> {
    let metadata = required_str(view, &["private_metadata"])?;
    SlackCommandEvent::from_private_metadata(metadata)
}

/// Turn a leave request submission into the message relayed to the
/// originating command's `response_url`.
///
/// # Errors
///
/// Returns an error if the form values or the stored invocation are missing.
pub fn handle_leave_request_submission(view: &Value) -> Result<Vec<Outbound>, SlackError> {
    debug!(view = %view, "view_submission view payload");

    let request = extract_leave_request(view)?;

    // TODO: persist the request once a storage backend is chosen.
    info!(
        date = %request.date,
        leave_type = %request.leave_type,
        reason = %request.reason,
        "Valid response"
    );

    let command = recover_command(view)?;

    Ok(vec![Outbound::PostToResponseUrl {
        response_url: command.response_url,
        payload: build_leave_request_message(&request, ResponseType::Ephemeral),
    }])
}
