//! Handler for the `/open-modal` slash command.
//!
//! The whole command invocation is serialized into the modal's
//! `private_metadata`; Slack does not otherwise tie the later
//! `view_submission` back to the command, and the submission handler needs
//! the command's `response_url`.

use tracing::info;

use crate::core::models::Outbound;
use crate::errors::SlackError;
use crate::slack::command_parser::SlackCommandEvent;
use crate::slack::modal_builder::build_leave_request_modal;

/// Slash command that opens the leave request modal.
pub const OPEN_MODAL_COMMAND: &str = "/open-modal";

/// Build the `views.open` effect for a slash command invocation.
///
/// # Errors
///
/// Returns an error if the invocation cannot be stored in `private_metadata`
/// (serialization failure or Slack's size limit).
pub fn handle_open_modal(command: &SlackCommandEvent) -> Result<Vec<Outbound>, SlackError> {
    let private_metadata = command.to_private_metadata()?;

    info!(
        user_id = %command.user_id,
        channel_id = %command.channel_id,
        "Opening leave request modal"
    );

    Ok(vec![Outbound::OpenView {
        trigger_id: command.trigger_id.clone(),
        view: build_leave_request_modal(&private_metadata),
    }])
}
