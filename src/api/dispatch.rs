//! Routes a verified inbound event to its handler, runs the resulting effects
//! and decides the acknowledgment.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use super::context::AppContext;
use super::event_handler::{AppMentionEvent, handle_app_mention};
use super::helpers::Ack;
use super::slash_handler::{OPEN_MODAL_COMMAND, handle_open_modal};
use super::view_submission::{ViewSubmission, handle_leave_request_submission};
use crate::slack::command_parser::SlackCommandEvent;
use crate::slack::modal_builder::{LEAVE_REQUEST_CALLBACK_ID, REASON_BLOCK_ID};
use crate::slack::response_builder::open_modal_failure_text;

/// Shown under the reason field when the confirmation could not be delivered.
pub const RELAY_FAILURE_MESSAGE: &str =
    "申請内容を送信できませんでした。時間をおいて再度お試しください。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    UrlVerification,
    AppMention,
    SlashCommand,
    ViewSubmission,
    Unsupported,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::UrlVerification => "url_verification",
            EventKind::AppMention => "app_mention",
            EventKind::SlashCommand => "slash_command",
            EventKind::ViewSubmission => "view_submission",
            EventKind::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    UrlVerification { challenge: String },
    AppMention(AppMentionEvent),
    SlashCommand(SlackCommandEvent),
    ViewSubmission(ViewSubmission),
    Unsupported { kind: String },
}

impl InboundEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            InboundEvent::UrlVerification { .. } => EventKind::UrlVerification,
            InboundEvent::AppMention(_) => EventKind::AppMention,
            InboundEvent::SlashCommand(_) => EventKind::SlashCommand,
            InboundEvent::ViewSubmission(_) => EventKind::ViewSubmission,
            InboundEvent::Unsupported { .. } => EventKind::Unsupported,
        }
    }
}

/// Dispatch one inbound event and produce exactly one acknowledgment.
pub async fn dispatch(ctx: Arc<AppContext>, event: InboundEvent) -> Ack {
    match event {
        InboundEvent::UrlVerification { challenge } => Ack::Challenge(challenge),
        InboundEvent::AppMention(mention) => on_app_mention(ctx, &mention),
        InboundEvent::SlashCommand(command) => on_slash_command(&ctx, &command).await,
        InboundEvent::ViewSubmission(submission) => on_view_submission(&ctx, &submission).await,
        InboundEvent::Unsupported { kind } => {
            debug!(kind = %kind, "Ignoring unsupported Slack request");
            Ack::Empty
        }
    }
}

/// Events are acknowledged immediately; the reply is sent from a spawned task.
fn on_app_mention(ctx: Arc<AppContext>, mention: &AppMentionEvent) -> Ack {
    let effects = handle_app_mention(mention);
    tokio::spawn(async move {
        ctx.executor.execute_all(&effects).await;
    });
    Ack::Empty
}

async fn on_slash_command(ctx: &AppContext, command: &SlackCommandEvent) -> Ack {
    if command.command != OPEN_MODAL_COMMAND {
        warn!(command = %command.command, "Unsupported slash command");
        return Ack::Ephemeral(format!("Unsupported command: {}", command.command));
    }

    let effects = match handle_open_modal(command) {
        Ok(effects) => effects,
        Err(e) => {
            error!("views.open not attempted: {}", e);
            return Ack::Ephemeral(open_modal_failure_text(e.code()));
        }
    };

    for outcome in ctx.executor.execute_all(&effects).await {
        if let Err(e) = outcome {
            error!("views.open error: {}", e);
            return Ack::Ephemeral(open_modal_failure_text(e.code()));
        }
    }
    Ack::Empty
}

async fn on_view_submission(ctx: &AppContext, submission: &ViewSubmission) -> Ack {
    if submission.callback_id != LEAVE_REQUEST_CALLBACK_ID {
        warn!(callback_id = %submission.callback_id, "Unknown view callback_id");
        return Ack::Empty;
    }

    let effects = match handle_leave_request_submission(&submission.view) {
        Ok(effects) => effects,
        Err(e) => {
            error!(user_id = %submission.user_id, "Invalid leave request submission: {}", e);
            return Ack::Failure {
                status: 500,
                message: e.to_string(),
            };
        }
    };

    let delivered = ctx
        .executor
        .execute_all(&effects)
        .await
        .iter()
        .all(Result::is_ok);

    if delivered {
        Ack::Empty
    } else {
        let mut errors = Map::new();
        errors.insert(
            REASON_BLOCK_ID.to_string(),
            Value::String(RELAY_FAILURE_MESSAGE.to_string()),
        );
        Ack::ViewErrors(errors)
    }
}
