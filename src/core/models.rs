use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SlackError;

/// Kind of leave selected in the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    AllDay,
    Am,
    Pm,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::AllDay, LeaveType::Am, LeaveType::Pm];

    /// Option value used in the modal and in the relayed message.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LeaveType::AllDay => "ALL_DAY",
            LeaveType::Am => "AM",
            LeaveType::Pm => "PM",
        }
    }

    /// Human-readable label shown in the select menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LeaveType::AllDay => "全休",
            LeaveType::Am => "午前休",
            LeaveType::Pm => "午後休",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LeaveType {
    type Err = SlackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaveType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| SlackError::ParseError(format!("unknown leave type: {s}")))
    }
}

/// A submitted leave request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub date: String,
    pub leave_type: LeaveType,
    pub reason: String,
}

/// Side effect requested by a handler; executed after the handler returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// `chat.postMessage` into a channel.
    PostMessage { channel: String, text: String },
    /// `views.open` for the given trigger.
    OpenView { trigger_id: String, view: Value },
    /// POST to a slash command's `response_url`.
    PostToResponseUrl { response_url: String, payload: Value },
}

impl Outbound {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Outbound::PostMessage { .. } => "chat.postMessage",
            Outbound::OpenView { .. } => "views.open",
            Outbound::PostToResponseUrl { .. } => "response_url",
        }
    }
}
