use serde_json::{Value, json};

use crate::core::models::LeaveType;

/// `callback_id` of the leave request modal; submissions are routed on it.
pub const LEAVE_REQUEST_CALLBACK_ID: &str = "task-modal";

pub const DATE_BLOCK_ID: &str = "input-date";
pub const TYPE_BLOCK_ID: &str = "input-type";
pub const REASON_BLOCK_ID: &str = "input-reason";

/// Every input element in the modal shares this `action_id`.
pub const INPUT_ACTION_ID: &str = "input";

fn plain_text(text: &str) -> Value {
    json!({ "type": "plain_text", "text": text, "emoji": true })
}

fn leave_type_option(leave_type: LeaveType) -> Value {
    json!({
        "text": plain_text(leave_type.label()),
        "value": leave_type.code()
    })
}

/// Build the Block Kit modal for a leave request (休暇申請).
///
/// Three required inputs:
/// - `input-date` datepicker
/// - `input-type` static select over [`LeaveType`]
/// - `input-reason` multiline text
///
/// `private_metadata` is attached verbatim and comes back on `view_submission`.
#[must_use]
pub fn build_leave_request_modal(private_metadata: &str) -> Value {
    let options: Vec<Value> = LeaveType::ALL.into_iter().map(leave_type_option).collect();

    let blocks = vec![
        json!({
            "block_id": DATE_BLOCK_ID,
            "type": "input",
            "element": {
                "action_id": INPUT_ACTION_ID,
                "type": "datepicker",
                "placeholder": plain_text("休暇を取得する日を選択")
            },
            "label": plain_text("取得日：")
        }),
        json!({
            "block_id": TYPE_BLOCK_ID,
            "type": "input",
            "element": {
                "action_id": INPUT_ACTION_ID,
                "type": "static_select",
                "placeholder": plain_text("休暇の種別を選択"),
                "options": options
            },
            "label": plain_text("休暇種別：")
        }),
        json!({
            "block_id": REASON_BLOCK_ID,
            "type": "input",
            "element": {
                "action_id": INPUT_ACTION_ID,
                "type": "plain_text_input",
                "multiline": true
            },
            "label": plain_text("取得理由：")
        }),
    ];

    json!({
        "type": "modal",
        "callback_id": LEAVE_REQUEST_CALLBACK_ID,
        "private_metadata": private_metadata,
        "title": plain_text("休暇申請"),
        "submit": plain_text("送信"),
        "close": plain_text("キャンセル"),
        "blocks": blocks
    })
}
