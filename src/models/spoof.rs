use crate::models::error::SubmitError;
use serde::{Deserialize, Serialize};

/// Server part the upstream expects on bare user ids.
const DEFAULT_USER_SERVER: &str = "@s.whatsapp.net";

/// Placeholder message id: tells the upstream to fabricate the quoted message
/// instead of quoting a real one.
const PLACEHOLDER_MESSAGE_ID: &str = "!";

/// The raw submission form, field names matching the panel page inputs.
#[derive(Deserialize, Debug)]
pub struct SpoofForm {
    pub cid: String,
    pub sid: String,
    pub spf_msg: String,
    pub rpl_msg: String,
}

/// Wire payload for the upstream `/send-spoofed` endpoint. Built fresh per
/// submission, never stored.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SpoofRequest {
    pub chat_id: String,
    pub spoofed_id: String,
    pub message_id: String,
    pub spoofed_message: String,
    pub reply_message: String,
}

/// Wire response of `/send-spoofed`. The `message` text is shown verbatim,
/// whether the upstream reports success or failure.
#[derive(Serialize, Deserialize, Debug)]
pub struct SpoofResponse {
    pub message: String,
}

impl SpoofForm {
    /// All four fields must be non-empty, untrimmed. The chat id gets
    /// qualified with the default user server when it carries no server part;
    /// the spoofed id is relayed exactly as typed.
    pub fn into_request(self) -> Result<SpoofRequest, SubmitError> {
        if self.cid.is_empty()
            || self.sid.is_empty()
            || self.spf_msg.is_empty()
            || self.rpl_msg.is_empty()
        {
            return Err(SubmitError::MissingFields);
        }

        Ok(SpoofRequest {
            chat_id: qualify_user_id(self.cid),
            spoofed_id: self.sid,
            message_id: PLACEHOLDER_MESSAGE_ID.to_owned(),
            spoofed_message: self.spf_msg,
            reply_message: self.rpl_msg,
        })
    }
}

fn qualify_user_id(id: String) -> String {
    if id.contains('@') {
        id
    } else {
        format!("{id}{DEFAULT_USER_SERVER}")
    }
}
