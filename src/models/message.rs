// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! A single message exchanged between two participants.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::attachment::Attachment;

/// One entry in a conversation's ordered history.
///
/// Field declaration order here is the field order of the persisted
/// document and must stay stable for round-trips. The timestamp is
/// carried in the `dd/MM/yyyy HH:mm:ss` textual form, an empty string
/// when absent; the attachment record is omitted entirely when there is
/// none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub receiver: String,
    #[serde(default, with = "crate::codec::timestamp")]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl Message {
    /// New text message stamped with the current local time.
    ///
    /// Document timestamps are second precision, so the stamp is
    /// truncated to whole seconds and survives a round-trip unchanged.
    pub fn new(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            timestamp: Some(Local::now().naive_local().trunc_subsecs(0)),
            content: Some(content.into()),
            attachment: None,
        }
    }

    /// Attach a file record to the message.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Replace the timestamp, or clear it with `None`.
    pub fn with_timestamp(mut self, timestamp: Option<NaiveDateTime>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
