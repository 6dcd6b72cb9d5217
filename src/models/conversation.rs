// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Conversations and their canonical pair keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::message::Message;

/// Canonical identifier for the conversation between two participants.
///
/// The two ids are sorted lexicographically at construction, so the key
/// and the backing document name are independent of argument order:
/// `ConversationKey::new(a, b) == ConversationKey::new(b, a)`. Identity
/// questions about conversations go through this key rather than through
/// an order-insensitive equality on the conversation itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationKey {
    first: String,
    second: String,
}

impl ConversationKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    /// File stem of the backing document: `<first>_<second>`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.first, self.second)
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.first, self.second)
    }
}

/// The ordered message history between exactly two participants.
///
/// Messages stay in insertion order; the store treats that order as
/// chronological and never re-sorts by timestamp. The participants are
/// stored in the order the conversation was created with (first sender,
/// first receiver); [`Conversation::key`] gives the order-independent
/// identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub participant_a: String,
    pub participant_b: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Empty conversation between two participants.
    pub fn new(participant_a: impl Into<String>, participant_b: impl Into<String>) -> Self {
        Self {
            participant_a: participant_a.into(),
            participant_b: participant_b.into(),
            messages: Vec::new(),
        }
    }

    /// Canonical key, independent of the stored participant order.
    pub fn key(&self) -> ConversationKey {
        ConversationKey::new(&self.participant_a, &self.participant_b)
    }

    /// Append a message to the history.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
