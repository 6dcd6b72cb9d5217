// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Statistics derived from a loaded conversation.
//!
//! Everything in this module is a pure function over the data model;
//! storage is never touched. Callers pass the result of a store lookup
//! directly, so an absent conversation is a valid input everywhere.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::Conversation;

/// Characters besides whitespace that separate words in message content.
const WORD_SEPARATORS: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// One row of a word-frequency report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// Total number of messages; 0 when the conversation is absent or empty.
pub fn total_messages(conversation: Option<&Conversation>) -> usize {
    conversation.map_or(0, |c| c.messages.len())
}

/// Message count per sender id, ordered by sender.
pub fn messages_by_sender(conversation: Option<&Conversation>) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    if let Some(conversation) = conversation {
        for message in &conversation.messages {
            *counts.entry(message.sender.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// The `limit` most frequent words across all text content.
///
/// Content is lower-cased and split on runs of whitespace and the
/// separators `. , ! ? ; :`; empty tokens are discarded, and messages
/// without text content contribute nothing. Rows come back ordered by
/// descending count; words with equal counts keep the order in which
/// they first appeared in the conversation, which makes the result
/// deterministic.
///
/// # Examples
///
/// ```
/// use chatvault::analytics::top_words;
/// use chatvault::models::{Conversation, Message};
///
/// let mut conversation = Conversation::new("alice", "bob");
/// conversation.push_message(Message::new("alice", "bob", "hola mundo"));
/// conversation.push_message(Message::new("alice", "bob", "hola"));
///
/// let top = top_words(Some(&conversation), 1);
/// assert_eq!(top[0].word, "hola");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn top_words(conversation: Option<&Conversation>, limit: usize) -> Vec<WordFrequency> {
    let mut rows: Vec<WordFrequency> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let Some(conversation) = conversation else {
        return rows;
    };

    for message in &conversation.messages {
        let Some(content) = &message.content else {
            continue;
        };
        let lowered = content.to_lowercase();
        for token in
            lowered.split(|c: char| c.is_whitespace() || WORD_SEPARATORS.contains(&c))
        {
            if token.is_empty() {
                continue;
            }
            match index.get(token) {
                Some(&at) => rows[at].count += 1,
                None => {
                    index.insert(token.to_string(), rows.len());
                    rows.push(WordFrequency {
                        word: token.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(limit);
    rows
}
