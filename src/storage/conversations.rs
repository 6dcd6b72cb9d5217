// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Per-pair conversation documents.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, error, warn};

use crate::codec;
use crate::config::StoreConfig;
use crate::models::{Conversation, ConversationKey, Message};

/// Store holding one document per participant pair.
///
/// Documents are named by the canonical key, so lookups are independent
/// of argument order. The store keeps no cache: every read goes to disk,
/// and the atomic-replace write discipline guarantees a reader sees
/// either the previous or the new document, never a partial one.
#[derive(Debug)]
pub struct ConversationStore {
    config: StoreConfig,
    /// One lock per canonical key, held across load-modify-persist so
    /// each conversation has at most one writer at a time.
    write_locks: Mutex<HashMap<ConversationKey, Arc<Mutex<()>>>>,
}

impl ConversationStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            write_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Load the conversation between two participants, in either order.
    ///
    /// Absence is not an error: an unknown pair, an id that cannot name
    /// a document, or an unreadable document all yield `None` (the
    /// latter with a logged error).
    pub fn find(&self, a: &str, b: &str) -> Option<Conversation> {
        if !storable_id(a) || !storable_id(b) {
            warn!("unstorable participant id in lookup: {a:?} / {b:?}");
            return None;
        }
        let key = ConversationKey::new(a, b);
        let path = self.document_path(&key);
        if !path.exists() {
            return None;
        }
        match codec::read_document(&path) {
            Ok(conversation) => Some(conversation),
            Err(err) => {
                error!("failed to load conversation {key}: {err}");
                None
            }
        }
    }

    /// Append one message to the conversation between `sender` and
    /// `receiver`, creating the conversation on first contact.
    ///
    /// The whole document is rewritten through an atomic replace while
    /// holding the key's write lock, so concurrent appends to the same
    /// conversation serialize and a failure leaves the previous document
    /// intact. Returns `false` on any failure: unstorable ids, an
    /// invalid attachment, a damaged existing document, or an I/O error.
    pub fn append_message(&self, message: Message, sender: &str, receiver: &str) -> bool {
        if !storable_id(sender) || !storable_id(receiver) {
            warn!("unstorable participant id in append: {sender:?} / {receiver:?}");
            return false;
        }
        if let Some(attachment) = &message.attachment {
            if !attachment.is_valid() {
                warn!(
                    "rejected message with invalid attachment: {}",
                    attachment.file_name
                );
                return false;
            }
        }

        let key = ConversationKey::new(sender, receiver);
        let lock = self.write_lock(&key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let path = self.document_path(&key);
        let mut conversation = if path.exists() {
            match codec::read_document::<Conversation>(&path) {
                Ok(existing) => existing,
                Err(err) => {
                    // Keep a damaged document in place for inspection
                    // instead of overwriting it with a fresh history.
                    error!("refusing to append to damaged conversation {key}: {err}");
                    return false;
                }
            }
        } else {
            Conversation::new(sender, receiver)
        };

        conversation.push_message(message);
        match codec::write_document(&conversation, &path) {
            Ok(()) => {
                debug!(
                    "appended message to conversation {key} ({} in history)",
                    conversation.messages.len()
                );
                true
            }
            Err(err) => {
                error!("failed to persist conversation {key}: {err}");
                false
            }
        }
    }

    /// Shared media area where callers place attachment payloads.
    pub fn media_dir(&self) -> PathBuf {
        self.config.media_dir()
    }

    fn document_path(&self, key: &ConversationKey) -> PathBuf {
        self.config
            .conversations_dir()
            .join(format!("{}.json", key.file_stem()))
    }

    fn write_lock(&self, key: &ConversationKey) -> Arc<Mutex<()>> {
        let mut locks = self
            .write_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(key.clone()).or_default().clone()
    }
}

/// Whether an id may name half of a conversation document file.
///
/// Ids become the two halves of the `<first>_<second>` document name.
/// Rejected are the path escapes (`/`, `\`, NUL, dot-only names, and
/// `:`, whose Windows drive-prefix form would replace the directory the
/// name is joined onto) and the `_` separator itself, since an id
/// containing it would let two distinct pairs share one document and
/// its write lock. No character rewriting takes place; rejecting keeps
/// the pair-to-document mapping injective where a sanitizer would not.
fn storable_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0', ':', '_'])
}
