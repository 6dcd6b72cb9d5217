// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation helpers, free of any I/O.

pub mod account;
pub mod attachment;
pub mod conversation;
pub mod message;

pub use account::{normalize_email, Account};
pub use attachment::{extension_of, Attachment, ALLOWED_EXTENSIONS, MAX_SIZE_BYTES};
pub use conversation::{Conversation, ConversationKey};
pub use message::Message;
