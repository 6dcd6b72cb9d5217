// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File-backed persistence and analytics core for a peer-to-peer
//! messaging record.
//!
//! The crate owns four concerns:
//! - an account registry with case-insensitive e-mail uniqueness
//!   ([`storage::UserRegistry`]),
//! - one document per conversation pair, named by a canonical
//!   order-independent key ([`storage::ConversationStore`]),
//! - attachment validation and classification ([`models::Attachment`]),
//! - statistics over a loaded conversation ([`analytics`]).
//!
//! Everything is synchronous and local. Store operations never panic on
//! broken documents or failed writes: failures are logged through the
//! [`log`] facade and reported as `false` or `None` return values, so
//! callers must check what they get back. Documents are replaced
//! atomically, making concurrent readers safe and interrupted writes
//! harmless.
//!
//! ```
//! use chatvault::{Account, ConversationStore, Message, StoreConfig, UserRegistry};
//! use chatvault::utils::password;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = StoreConfig::new(dir.path());
//!
//! let registry = UserRegistry::open(config.clone()).unwrap();
//! let hash = password::hash("Secret1Pass");
//! assert!(registry.register(Account::new("Ada", "Lovelace", "ada@example.com", hash)));
//!
//! let store = ConversationStore::new(config);
//! let message = Message::new("Ada Lovelace", "Charles Babbage", "hello");
//! assert!(store.append_message(message, "Ada Lovelace", "Charles Babbage"));
//!
//! let conversation = store.find("Charles Babbage", "Ada Lovelace");
//! assert_eq!(chatvault::analytics::total_messages(conversation.as_ref()), 1);
//! ```

pub mod analytics;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod utils;

pub use analytics::{messages_by_sender, top_words, total_messages, WordFrequency};
pub use config::StoreConfig;
pub use error::CodecError;
pub use models::{Account, Attachment, Conversation, ConversationKey, Message};
pub use session::Session;
pub use storage::{ConversationStore, UserRegistry};
