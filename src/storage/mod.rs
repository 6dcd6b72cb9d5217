// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Storage layer: the account registry and the per-pair conversation
//! store, both backed by documents written through the codec.

pub mod conversations;
pub mod registry;

/// Per-pair conversation documents.
pub use conversations::ConversationStore;
/// Accounts keyed by lower-cased e-mail.
pub use registry::UserRegistry;
