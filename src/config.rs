// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Filesystem layout of the store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the store keeps its documents.
///
/// Everything lives under one data directory: the account registry
/// document, one document per conversation, and the shared media area
/// holding attachment payloads. The embedding application constructs
/// this value; the crate does no config-file parsing of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory for all persisted state.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Document holding the full account registry.
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir.join("accounts.json")
    }

    /// Directory of per-conversation documents.
    pub fn conversations_dir(&self) -> PathBuf {
        self.data_dir.join("conversations")
    }

    /// Shared media area for attachment payloads.
    pub fn media_dir(&self) -> PathBuf {
        self.data_dir.join("media")
    }

    /// Destination for an attachment payload inside the media area.
    ///
    /// The store never copies payloads itself; callers resolve the
    /// destination here, place the file, and record the relative storage
    /// path on the attachment.
    pub fn media_path(&self, file_name: &str) -> PathBuf {
        self.media_dir().join(file_name)
    }
}
