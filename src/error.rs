// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error types shared across the codec and storage layers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while encoding, decoding, reading, or writing backing
/// documents.
///
/// Store operations recover from these at their boundary: the error is
/// logged and the operation reports `false` or `None`. Constructors
/// surface them directly so the embedding application can decide whether
/// a damaged store is fatal.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed document: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to read document {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write document {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("malformed document {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl CodecError {
    /// True when the failure is the underlying file not existing.
    ///
    /// Callers use this to tell "first run, nothing persisted yet" apart
    /// from genuinely broken documents.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CodecError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
