// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Document codec for the store's backing files.
//!
//! Responsibilities:
//! - Serialize entities to pretty-printed JSON documents whose field
//!   order follows struct declaration order, and parse them back.
//! - Carry timestamps in the `dd/MM/yyyy HH:mm:ss` textual form, with the
//!   empty string standing in for "no timestamp".
//! - Read and write document files, replacing a previous version only
//!   through an atomic rename so readers never observe a partial write.
//!
//! Every failure in this file surfaces as a [`CodecError`]; nothing here
//! panics on malformed input.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::CodecError;

/// Timestamp pattern used by every document: `dd/MM/yyyy HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Serialize an entity into its document text.
///
/// # Examples
///
/// ```
/// use chatvault::models::Conversation;
///
/// let document = chatvault::codec::encode(&Conversation::new("ana", "luis")).unwrap();
/// let back: Conversation = chatvault::codec::decode(&document).unwrap();
/// assert_eq!(back.participant_a, "ana");
/// ```
pub fn encode<T: Serialize>(entity: &T) -> Result<String, CodecError> {
    serde_json::to_string_pretty(entity).map_err(CodecError::Encode)
}

/// Parse an entity from document text.
pub fn decode<T: DeserializeOwned>(document: &str) -> Result<T, CodecError> {
    serde_json::from_str(document).map_err(CodecError::Decode)
}

/// Read and parse a document file.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CodecError> {
    let text = fs::read_to_string(path).map_err(|source| CodecError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CodecError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an entity's document, atomically replacing any previous version.
///
/// The new document is fully written and flushed to a temporary file in
/// the target's own directory and only then renamed over the old one; a
/// failure mid-write leaves the previous document untouched. The
/// temporary file must sit next to the target because a rename is only
/// atomic within one filesystem. Missing parent directories are created.
pub fn write_document<T: Serialize>(entity: &T, path: &Path) -> Result<(), CodecError> {
    let text = encode(entity)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(parent).map_err(write_err)?;
    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_data().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

/// Serde adapter for the textual timestamp field.
///
/// Maps `Option<NaiveDateTime>` to the [`TIMESTAMP_FORMAT`] string: an
/// absent timestamp serializes as the empty string, and an empty or
/// blank field parses back to `None` instead of failing. A non-blank
/// field that does not match the pattern is a parse error.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(stamp) => serializer.collect_str(&stamp.format(TIMESTAMP_FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
