// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Attachment domain model and validation helpers (storage-agnostic).

use serde::{Deserialize, Serialize};

/// Largest accepted attachment payload: 10 MiB.
pub const MAX_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions the store accepts, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 12] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "pdf", "doc", "docx", "txt", "zip", "rar",
];

/// Extensions classified as images.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Metadata for a file attached to a message.
///
/// The payload itself lives in the shared media area; this record only
/// carries the original file name, the extension-derived kind, the
/// relative storage path into the media area, and the payload size used
/// for validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub storage_path: String,
    pub size_bytes: u64,
}

impl Attachment {
    /// Build an attachment record, deriving the kind from the file name.
    pub fn new(
        file_name: impl Into<String>,
        storage_path: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        let file_name = file_name.into();
        let kind = extension_of(&file_name);
        Self {
            file_name,
            kind,
            storage_path: storage_path.into(),
            size_bytes,
        }
    }

    /// Lower-cased extension of the original file name.
    pub fn extension(&self) -> String {
        extension_of(&self.file_name)
    }

    /// Whether the attachment may be stored: payload within
    /// [`MAX_SIZE_BYTES`] and extension on [`ALLOWED_EXTENSIONS`].
    pub fn is_valid(&self) -> bool {
        self.size_bytes <= MAX_SIZE_BYTES
            && ALLOWED_EXTENSIONS.contains(&self.extension().as_str())
    }

    /// Whether the attachment renders as an inline image.
    pub fn is_image(&self) -> bool {
        IMAGE_EXTENSIONS.contains(&self.extension().as_str())
    }

    /// Whether the attachment is a PDF document.
    pub fn is_pdf(&self) -> bool {
        self.extension() == "pdf"
    }
}

/// Lower-cased substring after the last `.` of a file name, or empty when
/// there is no dot.
///
/// # Examples
///
/// ```
/// use chatvault::models::attachment::extension_of;
///
/// assert_eq!(extension_of("Report.PDF"), "pdf");
/// assert_eq!(extension_of("archive.tar.gz"), "gz");
/// assert_eq!(extension_of("README"), "");
/// ```
pub fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}
