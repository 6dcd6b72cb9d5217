// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Registered user accounts.

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Identity is the e-mail address, compared case-insensitively: the
/// registry never holds two accounts whose [`normalize_email`] keys
/// collide. The password is stored only as an opaque hash (see
/// [`crate::utils::password`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Registry key: the lower-cased e-mail address.
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    /// Label this account appears under in conversations: "name surname".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Normalize an e-mail address for case-insensitive comparison and for
/// use as a map key.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
