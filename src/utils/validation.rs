// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Syntactic validation of registration credentials.
//!
//! These checks run in the calling layer before an account is handed to
//! the registry; the registry itself only gates on duplicate e-mails and
//! persistence success.

use email_address::EmailAddress;

/// Message shown when an e-mail address fails validation.
pub const ERROR_EMAIL: &str = "The e-mail address is not valid.";

/// Message shown when a password fails validation.
pub const ERROR_PASSWORD: &str =
    "The password must be at least 8 characters long and combine lowercase and uppercase letters with digits.";

/// Syntactic e-mail check.
pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::parse_with_options(email, Default::default()).is_ok()
}

/// Password policy: at least 8 characters, ASCII letters and digits only,
/// with at least one lowercase letter, one uppercase letter, and one
/// digit.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
