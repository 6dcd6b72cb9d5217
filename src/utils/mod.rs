// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared credential helpers used by the storage layer and its callers.

pub mod password;
pub mod validation;

/// Hash a password for storage with a fresh random salt.
pub use password::hash as hash_password;
/// Verify a password against its stored hash.
pub use password::verify as verify_password;
/// Check registration credential formats before touching the registry.
pub use validation::{is_valid_email, is_valid_password, ERROR_EMAIL, ERROR_PASSWORD};
