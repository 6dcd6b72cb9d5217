// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Salted password hashing for stored account credentials.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Separator between the salt and digest halves of a stored hash.
const SEPARATOR: char = '$';

/// Hash a password with a fresh random salt.
///
/// Stored form: `<salt>$<hex digest>`, where the digest is
/// SHA-256 over the salt followed by the password. Two calls with the
/// same password produce different values.
pub fn hash(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let digest = digest(&salt, password);
    format!("{salt}{SEPARATOR}{digest}")
}

/// Verify a password against a stored `<salt>$<digest>` value.
///
/// Malformed stored values never verify.
pub fn verify(password: &str, stored: &str) -> bool {
    match stored.split_once(SEPARATOR) {
        Some((salt, expected)) => digest(salt, password) == expected,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
