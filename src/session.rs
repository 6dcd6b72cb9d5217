// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Explicit session value for an authenticated account.

use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::models::Account;
use crate::storage::UserRegistry;

/// A logged-in account, owned and passed around by the caller.
///
/// There is no process-wide current user: whoever drives the store holds
/// the session value, threads it into calls that need the acting
/// account, and drops it to log out.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    account: Account,
    logged_in_at: NaiveDateTime,
}

impl Session {
    /// Authenticate against the registry and open a session.
    ///
    /// `None` when the e-mail is unknown or the password does not match.
    pub fn log_in(registry: &UserRegistry, email: &str, password: &str) -> Option<Self> {
        registry.authenticate(email, password).map(Self::for_account)
    }

    /// Wrap an already-verified account, stamping the login time.
    pub fn for_account(account: Account) -> Self {
        Self {
            account,
            logged_in_at: Local::now().naive_local().trunc_subsecs(0),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    /// Participant id this session writes messages under.
    pub fn display_name(&self) -> String {
        self.account.display_name()
    }

    pub fn logged_in_at(&self) -> NaiveDateTime {
        self.logged_in_at
    }
}
