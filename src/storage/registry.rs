// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Account registry backed by a single document.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::config::StoreConfig;
use crate::error::CodecError;
use crate::models::{normalize_email, Account};
use crate::utils::password;

/// Document shape: a wrapper object holding every registered account.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsDocument {
    accounts: Vec<Account>,
}

/// In-memory registry of accounts, keyed by lower-cased e-mail.
///
/// Loaded once at construction; every successful mutation rewrites the
/// backing document before being reported as a success, so memory and
/// disk cannot silently diverge. Reads share the lock, writes hold it
/// exclusively, which makes the registry safe to share across threads.
#[derive(Debug)]
pub struct UserRegistry {
    config: StoreConfig,
    by_email: RwLock<BTreeMap<String, Account>>,
}

impl UserRegistry {
    /// Load the registry from the accounts document under `config`.
    ///
    /// A missing document is the first-run case and yields an empty
    /// registry. An unreadable or malformed document is surfaced to the
    /// embedder instead of being treated as empty, since registering
    /// into an "empty" registry would overwrite the damaged file.
    pub fn open(config: StoreConfig) -> Result<Self, CodecError> {
        let by_email = Self::load(&config)?;
        debug!(
            "loaded {} account(s) from {:?}",
            by_email.len(),
            config.accounts_file()
        );
        Ok(Self {
            config,
            by_email: RwLock::new(by_email),
        })
    }

    fn load(config: &StoreConfig) -> Result<BTreeMap<String, Account>, CodecError> {
        let path = config.accounts_file();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let document: AccountsDocument = codec::read_document(&path)?;
        Ok(document
            .accounts
            .into_iter()
            .map(|account| (account.normalized_email(), account))
            .collect())
    }

    /// Insert a new account and persist the full set.
    ///
    /// Returns `false` without any state change when the e-mail is
    /// already registered (case-insensitively). When persisting the
    /// updated document fails, the in-memory insert is rolled back and
    /// `false` returned, so a reported failure really means "nothing
    /// changed".
    pub fn register(&self, account: Account) -> bool {
        let key = account.normalized_email();
        let mut by_email = self.write_lock();

        if by_email.contains_key(&key) {
            debug!("registration rejected, e-mail already taken: {}", account.email);
            return false;
        }

        by_email.insert(key.clone(), account);
        if let Err(err) = self.persist(&by_email) {
            error!("failed to persist account registry: {err}");
            by_email.remove(&key);
            return false;
        }
        true
    }

    /// Case-insensitive membership test.
    pub fn exists_email(&self, email: &str) -> bool {
        self.read_lock().contains_key(&normalize_email(email))
    }

    /// Case-insensitive lookup.
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.read_lock().get(&normalize_email(email)).cloned()
    }

    /// Look up an account and verify the password against its stored
    /// hash. An unknown e-mail and a wrong password are
    /// indistinguishable from the outside.
    pub fn authenticate(&self, email: &str, plain_password: &str) -> Option<Account> {
        self.find_by_email(email)
            .filter(|account| password::verify(plain_password, &account.password_hash))
    }

    /// Snapshot of every registered account, ordered by normalized
    /// e-mail.
    pub fn accounts(&self) -> Vec<Account> {
        self.read_lock().values().cloned().collect()
    }

    /// Re-read the backing document, replacing in-memory state.
    ///
    /// Picks up changes written out-of-band (another handle, another
    /// process). On failure the previous state is kept and `false`
    /// returned.
    pub fn reload(&self) -> bool {
        match Self::load(&self.config) {
            Ok(fresh) => {
                *self.write_lock() = fresh;
                true
            }
            Err(err) => {
                error!("failed to reload account registry: {err}");
                false
            }
        }
    }

    fn persist(&self, by_email: &BTreeMap<String, Account>) -> Result<(), CodecError> {
        let document = AccountsDocument {
            accounts: by_email.values().cloned().collect(),
        };
        codec::write_document(&document, &self.config.accounts_file())
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, Account>> {
        self.by_email.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, Account>> {
        self.by_email
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::thread;

    use tempfile::TempDir;

    use super::UserRegistry;
    use crate::config::StoreConfig;
    use crate::models::Account;
    use crate::utils::password;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn account(email: &str) -> Account {
        Account::new("Ana", "García", email, password::hash("Secret1Pass"))
    }

    #[test]
    fn open_without_document_yields_empty_registry() {
        let tmp = TempDir::new().unwrap();
        let registry = UserRegistry::open(StoreConfig::new(tmp.path())).unwrap();

        assert!(registry.accounts().is_empty());
        assert!(!registry.exists_email("ana@example.com"));
        assert!(registry.find_by_email("ana@example.com").is_none());
    }

    #[test]
    fn register_persists_and_enforces_case_insensitive_uniqueness() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::new(tmp.path());
        let registry = UserRegistry::open(config.clone()).unwrap();

        assert!(registry.register(account("ana@example.com")));
        assert!(config.accounts_file().exists());

        assert!(registry.exists_email("ANA@EXAMPLE.COM"));
        assert!(!registry.register(account("Ana@Example.Com")));
        assert_eq!(registry.accounts().len(), 1);
    }

    #[test]
    fn lookup_is_case_insensitive_but_preserves_stored_form() {
        let tmp = TempDir::new().unwrap();
        let registry = UserRegistry::open(StoreConfig::new(tmp.path())).unwrap();
        registry.register(account("Ana.Garcia@Example.com"));

        let found = registry.find_by_email("ana.garcia@example.COM").unwrap();
        assert_eq!(found.email, "Ana.Garcia@Example.com");
    }

    // A fresh handle over the same directory sees what was registered.
    #[test]
    fn registry_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::new(tmp.path());

        {
            let registry = UserRegistry::open(config.clone()).unwrap();
            assert!(registry.register(account("ana@example.com")));
        }

        let reopened = UserRegistry::open(config).unwrap();
        assert!(reopened.exists_email("ana@example.com"));
    }

    #[test]
    fn reload_picks_up_out_of_band_changes() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::new(tmp.path());

        let first = UserRegistry::open(config.clone()).unwrap();
        let second = UserRegistry::open(config).unwrap();

        assert!(second.register(account("late@example.com")));
        assert!(!first.exists_email("late@example.com"));

        assert!(first.reload());
        assert!(first.exists_email("late@example.com"));
    }

    #[test]
    fn reload_failure_keeps_previous_state() {
        init_logging();
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::new(tmp.path());
        let registry = UserRegistry::open(config.clone()).unwrap();
        registry.register(account("ana@example.com"));

        fs::write(config.accounts_file(), b"{ not a document").unwrap();

        assert!(!registry.reload());
        assert!(registry.exists_email("ana@example.com"));
    }

    #[test]
    fn open_surfaces_a_damaged_document() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::new(tmp.path());
        fs::create_dir_all(&config.data_dir).unwrap();
        fs::write(config.accounts_file(), b"garbage").unwrap();

        let err = UserRegistry::open(config).unwrap_err();
        assert!(!err.is_not_found());
    }

    // Persist failure must roll the in-memory insert back.
    #[test]
    fn failed_persist_reports_false_and_leaves_no_trace() {
        init_logging();
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"plain file").unwrap();

        // data_dir sits below a regular file, so creating it fails.
        let registry = UserRegistry::open(StoreConfig::new(blocker.join("data"))).unwrap();

        assert!(!registry.register(account("ana@example.com")));
        assert!(!registry.exists_email("ana@example.com"));
        assert!(registry.accounts().is_empty());
    }

    #[test]
    fn authenticate_checks_password_against_stored_hash() {
        let tmp = TempDir::new().unwrap();
        let registry = UserRegistry::open(StoreConfig::new(tmp.path())).unwrap();
        registry.register(Account::new(
            "Ana",
            "García",
            "ana@example.com",
            password::hash("Secret1Pass"),
        ));

        assert!(registry.authenticate("ANA@example.com", "Secret1Pass").is_some());
        assert!(registry.authenticate("ana@example.com", "WrongPass1").is_none());
        assert!(registry.authenticate("nobody@example.com", "Secret1Pass").is_none());
    }

    #[test]
    fn accounts_snapshot_is_ordered_by_normalized_email() {
        let tmp = TempDir::new().unwrap();
        let registry = UserRegistry::open(StoreConfig::new(tmp.path())).unwrap();
        registry.register(account("zoe@example.com"));
        registry.register(account("Adam@example.com"));

        let emails: Vec<_> = registry
            .accounts()
            .into_iter()
            .map(|account| account.email)
            .collect();
        assert_eq!(emails, vec!["Adam@example.com", "zoe@example.com"]);
    }

    // The write lock serializes check-insert-persist, so registrations
    // racing on distinct e-mails must all land and persist.
    #[test]
    fn concurrent_registrations_all_land_and_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::new(tmp.path());
        let registry = UserRegistry::open(config.clone()).unwrap();

        thread::scope(|scope| {
            for worker in 0..4 {
                let registry = &registry;
                scope.spawn(move || {
                    for i in 0..5 {
                        let email = format!("user{worker}-{i}@example.com");
                        assert!(registry.register(account(&email)));
                    }
                });
            }
        });

        assert_eq!(registry.accounts().len(), 20);

        let reopened = UserRegistry::open(config).unwrap();
        assert_eq!(reopened.accounts().len(), 20);
    }

    // Registrations racing on one e-mail admit exactly one winner.
    #[test]
    fn racing_duplicate_registrations_admit_one_winner() {
        let tmp = TempDir::new().unwrap();
        let registry = UserRegistry::open(StoreConfig::new(tmp.path())).unwrap();

        let results: Vec<bool> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let registry = &registry;
                    scope.spawn(move || registry.register(account("contested@example.com")))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(results.iter().filter(|&&won| won).count(), 1);
        assert_eq!(registry.accounts().len(), 1);
    }
}
