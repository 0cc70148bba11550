//! `AccountStore` — the single authoritative list of accounts.
//!
//! The list is read once from [`Storage`] under [`STORAGE_KEY`] when the
//! store is built. Every mutating operation then rewrites that key with
//! the full post-mutation list, so the persisted snapshot always equals
//! the in-memory one after an operation returns `Ok`.

use crate::error::CoreError;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::storage::Storage;

use super::types::{Account, AccountId, AccountType};

/// Storage key holding the JSON array of accounts.
pub const STORAGE_KEY: &str = "accounts";

pub struct AccountStore<S: Storage> {
    accounts: Vec<Account>,
    storage: S,
    ids: Box<dyn IdGenerator>,
}

impl<S: Storage> AccountStore<S> {
    /// Load the account list from `storage`, generating ids as UUID v4.
    ///
    /// Never fails: unreadable or corrupt content is logged and the store
    /// starts empty.
    pub fn load(storage: S) -> Self {
        Self::load_with_ids(storage, Box::new(UuidGenerator))
    }

    pub fn load_with_ids(storage: S, ids: Box<dyn IdGenerator>) -> Self {
        let accounts = read_accounts(&storage);
        Self {
            accounts,
            storage,
            ids,
        }
    }

    // ========================================================================
    // Query
    // ========================================================================

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == *id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append an empty LOCAL account with a fresh id.
    pub fn add_account(&mut self) -> Result<&Account, CoreError> {
        let account = Account::new_local(self.ids.next_id());
        tracing::debug!(account_id = %account.id, "adding account");

        let idx = self.accounts.len();
        self.accounts.push(account);
        self.persist()?;
        Ok(&self.accounts[idx])
    }

    /// Remove the account with `id`. Unknown ids leave the list as is but
    /// the list is still written back.
    pub fn remove_account(&mut self, id: &AccountId) -> Result<(), CoreError> {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != *id);
        if self.accounts.len() == before {
            tracing::debug!(account_id = %id, "remove of unknown account id");
        }
        self.persist()
    }

    /// Upsert by id: replace in place when the id is known, append
    /// otherwise. The account is stored exactly as given.
    pub fn save_account(&mut self, account: Account) -> Result<(), CoreError> {
        match self.accounts.iter().position(|a| a.id == account.id) {
            Some(idx) => {
                tracing::debug!(account_id = %account.id, index = idx, "replacing account");
                self.accounts[idx] = account;
            }
            None => {
                tracing::debug!(account_id = %account.id, "appending saved account");
                self.accounts.push(account);
            }
        }
        self.persist()
    }

    /// Switch the account's backend. LDAP drops the password; LOCAL
    /// fills in an empty one if there is none. Unknown ids return without
    /// touching storage.
    pub fn change_type(&mut self, id: &AccountId, new_type: AccountType) -> Result<(), CoreError> {
        let Some(account) = self.accounts.iter_mut().find(|a| a.id == *id) else {
            tracing::debug!(account_id = %id, "type change for unknown account id");
            return Ok(());
        };

        account.account_type = new_type;
        match new_type {
            AccountType::Ldap => account.password = None,
            AccountType::Local => {
                account.password.get_or_insert_with(String::new);
            }
        }
        tracing::debug!(account_id = %id, account_type = %new_type, "changed account type");

        self.persist()
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn persist(&mut self) -> Result<(), CoreError> {
        let snapshot = serde_json::to_string(&self.accounts)?;
        self.storage.set(STORAGE_KEY, &snapshot)
    }
}

fn read_accounts<S: Storage>(storage: &S) -> Vec<Account> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = STORAGE_KEY, "no persisted accounts, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key = STORAGE_KEY, error = %e, "could not read persisted accounts, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Account>>(&raw) {
        Ok(accounts) => {
            tracing::debug!(count = accounts.len(), "loaded persisted accounts");
            accounts
        }
        Err(e) => {
            tracing::warn!(key = STORAGE_KEY, error = %e, "persisted accounts are corrupt, starting empty");
            Vec::new()
        }
    }
}
