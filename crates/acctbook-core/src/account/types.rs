//! Account record types as they appear in the persisted JSON array.

use serde::{Deserialize, Serialize};

use super::label::items_to_label_string;

// ==============================================================================
// Identifiers and Discriminators
// ==============================================================================

/// Opaque unique identifier of an account, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authentication backend of an account. Only LOCAL accounts carry a
/// password of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    #[default]
    Local,
    Ldap,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "LOCAL"),
            Self::Ldap => write!(f, "LDAP"),
        }
    }
}

// ==============================================================================
// Records
// ==============================================================================

/// A single label tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelItem {
    pub text: String,
}

impl LabelItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A stored credential record.
///
/// `password` is `None` exactly when `account_type` is LDAP. The store
/// keeps that invariant for accounts it creates or retypes, but accepts
/// whatever callers hand to `save_account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub label: Vec<LabelItem>,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub login: String,
    pub password: Option<String>,
}

impl Account {
    /// An empty LOCAL account with an empty password.
    pub fn new_local(id: AccountId) -> Self {
        Self {
            id,
            label: Vec::new(),
            account_type: AccountType::Local,
            login: String::new(),
            password: Some(String::new()),
        }
    }

    /// The label rendered back into its `"a; b"` text form.
    pub fn label_string(&self) -> String {
        items_to_label_string(&self.label)
    }

    /// Whether the type/password pairing holds.
    pub fn is_consistent(&self) -> bool {
        match self.account_type {
            AccountType::Local => self.password.is_some(),
            AccountType::Ldap => self.password.is_none(),
        }
    }
}
