//! Account list management for acctbook.
//!
//! Provides the account record types, the `;`-delimited label codec,
//! and the [`AccountStore`] which mirrors every mutation to a
//! key-value [`Storage`](crate::storage::Storage) backend.

mod label;
mod store;
mod types;

pub use label::{items_to_label_string, parse_label_to_items};
pub use store::{AccountStore, STORAGE_KEY};
pub use types::{Account, AccountId, AccountType, LabelItem};
