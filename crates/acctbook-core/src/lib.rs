pub mod account;
pub mod error;
pub mod ids;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_util;

pub use account::{Account, AccountId, AccountStore, AccountType, LabelItem};
pub use error::CoreError;
