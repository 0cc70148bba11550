//! Account identifier generation.

use crate::account::AccountId;

/// Source of fresh, unique account identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> AccountId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> AccountId {
        AccountId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `acct-1`, `acct-2`, ... identifiers.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> AccountId {
        self.next += 1;
        AccountId::new(format!("acct-{}", self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_distinct_and_parseable() {
        let mut ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "acct-1");
        assert_eq!(ids.next_id().as_str(), "acct-2");
    }
}
