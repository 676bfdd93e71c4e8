//! Identifier generation

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of new record identifiers
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> String {
        shared::util::new_uuid()
    }
}

/// Deterministic `prefix-N` identifiers, starting at 1
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("req");
        assert_eq!(ids.new_id(), "req-1");
        assert_eq!(ids.new_id(), "req-2");
    }

    #[test]
    fn test_uuid_ids_differ() {
        let ids = UuidIdGenerator;
        assert_ne!(ids.new_id(), ids.new_id());
    }
}
