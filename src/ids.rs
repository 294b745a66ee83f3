//! Identifier generation for newly created entities.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces unique identifiers. Ids are never taken from client input.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random ids: 32 lowercase hex characters (UUID v4, no hyphens).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic ids (`{prefix}{n}`, starting at 1). Useful in tests.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}{}", self.prefix, n)
    }
}
