//! Stable node identity.
//!
//! This module provides [`PropertyId`] and [`IdGenerator`] for assigning
//! every tree node a stable identifier that is independent of its key, so
//! nodes survive renames and reorderings.

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// An opaque, stable identifier for a [`PropertyNode`](crate::PropertyNode).
///
/// Ids are assigned once at node creation and never derived from node
/// content. They are a tree-local concern: the schema wire format never
/// carries them, and parsing a schema always produces fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(u64);

impl Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property_{}", self.0)
    }
}

/// Hands out collision-free [`PropertyId`]s for one editing session.
///
/// Cloned handles share the same counter, so every id drawn from any
/// clone is unique across the session. Ids are not stable storage keys;
/// a new session starts a new id space.
///
/// # Example
///
/// ```rust
/// use schematree::IdGenerator;
///
/// let ids = IdGenerator::new();
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert_ne!(a, b);
///
/// // Clones draw from the same counter.
/// let shared = ids.clone();
/// assert_ne!(shared.next_id(), ids.next_id());
/// ```
#[derive(Debug, Clone)]
pub struct IdGenerator {
    counter: Arc<AtomicU64>,
}

impl IdGenerator {
    /// Creates a generator whose first id is `property_1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator seeded at `first`, for deterministic ids in tests.
    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(first)),
        }
    }

    /// Returns the next unused id and advances the counter.
    pub fn next_id(&self) -> PropertyId {
        PropertyId(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let ids = IdGenerator::new();
        let clone = ids.clone();
        let a = ids.next_id();
        let b = clone.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_starting_at_is_deterministic() {
        let ids = IdGenerator::starting_at(42);
        assert_eq!(ids.next_id(), IdGenerator::starting_at(42).next_id());
        assert_eq!(ids.next_id().to_string(), "property_43");
    }
}
