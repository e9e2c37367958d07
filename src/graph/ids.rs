//! Stable node and edge identities.
//!
//! Both identity spaces are allocated from an [`IdCounter`] owned by the graph
//! instance. Counters only move forward, so an id handed out once is never
//! handed out again, even after the entity it named has been removed.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Identity of a node in a [`Graph`](crate::Graph).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw counter value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Identity of an edge in a [`Graph`](crate::Graph).
///
/// Edge ids come from a counter independent of the node counter, so
/// `NodeId::new(0)` and `EdgeId::new(0)` can coexist.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Wraps a raw counter value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A monotonic counter scoped to one graph.
///
/// Not atomic: the graph is mutated through `&mut self`, which already rules
/// out concurrent allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub(crate) const fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns the value the next call to [`advance`](Self::advance) will hand out.
    #[inline]
    pub(crate) const fn peek(self) -> u64 {
        self.next
    }

    /// Hands out the current value and moves past it.
    #[inline]
    pub(crate) fn advance(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
