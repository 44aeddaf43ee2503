//! Index types for the node arena.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Index of a node in a [`crate::NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::NONE
    }
}

/// Ordered list of child nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    #[must_use]
    pub fn new(nodes: Vec<NodeIndex>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        Self { nodes }
    }
}

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique identity of an arena.
///
/// Node indices are only meaningful within one arena, so anything keyed on a
/// compilation unit pairs the unit's root index with its `ArenaId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u32);

impl ArenaId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed))
    }
}
