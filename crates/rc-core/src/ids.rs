//! Dense node index.
//!
//! A `RouteGraph` keeps its locations in insertion order; `NodeId(i)` is the
//! `i`-th registered location.  The shortest-path engine works on these
//! indices internally so its distance and predecessor tables are flat
//! `Vec`s instead of hash maps keyed by name.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no node".  Marks unset predecessors.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for NodeId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
