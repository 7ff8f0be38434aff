//! Vertex identities and arena slots.

use std::fmt;

use crate::core::Point2D;

/// Stable integer identity of a vertex within one graph.
///
/// Assigned at insertion. A removed id is handed out again only after
/// every higher id has been removed too, so interior ids stay stable while
/// a transient vertex added and removed at the end costs no arena space.
/// Ids are preserved by `clone()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    /// Arena slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Live vertex storage: position plus adjacency in insertion order.
#[derive(Clone, Debug)]
pub(crate) struct VertexSlot {
    pub position: Point2D,
    pub neighbors: Vec<VertexId>,
}

impl VertexSlot {
    pub fn new(position: Point2D) -> Self {
        Self {
            position,
            neighbors: Vec::new(),
        }
    }
}
