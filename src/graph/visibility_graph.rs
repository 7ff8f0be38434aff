//! Undirected visibility graph over value-identified 2D waypoints.
//!
//! Vertices live in an arena indexed by [`VertexId`]; a bit-key map
//! resolves coordinates to ids so callers can keep working in
//! [`Point2D`]s. Edge weights are not stored: they are the Euclidean
//! distance between endpoints, computed when the search needs them.

use std::collections::HashMap;

use crate::core::{Point2D, PointKey};

use super::error::GraphError;
use super::vertex::{VertexId, VertexSlot};

/// Undirected graph of waypoints with an optional Source/Target pair.
///
/// Cloning produces a fully independent deep copy; this is how a shared,
/// read-only graph is handed to each agent.
///
/// # Invariants
///
/// - Adjacency is symmetric: `b ∈ adj(a) ⇔ a ∈ adj(b)`.
/// - No self-loops, no duplicate edges.
/// - `vertices()` yields live vertices in insertion order.
/// - Source/Target always name live vertices.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGraph {
    slots: Vec<Option<VertexSlot>>,
    order: Vec<VertexId>,
    index: HashMap<PointKey, VertexId>,
    source: Option<VertexId>,
    target: Option<VertexId>,
}

impl VisibilityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, or return the existing id for an equal coordinate.
    pub fn add_vertex(&mut self, position: Point2D) -> VertexId {
        if let Some(&id) = self.index.get(&position.key()) {
            return id;
        }
        let id = VertexId(self.slots.len() as u32);
        self.slots.push(Some(VertexSlot::new(position)));
        self.order.push(id);
        self.index.insert(position.key(), id);
        id
    }

    /// Remove a vertex together with every edge that touches it.
    ///
    /// Neighbours' adjacency lists are pruned in the same call, and a
    /// Source/Target naming this vertex is cleared. Returns `false` if the
    /// vertex was not present.
    pub fn remove_vertex(&mut self, position: Point2D) -> bool {
        let Some(id) = self.index.remove(&position.key()) else {
            return false;
        };
        let Some(slot) = self.slots[id.index()].take() else {
            return false;
        };

        for neighbor in slot.neighbors {
            if let Some(other) = self.slots[neighbor.index()].as_mut() {
                other.neighbors.retain(|&n| n != id);
            }
        }
        self.order.retain(|&v| v != id);

        // Release trailing vacated slots
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }

        if self.source == Some(id) {
            self.source = None;
        }
        if self.target == Some(id) {
            self.target = None;
        }
        true
    }

    /// Add an undirected edge between two existing vertices.
    ///
    /// Returns `Ok(true)` if the edge was inserted and `Ok(false)` if it
    /// already existed. Missing endpoints and self-loops are reported as
    /// errors at every call site; nothing is inserted in that case.
    pub fn add_edge(&mut self, a: Point2D, b: Point2D) -> Result<bool, GraphError> {
        let ia = self.id_of(a).ok_or(GraphError::UnknownVertex(a))?;
        let ib = self.id_of(b).ok_or(GraphError::UnknownVertex(b))?;
        if ia == ib {
            return Err(GraphError::SelfLoop(a));
        }
        Ok(self.link(ia, ib))
    }

    /// Insert `a`-`b` by id; both must be live and distinct.
    pub(crate) fn link(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b || self.slot(b).is_none() {
            return false;
        }
        match self.slot_mut(a) {
            Some(slot) if !slot.neighbors.contains(&b) => slot.neighbors.push(b),
            _ => return false,
        }
        if let Some(slot) = self.slot_mut(b) {
            slot.neighbors.push(a);
        }
        true
    }

    /// True if `a` and `b` are both present and adjacent.
    pub fn has_edge(&self, a: Point2D, b: Point2D) -> bool {
        match (self.id_of(a), self.id_of(b)) {
            (Some(ia), Some(ib)) => self
                .slot(ia)
                .is_some_and(|slot| slot.neighbors.contains(&ib)),
            _ => false,
        }
    }

    /// Mark a vertex as the search start, inserting it if absent.
    pub fn set_source(&mut self, position: Point2D) -> VertexId {
        let id = self.add_vertex(position);
        self.source = Some(id);
        id
    }

    /// Mark a vertex as the search goal, inserting it if absent.
    pub fn set_target(&mut self, position: Point2D) -> VertexId {
        let id = self.add_vertex(position);
        self.target = Some(id);
        id
    }

    /// Forget the Source/Target designation without touching vertices.
    pub fn clear_endpoints(&mut self) {
        self.source = None;
        self.target = None;
    }

    /// Position of the Source vertex, if set.
    pub fn source(&self) -> Option<Point2D> {
        self.source.and_then(|id| self.position(id))
    }

    /// Position of the Target vertex, if set.
    pub fn target(&self) -> Option<Point2D> {
        self.target.and_then(|id| self.position(id))
    }

    pub(crate) fn source_id(&self) -> Option<VertexId> {
        self.source
    }

    pub(crate) fn target_id(&self) -> Option<VertexId> {
        self.target
    }

    /// Resolve a coordinate to its vertex id.
    pub fn id_of(&self, position: Point2D) -> Option<VertexId> {
        self.index.get(&position.key()).copied()
    }

    /// Position of a live vertex.
    pub fn position(&self, id: VertexId) -> Option<Point2D> {
        self.slot(id).map(|slot| slot.position)
    }

    /// Whether a vertex exists at exactly `position`.
    pub fn contains(&self, position: Point2D) -> bool {
        self.index.contains_key(&position.key())
    }

    /// Live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.order.iter().filter_map(|&id| self.position(id))
    }

    /// Neighbours of a vertex in edge-insertion order; empty if absent.
    pub fn neighbors(&self, position: Point2D) -> Vec<Point2D> {
        self.id_of(position)
            .map(|id| {
                self.neighbor_ids(id)
                    .iter()
                    .filter_map(|&n| self.position(n))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn neighbor_ids(&self, id: VertexId) -> &[VertexId] {
        self.slot(id)
            .map(|slot| slot.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Upper bound on vertex ids handed out so far.
    pub(crate) fn id_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .map(|slot| slot.neighbors.len())
            .sum::<usize>()
            / 2
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    fn slot(&self, id: VertexId) -> Option<&VertexSlot> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    fn slot_mut(&mut self, id: VertexId) -> Option<&mut VertexSlot> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }
}
