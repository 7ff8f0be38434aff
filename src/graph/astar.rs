//! A* shortest path over a [`VisibilityGraph`].
//!
//! Edge cost and heuristic are both Euclidean distance, so the heuristic is
//! admissible and consistent and the first extraction of the target is
//! optimal.
//!
//! Two frontier strategies are available:
//!
//! - [`FrontierKind::Scan`]: linear scan for the minimum `f = g + h` over the
//!   discovered vertices, O(V²) per query. Ties go to the vertex discovered
//!   first, which makes the returned path deterministic.
//! - [`FrontierKind::Heap`]: binary heap keyed on `(f, discovery order)`,
//!   O((V + E) log V). Same optimal cost; on exact ties it may return a
//!   different (equally short) path than `Scan`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::Path;
use crate::core::Point2D;

use super::error::PathFailure;
use super::vertex::VertexId;
use super::visibility_graph::VisibilityGraph;

/// Minimum-selection strategy for the open set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// Linear scan, first-discovered wins ties.
    #[default]
    Scan,
    /// Indexed binary heap.
    Heap,
}

/// A* search configuration.
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// Open-set strategy.
    pub frontier: FrontierKind,
    /// Maximum vertices to finalize before giving up.
    pub max_expansions: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::Scan,
            max_expansions: 100_000,
        }
    }
}

impl AStarConfig {
    /// Builder-style setter for the frontier strategy.
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Builder-style setter for the expansion budget.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = max;
        self
    }
}

/// Per-vertex search record: best cost, back-pointer, finalized flag, heuristic.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    g: f32,
    h: f32,
    predecessor: Option<VertexId>,
    visited: bool,
    seq: u32,
}

impl FrontierEntry {
    #[inline]
    fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// Heap item; ordered so the max-heap pops the smallest `(f, seq)`.
#[derive(Clone, Copy, Debug)]
struct HeapItem {
    f: f32,
    seq: u32,
    id: VertexId,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set plus the per-vertex records of one query.
struct Frontier {
    kind: FrontierKind,
    entries: Vec<Option<FrontierEntry>>,
    discovered: Vec<VertexId>,
    heap: BinaryHeap<HeapItem>,
}

impl Frontier {
    fn new(kind: FrontierKind, capacity: usize) -> Self {
        Self {
            kind,
            entries: vec![None; capacity],
            discovered: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }

    fn entry(&self, id: VertexId) -> Option<&FrontierEntry> {
        self.entries[id.index()].as_ref()
    }

    fn is_finalized(&self, id: VertexId) -> bool {
        self.entry(id).is_some_and(|e| e.visited)
    }

    /// Insert a new vertex or lower the cost of a known one.
    fn relax(&mut self, id: VertexId, g: f32, h: f32, predecessor: Option<VertexId>) {
        let slot = &mut self.entries[id.index()];
        let seq = match slot {
            None => {
                let seq = self.discovered.len() as u32;
                *slot = Some(FrontierEntry {
                    g,
                    h,
                    predecessor,
                    visited: false,
                    seq,
                });
                self.discovered.push(id);
                seq
            }
            Some(entry) if g < entry.g => {
                entry.g = g;
                entry.predecessor = predecessor;
                entry.seq
            }
            Some(_) => return,
        };
        if self.kind == FrontierKind::Heap {
            self.heap.push(HeapItem { f: g + h, seq, id });
        }
    }

    /// Unvisited vertex with the smallest `f`, or `None` when exhausted.
    fn select_min(&mut self) -> Option<VertexId> {
        match self.kind {
            FrontierKind::Scan => {
                let mut best: Option<(VertexId, f32)> = None;
                for &id in &self.discovered {
                    let Some(entry) = self.entries[id.index()].as_ref() else {
                        continue;
                    };
                    if entry.visited {
                        continue;
                    }
                    let f = entry.f();
                    if best.is_none_or(|(_, best_f)| f < best_f) {
                        best = Some((id, f));
                    }
                }
                best.map(|(id, _)| id)
            }
            FrontierKind::Heap => {
                while let Some(item) = self.heap.pop() {
                    if !self.is_finalized(item.id) {
                        return Some(item.id);
                    }
                }
                None
            }
        }
    }

    fn finalize(&mut self, id: VertexId) {
        if let Some(entry) = self.entries[id.index()].as_mut() {
            entry.visited = true;
        }
    }
}

impl VisibilityGraph {
    /// Shortest Source→Target path with the default configuration.
    pub fn astar(&self) -> Result<Path, PathFailure> {
        self.astar_with(&AStarConfig::default())
    }

    /// Shortest Source→Target path.
    ///
    /// The returned path starts exactly at Source and ends exactly at
    /// Target. A disconnected target yields [`PathFailure::Unreachable`]
    /// instead of a partial path.
    pub fn astar_with(&self, config: &AStarConfig) -> Result<Path, PathFailure> {
        let (Some(source), Some(target)) = (self.source_id(), self.target_id()) else {
            debug!("[AStar] FAILED: EndpointsNotSet");
            return Err(PathFailure::EndpointsNotSet);
        };
        let (Some(source_pos), Some(target_pos)) = (self.position(source), self.position(target))
        else {
            return Err(PathFailure::EndpointsNotSet);
        };

        trace!(
            "[AStar] search: source=({:.2},{:.2}) target=({:.2},{:.2}) vertices={}",
            source_pos.x,
            source_pos.y,
            target_pos.x,
            target_pos.y,
            self.vertex_count()
        );

        let mut frontier = Frontier::new(config.frontier, self.id_capacity());
        frontier.relax(source, 0.0, source_pos.distance(target_pos), None);

        let mut expanded = 0;

        while let Some(u) = frontier.select_min() {
            if u == target {
                return Ok(self.backtrack(&frontier, source, target, expanded));
            }

            if expanded >= config.max_expansions {
                debug!("[AStar] FAILED: ExpansionLimit ({} vertices)", expanded);
                return Err(PathFailure::ExpansionLimit { expanded });
            }

            let Some(u_pos) = self.position(u) else {
                frontier.finalize(u);
                continue;
            };
            let g_u = frontier.entry(u).map_or(f32::INFINITY, |e| e.g);

            for &v in self.neighbor_ids(u) {
                if frontier.is_finalized(v) {
                    continue;
                }
                let Some(v_pos) = self.position(v) else {
                    continue;
                };
                let candidate = g_u + u_pos.distance(v_pos);
                frontier.relax(v, candidate, v_pos.distance(target_pos), Some(u));
            }

            frontier.finalize(u);
            expanded += 1;
        }

        debug!("[AStar] FAILED: Unreachable after expanding {} vertices", expanded);
        Err(PathFailure::Unreachable { expanded })
    }

    /// Follow predecessors from target to source, then reverse.
    fn backtrack(
        &self,
        frontier: &Frontier,
        source: VertexId,
        target: VertexId,
        expanded: usize,
    ) -> Path {
        let mut ids = vec![target];
        let mut current = target;
        while current != source {
            match frontier.entry(current).and_then(|e| e.predecessor) {
                Some(prev) => {
                    ids.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        ids.reverse();

        let points: Vec<Point2D> = ids.iter().filter_map(|&id| self.position(id)).collect();
        let path = Path::from_points(points);

        trace!(
            "[AStar] SUCCESS: {} waypoints, length={:.3}, expanded={}",
            path.points.len(),
            path.length,
            expanded
        );
        path
    }
}
