//! Route reconstruction and the caller-facing [`PathResult`].

use tilepath_core::{CellId, Coord, Direction};

use crate::GreedyEngine;
use crate::engine::NO_PARENT;

/// How a search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathStatus {
    /// The route ends at the destination.
    Found,
    /// The destination was not reached; the route ends at the visited cell
    /// closest to it. Treat the route as provisional.
    Partial,
    /// The search could not take a single step: the start has no enterable
    /// neighbor, or the destination is walled in. The route is just the
    /// start.
    NotFound,
}

/// The outcome of one search, owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub status: PathStatus,
    /// Cells from the start to the last reached cell, both inclusive.
    pub path: Vec<Coord>,
    /// Sum of the weights of every cell entered after the start.
    pub cost: u64,
}

impl PathResult {
    pub(crate) fn new(status: PathStatus, path: Vec<Coord>, cost: u64) -> Self {
        Self { status, path, cost }
    }

    pub(crate) fn not_found(start: Coord) -> Self {
        Self::new(PathStatus::NotFound, vec![start], 0)
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == PathStatus::Found
    }

    /// Number of moves in the route.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The last cell of the route.
    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// The route as one [`Direction`] per move.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.path
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
    }
}

impl GreedyEngine {
    /// Walk parent pointers from `idx` back to the start of the current
    /// search. Returns the route in start-to-`idx` order and its cost.
    ///
    /// `idx` must have been visited in the current generation.
    pub(crate) fn trace_back(&self, idx: CellId) -> (Vec<Coord>, u64) {
        debug_assert!(self.is_visited(idx));
        let mut path = Vec::with_capacity(self.nodes[idx].depth as usize + 1);
        let mut cost = 0u64;
        let mut ci = idx;
        loop {
            path.push(self.shape.to_coord(ci));
            let n = &self.nodes[ci];
            if n.parent == NO_PARENT {
                break;
            }
            cost += u64::from(n.cost.weight().unwrap_or(0));
            ci = n.parent as usize;
        }
        path.reverse();
        (path, cost)
    }

    /// Build the result for a search that ended at `idx`.
    pub(crate) fn route_to(&self, status: PathStatus, idx: CellId) -> PathResult {
        let (path, cost) = self.trace_back(idx);
        PathResult::new(status, path, cost)
    }
}
