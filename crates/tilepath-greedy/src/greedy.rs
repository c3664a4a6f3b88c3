use tilepath_core::{Coord, Movement};

use crate::GreedyEngine;
use crate::cost::Passability;
use crate::engine::NO_PARENT;
use crate::error::PathError;
use crate::path::{PathResult, PathStatus};

/// Why the search loop stopped.
enum Stop {
    Reached,
    OverBudget,
    Exhausted,
}

impl GreedyEngine {
    /// Find a route from `start` to `dest` using the configured distance
    /// limit.
    ///
    /// See [`build_path_within`](Self::build_path_within).
    pub fn build_path<P: Passability + ?Sized>(
        &mut self,
        passability: &P,
        start: Coord,
        dest: Coord,
    ) -> Result<PathResult, PathError> {
        self.build_path_within(passability, start, dest, self.config.distance_limit)
    }

    /// Find a route from `start` to `dest`, returning at most `limit` steps.
    ///
    /// Cells are expanded in order of heuristic distance to `dest` only;
    /// cost accumulated along the way is never considered, so a route may
    /// detour around obstacles where a cost-aware search would not. Equal
    /// heuristics expand in discovery order, and neighbors are discovered in
    /// the fixed [`Movement::directions`] order, which makes the result a
    /// pure function of the inputs.
    ///
    /// The start is always enterable. Unreached destinations are reported
    /// through [`PathStatus`], never as errors: once the search leaves the
    /// start, the route toward the closest visited cell is
    /// [`Partial`](PathStatus::Partial), even if that cell is the start
    /// itself. [`NotFound`](PathStatus::NotFound) means no step could be
    /// taken at all: the start has no enterable neighbor, or the
    /// destination is walled in.
    ///
    /// Errors with [`PathError::Grid`] if `start` or `dest` lies outside the
    /// grid and with [`PathError::ZeroDistanceLimit`] for `Some(0)`.
    pub fn build_path_within<P: Passability + ?Sized>(
        &mut self,
        passability: &P,
        start: Coord,
        dest: Coord,
        limit: Option<u32>,
    ) -> Result<PathResult, PathError> {
        let start_idx = self.shape.to_id(start)?;
        let dest_idx = self.shape.to_id(dest)?;
        if limit == Some(0) {
            return Err(PathError::ZeroDistanceLimit);
        }

        if start_idx == dest_idx {
            return Ok(PathResult::new(PathStatus::Found, vec![start], 0));
        }

        // Bump generation to lazily invalidate all nodes.
        self.bump_generation();
        let cur_gen = self.generation;

        if self.is_sealed(passability, dest_idx, start_idx) {
            log::trace!("greedy {start} -> {dest}: destination sealed off");
            return Ok(PathResult::not_found(start));
        }

        // Initialise the start node.
        let start_h = self.heuristic(start, dest);
        {
            let n = &mut self.nodes[start_idx];
            n.visited = cur_gen;
            n.parent = NO_PARENT;
            n.depth = 0;
            n.h = start_h;
        }
        self.frontier.clear();
        debug_assert!(self.frontier.is_empty());
        self.frontier.push(start_idx, start_h);

        let movement = self.config.movement;
        let mut best = start_idx;
        let mut grew = false;
        let mut expanded = 0usize;

        let stop = 'search: loop {
            let Some(ci) = self.frontier.pop() else {
                break 'search Stop::Exhausted;
            };
            if ci == dest_idx {
                break 'search Stop::Reached;
            }
            let depth = self.nodes[ci].depth;
            if limit.is_some_and(|l| depth >= l) {
                break 'search Stop::OverBudget;
            }
            expanded += 1;

            for (dir, ni) in self.shape.neighbors(ci, movement) {
                if self.is_visited(ni) {
                    continue;
                }
                if !self.probe(passability, ni).is_passable() {
                    continue;
                }
                if movement == Movement::OctileNoCornerCutting
                    && !self.corner_clear(passability, ci, dir)
                {
                    continue;
                }

                let h = self.heuristic(self.shape.to_coord(ni), dest);
                let n = &mut self.nodes[ni];
                n.visited = cur_gen;
                n.parent = ci as u32;
                n.depth = depth + 1;
                n.h = h;

                if h < self.nodes[best].h {
                    best = ni;
                }
                self.frontier.push(ni, h);
                grew = true;
            }
        };

        let result = match stop {
            Stop::Reached => self.route_to(PathStatus::Found, dest_idx),
            Stop::OverBudget => self.route_to(PathStatus::Partial, best),
            Stop::Exhausted if !grew => PathResult::not_found(start),
            Stop::Exhausted => self.route_to(PathStatus::Partial, best),
        };
        log::trace!(
            "greedy {start} -> {dest}: {:?} in {} steps, {expanded} expanded, {} left in frontier",
            result.status,
            result.steps(),
            self.frontier.len()
        );
        Ok(result)
    }
}
