use tilepath_core::{CellId, Coord, Direction, GridShape};

use crate::config::EngineConfig;
use crate::cost::{Cost, Passability};
use crate::distance;
use crate::error::PathError;
use crate::frontier::Frontier;

/// Sentinel parent of the start cell.
pub(crate) const NO_PARENT: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Search state of one cell.
///
/// Fields are only meaningful while the matching stamp equals the engine's
/// current generation: `visited` guards `parent`, `depth` and `h`; `probed`
/// guards `cost`.
#[derive(Clone, Default)]
pub(crate) struct Node {
    pub(crate) visited: u32,
    pub(crate) probed: u32,
    pub(crate) cost: Cost,
    pub(crate) parent: u32,
    pub(crate) depth: u32,
    pub(crate) h: u32,
}

// ---------------------------------------------------------------------------
// GreedyEngine
// ---------------------------------------------------------------------------

/// Greedy best-first path search over a fixed-size grid.
///
/// `GreedyEngine` owns every buffer a search needs (node states, the bucketed
/// frontier) sized once from the configured grid, so repeated searches incur
/// no allocations besides the returned route. Node state is invalidated in
/// O(1) between searches by bumping a generation counter.
///
/// An engine is used from one thread at a time (`&mut self`); independent
/// engines share nothing and can run in parallel.
pub struct GreedyEngine {
    pub(crate) config: EngineConfig,
    pub(crate) shape: GridShape,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) frontier: Frontier,
}

impl GreedyEngine {
    /// Create an engine for the grid described by `config`.
    pub fn new(config: EngineConfig) -> Result<Self, PathError> {
        let shape = GridShape::new(config.num_cols, config.num_rows)?;
        if config.distance_limit == Some(0) {
            return Err(PathError::ZeroDistanceLimit);
        }
        let len = shape.len();
        let frontier = Frontier::new(len, distance::max_heuristic(shape, config.movement));
        log::debug!(
            "greedy engine for {}x{} grid: {} cells, {} frontier buckets",
            shape.cols(),
            shape.rows(),
            len,
            frontier.buckets()
        );
        Ok(Self {
            config,
            shape,
            nodes: vec![Node::default(); len],
            generation: 0,
            frontier,
        })
    }

    /// The configuration this engine was built with.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The grid index space.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// The heuristic distance this engine orders expansion by.
    #[inline]
    pub fn heuristic(&self, from: Coord, to: Coord) -> u32 {
        distance::heuristic(self.config.movement, from, to)
    }

    // -----------------------------------------------------------------------
    // Generation and probing helpers
    // -----------------------------------------------------------------------

    /// Invalidate all node state from previous searches.
    pub(crate) fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from four billion searches ago would read as current.
            for n in self.nodes.iter_mut() {
                n.visited = 0;
                n.probed = 0;
            }
            self.generation = 1;
            log::debug!("search generation wrapped, cleared {} node stamps", self.nodes.len());
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, idx: CellId) -> bool {
        self.nodes[idx].visited == self.generation
    }

    /// Passability of `idx`, asking `passability` only on the first probe of
    /// this generation.
    #[inline]
    pub(crate) fn probe<P: Passability + ?Sized>(&mut self, passability: &P, idx: CellId) -> Cost {
        let cur_gen = self.generation;
        let n = &mut self.nodes[idx];
        if n.probed != cur_gen {
            n.probed = cur_gen;
            n.cost = passability.cost(idx);
        }
        n.cost
    }

    /// Whether a diagonal step from `idx` along `dir` keeps clear of
    /// blocked corners. Orthogonal steps are always clear.
    pub(crate) fn corner_clear<P: Passability + ?Sized>(
        &mut self,
        passability: &P,
        idx: CellId,
        dir: Direction,
    ) -> bool {
        let Some((vertical, horizontal)) = dir.components() else {
            return true;
        };
        let shape = self.shape;
        for side in [vertical, horizontal] {
            let Some(si) = shape.step(idx, side) else {
                return false;
            };
            if !self.probe(passability, si).is_passable() {
                return false;
            }
        }
        true
    }

    /// Whether `dest` has no enterable neighbor under the configured
    /// movement. The start always counts as enterable.
    pub(crate) fn is_sealed<P: Passability + ?Sized>(
        &mut self,
        passability: &P,
        dest: CellId,
        start: CellId,
    ) -> bool {
        for (_, ni) in self.shape.neighbors(dest, self.config.movement) {
            if ni == start || self.probe(passability, ni).is_passable() {
                return false;
            }
        }
        true
    }
}
