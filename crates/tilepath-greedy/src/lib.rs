//! Greedy best-first pathfinding for real-time tile grids.
//!
//! This crate finds routes on rectangular grids quickly and
//! deterministically, trading strict optimality for speed. It is meant for
//! games and simulations that path many agents per frame and can act on an
//! approximate route:
//!
//! - **Greedy best-first search** ordered purely by heuristic distance to
//!   the destination ([`GreedyEngine::build_path`])
//! - **Partial routes** toward the closest reachable cell when the
//!   destination cannot be reached or the step budget runs out
//!   ([`PathStatus::Partial`])
//! - **Reusable buffers**: [`GreedyEngine`] sizes its node state and bucketed
//!   frontier once, and invalidates them between searches with a generation
//!   counter, so repeated queries allocate nothing but the returned route.
//!
//! Terrain is opaque to the engine. Callers answer "can this mover enter
//! cell `id`, and at what weight" through [`Passability`], usually a closure
//! over their own grid and layer.
//!
//! ```
//! use tilepath_greedy::{Coord, Cost, EngineConfig, GreedyEngine, PathStatus};
//!
//! let mut engine = GreedyEngine::new(EngineConfig::new(10, 3)).unwrap();
//! let floor = |_: usize| Cost::NEUTRAL;
//! let result = engine
//!     .build_path(&floor, Coord::new(3, 1), Coord::new(9, 1))
//!     .unwrap();
//! assert_eq!(result.status, PathStatus::Found);
//! assert_eq!(result.steps(), 6);
//! ```

mod config;
mod cost;
mod distance;
mod engine;
mod error;
mod frontier;
mod greedy;
mod path;

pub use config::EngineConfig;
pub use cost::{Cost, Passability};
pub use distance::{chebyshev, heuristic, manhattan, octile};
pub use engine::GreedyEngine;
pub use error::PathError;
pub use path::{PathResult, PathStatus};
pub use tilepath_core::{CellId, Coord, Direction, GridError, GridShape, Movement};
