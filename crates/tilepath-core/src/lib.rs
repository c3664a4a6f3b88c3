//! **tilepath-core**: coordinate and index-space types for tile grids.
//!
//! This crate provides the foundational types shared by the *tilepath*
//! search crates: cell coordinates, compass directions with a fixed
//! enumeration order, movement modes, and the bounds-checked mapping between
//! coordinates and dense linear cell ids.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Coord, Direction, Movement};
pub use grid::{CellId, GridShape, Neighbors};
