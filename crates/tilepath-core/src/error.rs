use thiserror::Error;

use crate::geom::Coord;

/// Structural errors in the grid index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one column and one row.
    #[error("invalid grid dimensions {cols}x{rows}: both must be positive")]
    InvalidDimensions { cols: u32, rows: u32 },
    /// The cell count does not fit in a 32-bit cell id.
    #[error("grid {cols}x{rows} has too many cells")]
    TooLarge { cols: u32, rows: u32 },
    /// A coordinate lies outside the grid.
    #[error("coordinate {coord} is outside the {cols}x{rows} grid")]
    OutOfBounds { coord: Coord, cols: u32, rows: u32 },
}
