use thiserror::Error;
use tilepath_core::GridError;

/// Structural errors surfaced by the engine.
///
/// Failing to reach the destination is not an error; see
/// [`PathStatus`](crate::PathStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// Bad grid dimensions, or a start/destination outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// A distance limit of zero steps was requested.
    #[error("distance limit must be at least one step")]
    ZeroDistanceLimit,
}
