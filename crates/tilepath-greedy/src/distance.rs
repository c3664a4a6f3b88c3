use tilepath_core::{Coord, GridShape, Movement};

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.col.abs_diff(b.col) + a.row.abs_diff(b.row)
}

/// Chebyshev (L∞) distance: the minimum number of 8-way steps.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> u32 {
    a.col.abs_diff(b.col).max(a.row.abs_diff(b.row))
}

/// Integer octile distance with an orthogonal step of 2 and a diagonal step
/// of 3, i.e. `2 * max(dx, dy) + min(dx, dy)`.
///
/// Unlike [`chebyshev`] this separates a straight step from a diagonal one
/// that ends equally far away, so greedy routes stay straight on open ground.
#[inline]
pub fn octile(a: Coord, b: Coord) -> u32 {
    let dx = a.col.abs_diff(b.col);
    let dy = a.row.abs_diff(b.row);
    dx.max(dy).saturating_mul(2).saturating_add(dx.min(dy))
}

/// The search heuristic for a movement mode: [`manhattan`] for 4-way
/// movement, [`octile`] otherwise.
#[inline]
pub fn heuristic(movement: Movement, a: Coord, b: Coord) -> u32 {
    match movement {
        Movement::Cardinal => manhattan(a, b),
        Movement::Octile | Movement::OctileNoCornerCutting => octile(a, b),
    }
}

/// Largest heuristic value any pair of cells of `shape` can produce.
pub(crate) fn max_heuristic(shape: GridShape, movement: Movement) -> u32 {
    let far = Coord::new(shape.cols() - 1, shape.rows() - 1);
    heuristic(movement, Coord::ZERO, far)
}
