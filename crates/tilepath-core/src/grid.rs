//! The [`GridShape`] type: a fixed rectangular index space.
//!
//! Cells are addressed either by [`Coord`] or by a dense linear [`CellId`]
//! (`row * cols + col`). Every id handed out by a `GridShape` lies in
//! `[0, len)`.

use crate::error::GridError;
use crate::geom::{Coord, Direction, Movement};

/// Dense linear cell id.
pub type CellId = usize;

// ---------------------------------------------------------------------------
// GridShape
// ---------------------------------------------------------------------------

/// Dimensions of a rectangular grid and the coordinate/id mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    cols: u32,
    rows: u32,
}

impl GridShape {
    /// Create a grid shape. Both dimensions must be positive and the total
    /// cell count must fit in a `u32`.
    pub fn new(cols: u32, rows: u32) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        if cols.checked_mul(rows).is_none() {
            return Err(GridError::TooLarge { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    #[inline]
    pub fn cols(self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Always `false`; a shape has at least one cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.col < self.cols && c.row < self.rows
    }

    /// Convert a coordinate to its linear id.
    #[inline]
    pub fn to_id(self, c: Coord) -> Result<CellId, GridError> {
        if !self.contains(c) {
            return Err(GridError::OutOfBounds {
                coord: c,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Convert a linear id back to a coordinate. `id` must be below
    /// [`len`](Self::len).
    #[inline]
    pub fn to_coord(self, id: CellId) -> Coord {
        debug_assert!(id < self.len(), "cell id {id} out of range");
        let cols = self.cols as usize;
        Coord::new((id % cols) as u32, (id / cols) as u32)
    }

    /// The id one step from `id` in direction `dir`, if it is inside the grid.
    #[inline]
    pub fn step(self, id: CellId, dir: Direction) -> Option<CellId> {
        let next = self.to_coord(id).step(dir)?;
        self.to_id(next).ok()
    }

    /// Adjacent in-bounds cells of `id` in the fixed enumeration order of
    /// `movement`.
    #[inline]
    pub fn neighbors(self, id: CellId, movement: Movement) -> Neighbors {
        Neighbors {
            shape: self,
            origin: self.to_coord(id),
            dirs: movement.directions().iter(),
        }
    }

    /// Row-major iterator over every coordinate of the grid.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(col, row)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GridShape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.cols, self.rows).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridShape {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (cols, rows) = <(u32, u32)>::deserialize(deserializer)?;
        GridShape::new(cols, rows).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Iterator over `(Direction, CellId)` pairs returned by
/// [`GridShape::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors {
    shape: GridShape,
    origin: Coord,
    dirs: std::slice::Iter<'static, Direction>,
}

impl Iterator for Neighbors {
    type Item = (Direction, CellId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for &dir in self.dirs.by_ref() {
            let Some(c) = self.origin.step(dir) else {
                continue;
            };
            if let Ok(id) = self.shape.to_id(c) {
                return Some((dir, id));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.dirs.len()))
    }
}
