//! Geometry primitives: [`Coord`], [`Direction`] and [`Movement`].
//!
//! Columns grow east, rows grow south (screen coordinates). Coordinates are
//! unsigned; a step that would leave the non-negative quadrant yields `None`.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position as (column, row).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub col: u32,
    pub row: u32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { col: 0, row: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// The coordinate one step away in direction `dir`, or `None` if that
    /// would underflow or overflow either axis.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dc, dr) = dir.offset();
        Some(Self {
            col: self.col.checked_add_signed(dc)?,
            row: self.row.checked_add_signed(dr)?,
        })
    }

    /// Whether `other` is one of the eight cells around `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        Direction::between(self, other).is_some()
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major order, matching linear cell ids.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(u32, u32)> for Coord {
    #[inline]
    fn from((col, row): (u32, u32)) -> Self {
        Self::new(col, row)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// Neighbor enumeration order for 8-way movement.
    ///
    /// Diagonals come before orthogonals, each group clockwise from north.
    /// Search expansion and frontier tie-breaking both follow this order, so
    /// changing it changes which of several equally-good routes is returned.
    pub const OCTILE: [Direction; 8] = [
        Direction::NE,
        Direction::SE,
        Direction::SW,
        Direction::NW,
        Direction::N,
        Direction::E,
        Direction::S,
        Direction::W,
    ];

    /// Neighbor enumeration order for 4-way movement.
    pub const CARDINAL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Unit offset as (column delta, row delta).
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NE | Direction::SE | Direction::SW | Direction::NW
        )
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// The (vertical, horizontal) orthogonal components of a diagonal, or
    /// `None` for an orthogonal direction.
    #[inline]
    pub const fn components(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::NE => Some((Direction::N, Direction::E)),
            Direction::SE => Some((Direction::S, Direction::E)),
            Direction::SW => Some((Direction::S, Direction::W)),
            Direction::NW => Some((Direction::N, Direction::W)),
            _ => None,
        }
    }

    /// The direction of a single step from `from` to `to`, or `None` if the
    /// two coordinates are equal or not adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let dc = i64::from(to.col) - i64::from(from.col);
        let dr = i64::from(to.row) - i64::from(from.row);
        let dir = match (dc, dr) {
            (0, -1) => Direction::N,
            (1, -1) => Direction::NE,
            (1, 0) => Direction::E,
            (1, 1) => Direction::SE,
            (0, 1) => Direction::S,
            (-1, 1) => Direction::SW,
            (-1, 0) => Direction::W,
            (-1, -1) => Direction::NW,
            _ => return None,
        };
        Some(dir)
    }
}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// Which steps a mover may take between adjacent cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Orthogonal steps only.
    Cardinal,
    /// Orthogonal and diagonal steps; a diagonal may pass between two
    /// blocked cells.
    #[default]
    Octile,
    /// Orthogonal and diagonal steps; a diagonal needs both orthogonal
    /// side cells to be passable.
    OctileNoCornerCutting,
}

impl Movement {
    /// The fixed neighbor enumeration order for this movement mode.
    #[inline]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Movement::Cardinal => &Direction::CARDINAL,
            Movement::Octile | Movement::OctileNoCornerCutting => &Direction::OCTILE,
        }
    }

    #[inline]
    pub fn allows_diagonals(self) -> bool {
        !matches!(self, Movement::Cardinal)
    }
}
