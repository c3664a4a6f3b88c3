use tilepath_core::CellId;

/// Passability of one cell for one mover, as answered by the caller's
/// terrain/layer system.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cost {
    /// The cell can never be entered.
    #[default]
    Blocked,
    /// The cell can be entered; higher weights model rougher terrain.
    Passable(u32),
}

impl Cost {
    /// Baseline weight for ordinary floor.
    pub const NEUTRAL: Cost = Cost::Passable(1);

    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, Cost::Passable(_))
    }

    /// The traversal weight, or `None` for a blocked cell.
    #[inline]
    pub fn weight(self) -> Option<u32> {
        match self {
            Cost::Passable(w) => Some(w),
            Cost::Blocked => None,
        }
    }
}

/// Per-cell passability and weight, keyed by linear cell id.
///
/// The engine never looks at terrain itself: tile tags, layers and mover
/// types are resolved on the caller's side of this boundary. Implementations
/// must be pure for the duration of a search; the engine asks about each
/// cell at most once per search.
///
/// Any `Fn(CellId) -> Cost` closure is a `Passability`, which is the usual
/// way to bind a grid and a mover layer for one call:
///
/// ```
/// use tilepath_greedy::{Cost, Passability};
///
/// let walls = [false, true, false];
/// let walkable = |id: usize| if walls[id] { Cost::Blocked } else { Cost::NEUTRAL };
/// assert_eq!(walkable.cost(1), Cost::Blocked);
/// ```
pub trait Passability {
    /// Whether cell `id` can be entered, and at what weight.
    fn cost(&self, id: CellId) -> Cost;
}

impl<F> Passability for F
where
    F: Fn(CellId) -> Cost,
{
    #[inline]
    fn cost(&self, id: CellId) -> Cost {
        self(id)
    }
}
