//! Shared helpers for the integration tests: ASCII maps, a brute-force
//! flood fill and a route checker.
#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use tilepath_greedy::{
    CellId, Coord, Cost, Direction, GridShape, Movement, Passability, PathResult, PathStatus,
};

/// Weight of `o` cells.
pub const ROUGH: u32 = 3;

/// A parsed ASCII map.
///
/// | Char | Meaning |
/// |---|---|
/// | `.` | floor |
/// | ` ` | floor on the expected route |
/// | `o` | rough floor, weight [`ROUGH`] |
/// | `x` | wall |
/// | `A` | start |
/// | `$` | destination, expected to be reached |
/// | `B` | destination, expected to be missed |
pub struct Map {
    pub shape: GridShape,
    pub cells: Vec<Cost>,
    pub start: Coord,
    pub dest: Coord,
    pub reachable: bool,
    pub marked: HashSet<Coord>,
}

impl Map {
    pub fn parse(rows: &[&str]) -> Map {
        let num_rows = rows.len() as u32;
        let num_cols = rows[0].len() as u32;
        let shape = GridShape::new(num_cols, num_rows).unwrap();
        let mut cells = Vec::with_capacity(shape.len());
        let mut start = None;
        let mut dest = None;
        let mut reachable = true;
        let mut marked = HashSet::new();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len() as u32, num_cols, "ragged map row {row}");
            for (col, ch) in line.chars().enumerate() {
                let here = Coord::new(col as u32, row as u32);
                let cost = match ch {
                    '.' => Cost::NEUTRAL,
                    ' ' => {
                        marked.insert(here);
                        Cost::NEUTRAL
                    }
                    'o' => Cost::Passable(ROUGH),
                    'x' => Cost::Blocked,
                    'A' => {
                        start = Some(here);
                        Cost::NEUTRAL
                    }
                    '$' => {
                        dest = Some(here);
                        Cost::NEUTRAL
                    }
                    'B' => {
                        dest = Some(here);
                        reachable = false;
                        Cost::NEUTRAL
                    }
                    other => panic!("unexpected map char {other:?}"),
                };
                cells.push(cost);
            }
        }
        Map {
            shape,
            cells,
            start: start.expect("map has no start"),
            dest: dest.expect("map has no destination"),
            reachable,
            marked,
        }
    }

    pub fn passable(&self, c: Coord) -> bool {
        self.shape
            .to_id(c)
            .is_ok_and(|id| self.cells[id].is_passable())
    }
}

impl Passability for Map {
    fn cost(&self, id: CellId) -> Cost {
        self.cells[id]
    }
}

/// Passability over a flat cost slice.
pub fn costs(cells: &[Cost]) -> impl Fn(CellId) -> Cost + '_ {
    move |id| cells[id]
}

/// Whether a mover may step from `from` along `dir`, ignoring whether the
/// target itself is passable.
fn step_allowed(
    shape: GridShape,
    pass: &dyn Fn(CellId) -> Cost,
    from: CellId,
    dir: Direction,
    movement: Movement,
) -> bool {
    if movement != Movement::OctileNoCornerCutting {
        return true;
    }
    match dir.components() {
        None => true,
        Some((v, h)) => [v, h].into_iter().all(|side| {
            shape
                .step(from, side)
                .is_some_and(|s| pass(s).is_passable())
        }),
    }
}

/// Breadth-first shortest step count from `start` to `dest`, ignoring the
/// greedy engine entirely. The start is always enterable.
pub fn shortest_steps(
    shape: GridShape,
    pass: &dyn Fn(CellId) -> Cost,
    movement: Movement,
    start: Coord,
    dest: Coord,
) -> Option<usize> {
    let si = shape.to_id(start).unwrap();
    let di = shape.to_id(dest).unwrap();
    let mut dist = vec![usize::MAX; shape.len()];
    dist[si] = 0;
    let mut queue = VecDeque::from([si]);
    while let Some(ci) = queue.pop_front() {
        if ci == di {
            return Some(dist[ci]);
        }
        for (dir, ni) in shape.neighbors(ci, movement) {
            if dist[ni] != usize::MAX || !pass(ni).is_passable() {
                continue;
            }
            if !step_allowed(shape, pass, ci, dir, movement) {
                continue;
            }
            dist[ni] = dist[ci] + 1;
            queue.push_back(ni);
        }
    }
    None
}

pub fn reachable(
    shape: GridShape,
    pass: &dyn Fn(CellId) -> Cost,
    movement: Movement,
    start: Coord,
    dest: Coord,
) -> bool {
    shortest_steps(shape, pass, movement, start, dest).is_some()
}

/// Check the structural guarantees every route makes, whatever its status.
pub fn assert_valid_route(
    r: &PathResult,
    shape: GridShape,
    pass: &dyn Fn(CellId) -> Cost,
    movement: Movement,
    start: Coord,
    dest: Coord,
) {
    assert!(!r.path.is_empty(), "empty route");
    assert_eq!(r.path[0], start, "route must begin at the start");
    if r.status == PathStatus::Found {
        assert_eq!(r.last(), Some(dest), "found route must end at the destination");
    } else {
        assert_ne!(r.last(), Some(dest), "missed destination cannot be the last cell");
    }
    if r.status == PathStatus::NotFound {
        assert_eq!(r.path, vec![start]);
    }

    let mut seen = HashSet::new();
    let mut cost = 0u64;
    for (i, &c) in r.path.iter().enumerate() {
        assert!(shape.contains(c), "{c} outside grid");
        assert!(seen.insert(c), "{c} repeated in route");
        if i == 0 {
            continue;
        }
        let prev = r.path[i - 1];
        let dir = Direction::between(prev, c)
            .unwrap_or_else(|| panic!("{prev} -> {c} is not a single step"));
        if movement == Movement::Cardinal {
            assert!(!dir.is_diagonal(), "diagonal step {prev} -> {c}");
        }
        let prev_id = shape.to_id(prev).unwrap();
        assert!(
            step_allowed(shape, pass, prev_id, dir, movement),
            "{prev} -> {c} cuts a corner"
        );
        let id = shape.to_id(c).unwrap();
        let weight = pass(id).weight().unwrap_or_else(|| panic!("{c} is blocked"));
        cost += u64::from(weight);
    }
    assert_eq!(r.cost, cost, "route cost");
}
