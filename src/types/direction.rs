//! Definition of the [`Direction`] type.
//!
//! Grid cells use screen orientation: `x` grows to the east and `y`
//! grows to the south, so "north" means a smaller `y`.

use serde::{Deserialize, Serialize};

use crate::node::Cell;

/// One of the four wall sides of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Direction of a single grid step from `from` to `to`.
    ///
    /// Returns [`None`] when the two cells are not orthogonally
    /// adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let (fx, fy) = from;
        let (tx, ty) = to;
        if fy == ty {
            if tx.checked_sub(fx) == Some(1) {
                return Some(Direction::East);
            }
            if fx.checked_sub(tx) == Some(1) {
                return Some(Direction::West);
            }
        } else if fx == tx {
            if ty.checked_sub(fy) == Some(1) {
                return Some(Direction::South);
            }
            if fy.checked_sub(ty) == Some(1) {
                return Some(Direction::North);
            }
        }
        None
    }

    /// The neighbor of `cell` in this direction, if it does not fall
    /// below zero. Upper bounds are the caller's concern.
    pub fn step(self, cell: Cell) -> Option<Cell> {
        let (x, y) = cell;
        match self {
            Direction::North => y.checked_sub(1).map(|y| (x, y)),
            Direction::South => Some((x, y + 1)),
            Direction::East => Some((x + 1, y)),
            Direction::West => x.checked_sub(1).map(|x| (x, y)),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod direction_tests {
    use super::*;

    #[test]
    fn test_between_adjacent_cells() {
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::East));
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::West));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::South));
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::North));
    }

    #[test]
    fn test_between_non_adjacent_cells() {
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
        assert_eq!(Direction::between((0, 0), (1, 1)), None);
        assert_eq!(Direction::between((0, 0), (2, 0)), None);
    }

    #[test]
    fn test_step_and_negation_round_trip() {
        for dir in Direction::ALL {
            let next = dir.step((5, 5)).unwrap();
            assert_eq!(Direction::between((5, 5), next), Some(dir));
            assert_eq!((-dir).step(next), Some((5, 5)));
        }
        assert_eq!(Direction::North.step((0, 0)), None);
        assert_eq!(Direction::West.step((0, 0)), None);
    }
}
