use std::fmt;

use crate::{GridInt, MAX_X, MAX_Y, MIN_X, MIN_Y};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn is_horizontal(self) -> bool {
        matches!(self, Left | Right)
    }

    /// A turn is only legal at a right angle: no reversing, no repeating.
    pub fn is_perpendicular(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    pub fn from_symbol(symbol: &str) -> Option<Direction> {
        match symbol.to_ascii_lowercase().as_str() {
            "u" | "up" => Some(Up),
            "d" | "down" => Some(Down),
            "l" | "left" => Some(Left),
            "r" | "right" => Some(Right),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: GridInt,
    pub y: GridInt,
}

impl Coordinate {
    pub const fn new(x: GridInt, y: GridInt) -> Self {
        Coordinate { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        self.x <= MAX_X && self.y <= MAX_Y
    }

    /// The neighbouring cell in `direction`, wrapping around the grid edges.
    pub fn moved(self, direction: Direction) -> Coordinate {
        let Coordinate { x, y } = self;

        match direction {
            Left => Coordinate::new(if x == MIN_X { MAX_X } else { x - 1 }, y),
            Right => Coordinate::new(if x == MAX_X { MIN_X } else { x + 1 }, y),
            Up => Coordinate::new(x, if y == MIN_Y { MAX_Y } else { y - 1 }),
            Down => Coordinate::new(x, if y == MAX_Y { MIN_Y } else { y + 1 }),
        }
    }
}

impl From<(GridInt, GridInt)> for Coordinate {
    fn from((x, y): (GridInt, GridInt)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
