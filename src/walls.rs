use std::collections::HashSet;

use crate::Coordinate;

/// Static obstacles, fixed once the game starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Walls {
    cells: HashSet<Coordinate>,
}

impl Walls {
    pub fn new<I: IntoIterator<Item = Coordinate>>(cells: I) -> Self {
        Walls { cells: cells.into_iter().collect() }
    }

    pub fn contains(&self, pos: &Coordinate) -> bool {
        self.cells.contains(pos)
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
