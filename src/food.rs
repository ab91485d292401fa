use tracing::{debug, warn};

use crate::{Coordinate, GridInt, RandomSource, Walls, HEIGHT, MAX_X, MAX_Y, WIDTH};

/// Random draws before falling back to scanning the grid for free cells.
const MAX_SAMPLES: usize = WIDTH as usize * HEIGHT as usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Coordinate,
}

impl Food {
    pub fn new(position: Coordinate) -> Self {
        Food { position }
    }

    /// First food of a game. `None` if the grid has no free cell.
    pub fn spawn<R>(rng: &mut R, snake: &[Coordinate], walls: &Walls) -> Option<Food>
        where R: RandomSource + ?Sized
    {
        free_cell(rng, snake, walls, None).map(Food::new)
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn is_eaten(&self, head: Coordinate) -> bool {
        self.position == head
    }

    /// Moves the food to a random cell that is not its current position, the
    /// snake or a wall. Returns `false` and stays put if no such cell exists.
    pub fn generate<R>(&mut self, rng: &mut R, snake: &[Coordinate], walls: &Walls) -> bool
        where R: RandomSource + ?Sized
    {
        match free_cell(rng, snake, walls, Some(self.position)) {
            Some(pos) => {
                self.position = pos;
                true
            },
            None => false,
        }
    }
}

fn free_cell<R>(rng: &mut R, snake: &[Coordinate], walls: &Walls, previous: Option<Coordinate>) -> Option<Coordinate>
    where R: RandomSource + ?Sized
{
    let is_free = |pos: &Coordinate| Some(*pos) != previous && !snake.contains(pos) && !walls.contains(pos);

    for _ in 0..MAX_SAMPLES {
        let candidate = random_cell(rng);
        if is_free(&candidate) {
            debug!(food = %candidate, "placed food");
            return Some(candidate);
        }
    }

    // Crowded grid, pick directly from what is left
    let choices: Vec<Coordinate> = all_cells().filter(|pos| is_free(pos)).collect();
    warn!(free = choices.len(), "food sampling gave up, enumerating free cells");

    if choices.is_empty() {
        return None;
    }

    let idx = rng.random((choices.len() - 1) as GridInt) as usize;
    let pos = choices[idx.min(choices.len() - 1)];
    debug!(food = %pos, "placed food");
    Some(pos)
}

fn random_cell<R: RandomSource + ?Sized>(rng: &mut R) -> Coordinate {
    Coordinate::new(rng.random(MAX_X), rng.random(MAX_Y))
}

fn all_cells() -> impl Iterator<Item = Coordinate> {
    (0..HEIGHT).flat_map(|y| (0..WIDTH).map(move |x| Coordinate::new(x, y)))
}
