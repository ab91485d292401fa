//! The narrow surface the game engine talks to. Everything that draws,
//! waits, reads keys or rolls dice lives behind these traits.

use std::io;

use crate::{Direction, GridInt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    Snake,
    Wall
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Turn(Direction),
    Tick,
    Quit
}

pub trait RandomSource {
    /// Uniform integer in `0..=max_inclusive`.
    fn random(&mut self, max_inclusive: GridInt) -> GridInt;
}

pub trait Presentation: RandomSource {
    fn place(&mut self, x: GridInt, y: GridInt, cell: Cell) -> io::Result<()>;

    /// Resets the pending frame. Nothing visible changes until `show`.
    fn clear(&mut self) -> io::Result<()>;

    fn show(&mut self) -> io::Result<()>;

    fn wait(&mut self, millis: u64) -> io::Result<()>;

    fn close(&mut self) -> io::Result<()>;

    /// Blocks until the next key press or tick.
    fn next_event(&mut self) -> io::Result<Event>;

    /// `speed` is in ticks per second.
    fn set_animation_speed(&mut self, speed: u32);
}
