pub mod coords;
pub mod food;
pub mod game;
pub mod level;
pub mod snake;
pub mod term;
pub mod ui;
pub mod walls;

pub type GridInt = u16;

pub const WIDTH: GridInt = 32;
pub const HEIGHT: GridInt = 24;
pub const MIN_X: GridInt = 0;
pub const MIN_Y: GridInt = 0;
pub const MAX_X: GridInt = WIDTH - 1;
pub const MAX_Y: GridInt = HEIGHT - 1;

/// Default ticks per second.
pub const ANIMATION_SPEED: u32 = 10;

pub use coords::{Coordinate, Direction};
pub use food::Food;
pub use game::{run, run_at_speed, GameError, GameState, Outcome, Status};
pub use level::{Level, LevelError};
pub use snake::Snake;
pub use ui::{Cell, Event, Presentation, RandomSource};
pub use walls::Walls;
