use std::io;

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::{ANIMATION_SPEED, Cell, Coordinate, Direction, Event, Food, Level, Presentation, RandomSource, Snake, Walls};

/// How long the last frame stays up after a crash.
const GAME_OVER_PAUSE_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("level does not place a snake")]
    EmptySnake,
    #[error("no free cell left for the food")]
    NoRoomForFood,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    GameOver { length: usize, board_full: bool },
    Quit
}

pub struct GameState {
    snake: Snake,
    food: Food,
    walls: Walls,
    direction: Direction,
    status: Status,
    board_full: bool,
}

impl GameState {
    pub fn new<R: RandomSource + ?Sized>(level: Level, rng: &mut R) -> Result<Self, GameError> {
        let snake = Snake::new(level.snake).ok_or(GameError::EmptySnake)?;
        let walls = Walls::new(level.walls);
        let food = Food::spawn(rng, snake.coordinates(), &walls).ok_or(GameError::NoRoomForFood)?;

        debug!(head = %snake.head(), food = %food.position(), walls = walls.len(), "new game");

        Ok(GameState {
            snake,
            food,
            walls,
            direction: level.direction,
            status: Status::Running,
            board_full: false,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn handle<P: Presentation + ?Sized>(&mut self, event: Event, ui: &mut P) -> io::Result<Status> {
        if self.status == Status::GameOver {
            return Ok(self.status);
        }

        match event {
            Event::Turn(dir) => {
                self.turn(dir);
                Ok(self.status)
            },
            Event::Tick => self.tick(ui),
            Event::Quit => Ok(self.status),
        }
    }

    /// Takes the new heading only if it is a right angle to the current one.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if requested.is_perpendicular(self.direction) {
            debug!(from = ?self.direction, to = ?requested, "turn");
            self.direction = requested;
            true
        } else {
            trace!(current = ?self.direction, ?requested, "ignored turn");
            false
        }
    }

    pub fn tick<P: Presentation + ?Sized>(&mut self, ui: &mut P) -> io::Result<Status> {
        if self.status == Status::GameOver {
            return Ok(self.status);
        }

        ui.clear()?;
        self.snake.advance(self.direction);
        trace!(head = %self.snake.head(), "tick");

        if self.snake.is_game_over(&self.walls) {
            info!(head = %self.snake.head(), length = self.snake.len(), "game over");
            return self.end(ui);
        }

        if self.food.is_eaten(self.snake.head()) {
            if !self.food.generate(ui, self.snake.coordinates(), &self.walls) {
                info!(length = self.snake.len(), "no room left for food");
                self.board_full = true;
                return self.end(ui);
            }
            self.snake.grow();
            debug!(length = self.snake.len(), "ate food");
        }

        self.render(ui)?;
        Ok(self.status)
    }

    pub fn render<P: Presentation + ?Sized>(&self, ui: &mut P) -> io::Result<()> {
        for pos in self.snake.coordinates() {
            place(ui, *pos, Cell::Snake)?;
        }
        place(ui, self.food.position(), Cell::Food)?;
        for pos in self.walls.coordinates() {
            place(ui, pos, Cell::Wall)?;
        }

        ui.show()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Running => None,
            Status::GameOver => Some(Outcome::GameOver { length: self.snake.len(), board_full: self.board_full }),
        }
    }

    ////////////////////////////////////////////////////////////////////////

    fn end<P: Presentation + ?Sized>(&mut self, ui: &mut P) -> io::Result<Status> {
        self.status = Status::GameOver;
        ui.wait(GAME_OVER_PAUSE_MS)?;
        ui.close()?;
        Ok(self.status)
    }
}

/// Drives the game until it ends or the player quits.
pub fn run<P: Presentation + ?Sized>(state: &mut GameState, ui: &mut P) -> io::Result<Outcome> {
    run_at_speed(state, ui, ANIMATION_SPEED)
}

pub fn run_at_speed<P: Presentation + ?Sized>(state: &mut GameState, ui: &mut P, speed: u32) -> io::Result<Outcome> {
    ui.set_animation_speed(speed);
    ui.clear()?;
    state.render(ui)?;

    loop {
        let event = ui.next_event()?;

        if event == Event::Quit {
            info!("player quit");
            ui.close()?;
            return Ok(Outcome::Quit);
        }

        if state.handle(event, ui)? == Status::GameOver {
            if let Some(outcome) = state.outcome() {
                return Ok(outcome);
            }
        }
    }
}

fn place<P: Presentation + ?Sized>(ui: &mut P, pos: Coordinate, cell: Cell) -> io::Result<()> {
    ui.place(pos.x, pos.y, cell)
}
