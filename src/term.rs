use std::{io::{self, Stdout, Write, stdout}, thread::sleep, time::{Duration, Instant}};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{rngs::StdRng, Rng};
use tracing::debug;

use crate::{ANIMATION_SPEED, Cell, Event, GridInt, Presentation, RandomSource, HEIGHT, WIDTH};
use crate::Direction::*;

// Every grid cell is two terminal columns wide so the arena looks square
const CELL_COLS: GridInt = 2;
const ARENA_COLS: GridInt = WIDTH * CELL_COLS + 2;
const ARENA_ROWS: GridInt = HEIGHT + 2;

const SNAKE_STR: &str = "██";
const FOOD_STR: &str = "()";
const WALL_STR: &str = "▒▒";
const EMPTY_STR: &str = "  ";

/// Crossterm front end: a bordered arena in the alternate screen.
pub struct TermUi {
    stdout: Stdout,
    rng: StdRng,
    tick: Duration,
    next_tick: Instant,
    frame: Vec<Cell>,
    screen: Vec<Cell>,
    open: bool,
}

impl TermUi {
    pub fn open(rng: StdRng) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        if cols < ARENA_COLS || rows < ARENA_ROWS {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("terminal is {}x{}, need at least {}x{}", cols, rows, ARENA_COLS, ARENA_ROWS),
            ));
        }

        let cells = WIDTH as usize * HEIGHT as usize;
        let tick = tick_interval(ANIMATION_SPEED);
        let mut ui = TermUi {
            stdout: stdout(),
            rng,
            tick,
            next_tick: Instant::now() + tick,
            frame: vec![Cell::Empty; cells],
            screen: vec![Cell::Empty; cells],
            open: false,
        };

        ui.setup()?;
        ui.draw_borders()?;
        Ok(ui)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::Clear(terminal::ClearType::All))?;
        // From here on, dropping the ui must put the terminal back
        self.open = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        self.open = false;
        Ok(())
    }

    fn draw_borders(&mut self) -> io::Result<()> {
        let end_x = ARENA_COLS - 1;
        let end_y = ARENA_ROWS - 1;

        for x in 0..ARENA_COLS {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(x, end_y), style::Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        self.stdout.flush()
    }

    fn print_cell(&mut self, idx: usize, cell: Cell) -> io::Result<()> {
        let x = (idx % WIDTH as usize) as GridInt;
        let y = (idx / WIDTH as usize) as GridInt;
        let s = match cell {
            Cell::Snake => SNAKE_STR,
            Cell::Food => FOOD_STR,
            Cell::Wall => WALL_STR,
            Cell::Empty => EMPTY_STR,
        };

        queue!(self.stdout, cursor::MoveTo(1 + x * CELL_COLS, 1 + y), style::Print(s))
    }
}

impl RandomSource for TermUi {
    fn random(&mut self, max_inclusive: GridInt) -> GridInt {
        self.rng.gen_range(0..=max_inclusive)
    }
}

impl Presentation for TermUi {
    fn place(&mut self, x: GridInt, y: GridInt, cell: Cell) -> io::Result<()> {
        if x < WIDTH && y < HEIGHT {
            self.frame[y as usize * WIDTH as usize + x as usize] = cell;
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.frame.iter_mut().for_each(|cell| *cell = Cell::Empty);
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        // Only redraw what changed since the last frame
        for idx in 0..self.frame.len() {
            let cell = self.frame[idx];
            if self.screen[idx] != cell {
                self.print_cell(idx, cell)?;
                self.screen[idx] = cell;
            }
        }

        self.stdout.flush()
    }

    fn wait(&mut self, millis: u64) -> io::Result<()> {
        self.stdout.flush()?;
        sleep(Duration::from_millis(millis));
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.open {
            self.restore()?;
        }
        Ok(())
    }

    fn next_event(&mut self) -> io::Result<Event> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick += self.tick;
                if self.next_tick < now {
                    // Fell behind, don't fire a burst of catch-up ticks
                    self.next_tick = now + self.tick;
                }
                return Ok(Event::Tick);
            }

            if event::poll(self.next_tick - now)? {
                if let event::Event::Key(key) = event::read()? {
                    if let Some(ev) = key_to_event(&key) {
                        return Ok(ev);
                    }
                }
            }
        }
    }

    fn set_animation_speed(&mut self, speed: u32) {
        self.tick = tick_interval(speed);
        self.next_tick = Instant::now() + self.tick;
        debug!(speed, tick_ms = self.tick.as_millis() as u64, "animation speed");
    }
}

impl Drop for TermUi {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn tick_interval(speed: u32) -> Duration {
    Duration::from_millis(1000 / speed.max(1) as u64)
}

fn key_to_event(key: &KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Event::Quit),
        KeyCode::Char('w') | KeyCode::Up => Some(Event::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Event::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Event::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Event::Turn(Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Event::Quit),
        _ => None,
    }
}
