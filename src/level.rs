//! Level files.
//!
//! One record per line, numbers separated by whitespace, blank lines ignored:
//!
//! ```text
//! 1 0                 snake segment (head)
//! 0 0 = r = 5 5       snake segment, initial direction, first wall
//! 10 10               every later line is a wall
//! ```
//!
//! At most the first two records are header records. A combined record
//! (`x y = dir = wx wy`, or `x y = dir wx wy`) always ends the header.

use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;
use tracing::info;

use crate::{Coordinate, Direction, GridInt};

const HEADER_RECORDS: usize = 2;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: `{token}` is not a grid coordinate")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: unknown direction `{token}`")]
    UnknownDirection { line: usize, token: String },
    #[error("line {line}: ({x}, {y}) lies outside the grid")]
    OutOfBounds { line: usize, x: GridInt, y: GridInt },
    #[error("level does not place a snake")]
    EmptySnake,
    #[error("snake segment {0} sits on a wall")]
    SnakeOnWall(Coordinate),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub walls: Vec<Coordinate>,
    /// Head first.
    pub snake: Vec<Coordinate>,
    pub direction: Direction,
}

impl Default for Level {
    fn default() -> Self {
        Level {
            walls: vec![],
            snake: vec![Coordinate::new(1, 0), Coordinate::new(0, 0)],
            direction: Direction::Right,
        }
    }
}

impl Level {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| LevelError::Io { path: path.to_path_buf(), source })?;

        let level = Level::parse(&text)?;
        info!(path = %path.display(), walls = level.walls.len(), snake = level.snake.len(), "loaded level");
        Ok(level)
    }

    pub fn parse(text: &str) -> Result<Level, LevelError> {
        let mut walls = vec![];
        let mut snake = vec![];
        let mut direction = None;
        let mut in_header = true;

        let records = text.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        for (record, (line_no, line)) in records.enumerate() {
            if record >= HEADER_RECORDS {
                in_header = false;
            }

            if !in_header {
                walls.push(parse_pair(line_no, line)?);
                continue;
            }

            if line.contains('=') {
                let (segment, dir, wall) = parse_combined(line_no, line)?;
                snake.push(segment);
                direction = Some(dir);
                walls.push(wall);
                in_header = false;
            } else {
                snake.push(parse_pair(line_no, line)?);
            }
        }

        if snake.is_empty() {
            return Err(LevelError::EmptySnake);
        }
        if let Some(hit) = snake.iter().find(|seg| walls.contains(seg)) {
            return Err(LevelError::SnakeOnWall(*hit));
        }

        Ok(Level { walls, snake, direction: direction.unwrap_or(Direction::Right) })
    }
}

////////////////////////////////////////////////////////////////////////

fn parse_pair(line: usize, text: &str) -> Result<Coordinate, LevelError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => coordinate(line, x, y),
        _ => Err(LevelError::Malformed {
            line,
            reason: format!("expected `x y`, found {} value(s)", tokens.len()),
        }),
    }
}

fn parse_combined(line: usize, text: &str) -> Result<(Coordinate, Direction, Coordinate), LevelError> {
    let parts: Vec<&str> = text.split('=').collect();

    let (segment, dir, wall) = match parts.as_slice() {
        [segment, dir, wall] => (*segment, dir.trim(), wall.trim().to_string()),
        [segment, rest] => {
            let mut tokens = rest.split_whitespace();
            let dir = tokens.next().unwrap_or("");
            (*segment, dir, tokens.collect::<Vec<_>>().join(" "))
        },
        _ => return Err(LevelError::Malformed {
            line,
            reason: format!("expected `x y = dir = wx wy`, found {} `=` signs", parts.len() - 1),
        }),
    };

    if dir.is_empty() || dir.contains(char::is_whitespace) {
        return Err(LevelError::Malformed { line, reason: "expected a single direction after `=`".into() });
    }

    let segment = parse_pair(line, segment)?;
    let direction = Direction::from_symbol(dir)
        .ok_or_else(|| LevelError::UnknownDirection { line, token: dir.to_string() })?;
    let wall = parse_pair(line, &wall)?;

    Ok((segment, direction, wall))
}

fn coordinate(line: usize, x: &str, y: &str) -> Result<Coordinate, LevelError> {
    let number = |token: &str| token.parse::<GridInt>()
        .map_err(|_| LevelError::InvalidNumber { line, token: token.to_string() });

    let pos = Coordinate::new(number(x)?, number(y)?);
    if !pos.in_bounds() {
        return Err(LevelError::OutOfBounds { line, x: pos.x, y: pos.y });
    }

    Ok(pos)
}
