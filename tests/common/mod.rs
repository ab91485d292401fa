#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::io;

use torus_snake::{Cell, Coordinate, Event, GridInt, Presentation, RandomSource};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Clear,
    Show,
    Wait(u64),
    Close,
}

/// Presentation double: queued events, scripted dice, recorded frames.
///
/// Once the event queue is empty it answers `Quit`; once the dice are used
/// up it answers zero.
#[derive(Default)]
pub struct ScriptedUi {
    pub events: VecDeque<Event>,
    pub rolls: VecDeque<GridInt>,
    pub calls: Vec<Call>,
    pub frames: Vec<BTreeMap<Coordinate, Cell>>,
    pub speed: Option<u32>,
    pending: BTreeMap<Coordinate, Cell>,
}

impl ScriptedUi {
    pub fn new(events: &[Event], rolls: &[GridInt]) -> Self {
        ScriptedUi {
            events: events.iter().copied().collect(),
            rolls: rolls.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn last_frame(&self) -> &BTreeMap<Coordinate, Cell> {
        self.frames.last().expect("nothing was shown")
    }

    pub fn cells_of(&self, kind: Cell) -> Vec<Coordinate> {
        self.last_frame().iter().filter(|(_, c)| **c == kind).map(|(pos, _)| *pos).collect()
    }

    pub fn closed(&self) -> bool {
        self.calls.contains(&Call::Close)
    }
}

impl RandomSource for ScriptedUi {
    fn random(&mut self, max_inclusive: GridInt) -> GridInt {
        self.rolls.pop_front().unwrap_or(0).min(max_inclusive)
    }
}

impl Presentation for ScriptedUi {
    fn place(&mut self, x: GridInt, y: GridInt, cell: Cell) -> io::Result<()> {
        self.pending.insert(Coordinate::new(x, y), cell);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.pending.clear();
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        self.frames.push(self.pending.clone());
        self.calls.push(Call::Show);
        Ok(())
    }

    fn wait(&mut self, millis: u64) -> io::Result<()> {
        self.calls.push(Call::Wait(millis));
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.calls.push(Call::Close);
        Ok(())
    }

    fn next_event(&mut self) -> io::Result<Event> {
        Ok(self.events.pop_front().unwrap_or(Event::Quit))
    }

    fn set_animation_speed(&mut self, speed: u32) {
        self.speed = Some(speed);
    }
}

pub fn c(x: GridInt, y: GridInt) -> Coordinate {
    Coordinate::new(x, y)
}

pub fn cells(pairs: &[(GridInt, GridInt)]) -> Vec<Coordinate> {
    pairs.iter().copied().map(Coordinate::from).collect()
}
