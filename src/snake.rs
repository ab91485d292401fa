use crate::{Coordinate, Direction, Walls};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    // Head first, tail last
    body: Vec<Coordinate>,
}

impl Snake {
    /// Returns `None` for an empty segment list; a snake always has a head.
    pub fn new(segments: Vec<Coordinate>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Snake { body: segments })
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.body
    }

    pub fn head(&self) -> Coordinate {
        self.body[0]
    }

    pub fn tail(&self) -> Coordinate {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Coordinate] {
        &self.body[1..]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: &Coordinate) -> bool {
        self.body.contains(pos)
    }

    /// Moves one cell forward: the new head goes in front, the old tail comes off.
    pub fn advance(&mut self, direction: Direction) {
        let new_head = self.head().moved(direction);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Doubles up the tail so the last `advance` keeps its dropped segment.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    pub fn is_game_over(&self, walls: &Walls) -> bool {
        let head = self.head();
        self.body().contains(&head) || walls.contains(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction::*;

    fn snake(cells: &[(u16, u16)]) -> Snake {
        Snake::new(cells.iter().copied().map(Coordinate::from).collect()).unwrap()
    }

    #[test]
    fn empty_snake_is_rejected() {
        assert!(Snake::new(vec![]).is_none());
    }

    #[test]
    fn views() {
        let s = snake(&[(3, 0), (2, 0), (1, 0)]);
        assert_eq!(s.head(), Coordinate::new(3, 0));
        assert_eq!(s.tail(), Coordinate::new(1, 0));
        assert_eq!(s.body(), &[Coordinate::new(2, 0), Coordinate::new(1, 0)]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn advance_keeps_length() {
        let mut s = snake(&[(1, 0), (0, 0)]);
        s.advance(Right);
        assert_eq!(s, snake(&[(2, 0), (1, 0)]));

        s.advance(Down);
        assert_eq!(s, snake(&[(2, 1), (2, 0)]));
    }

    #[test]
    fn grow_after_advance_adds_one() {
        let mut s = snake(&[(1, 0), (0, 0)]);
        s.advance(Right);
        s.grow();
        assert_eq!(s.len(), 3);
        assert_eq!(s, snake(&[(2, 0), (1, 0), (1, 0)]));

        // The doubled tail separates again on the next move
        s.advance(Right);
        assert_eq!(s, snake(&[(3, 0), (2, 0), (1, 0)]));
    }

    #[test]
    fn single_segment_snake_moves() {
        let mut s = snake(&[(0, 0)]);
        s.advance(Left);
        assert_eq!(s.head(), Coordinate::new(crate::MAX_X, 0));
        assert!(s.body().is_empty());
        assert!(!s.is_game_over(&Walls::default()));
    }

    #[test]
    fn head_in_body_is_game_over() {
        let s = snake(&[(1, 1), (2, 1), (2, 2), (1, 2), (1, 1)]);
        assert!(s.is_game_over(&Walls::default()));
    }

    #[test]
    fn head_on_wall_is_game_over() {
        let s = snake(&[(4, 4), (3, 4)]);
        let walls = Walls::new(vec![Coordinate::new(4, 4)]);
        assert!(s.is_game_over(&walls));
    }

    #[test]
    fn clear_path_is_not_game_over() {
        let s = snake(&[(4, 4), (3, 4), (2, 4)]);
        let walls = Walls::new(vec![Coordinate::new(5, 4), Coordinate::new(2, 5)]);
        assert!(!s.is_game_over(&walls));
    }

    #[test]
    fn freshly_grown_tail_is_not_a_collision() {
        let mut s = snake(&[(1, 0), (0, 0)]);
        s.advance(Right);
        s.grow();
        assert!(!s.is_game_over(&Walls::default()));
    }
}
