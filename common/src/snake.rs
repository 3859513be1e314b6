use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    /// The neighboring cell one step away in the given direction.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset in screen coordinates (y grows downward).
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Occupied cells, head first. Never empty.
    pub body: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake {
            body: VecDeque::from(vec![head]),
        }
    }

    pub fn head(&self) -> &Position {
        self.body.front().expect("Snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.body.contains(position)
    }

    /// Moves the head to `new_head`, keeping the tail in place when growing.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Position { x: 3, y: 3 });
        snake.advance(Position { x: 4, y: 3 }, false);
        assert_eq!(snake.len(), 1);
        assert_eq!(*snake.head(), Position { x: 4, y: 3 });
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(Position { x: 3, y: 3 });
        snake.advance(Position { x: 4, y: 3 }, true);
        assert_eq!(snake.len(), 2);
        assert_eq!(*snake.head(), Position { x: 4, y: 3 });
        assert!(snake.contains(&Position { x: 3, y: 3 }));
    }
}
