use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{FOOD_PLACEMENT_ATTEMPTS, FOOD_POINTS};
use crate::snake::{Direction, Position, Snake};
use crate::util::PseudoRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to place food.
    BoardFull,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { position: Position },
    FoodSpawned { position: Position },
    GameOver { cause: GameOverCause },
}

/// Full state of one game. Owned by `GameEngine`; the render layer only
/// ever sees a serialized projection of it.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub grid_size: i16,
    pub snake: Snake,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub tick: u32,
    pub phase: GamePhase,
    #[serde(skip)]
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(grid_size: i16, seed: u64) -> Self {
        Self::with_rng(grid_size, PseudoRandom::new(seed))
    }

    fn with_rng(grid_size: i16, rng: PseudoRandom) -> Self {
        let center = Position {
            x: grid_size / 2,
            y: grid_size / 2,
        };
        let mut state = GameState {
            grid_size,
            snake: Snake::new(center),
            direction: Direction::Right,
            food: center,
            score: 0,
            tick: 0,
            phase: GamePhase::Idle,
            rng,
        };
        state.food = state
            .place_food()
            .expect("a fresh grid always has a free cell");
        state
    }

    /// Returns to the idle configuration. The RNG stream carries over so
    /// consecutive games get different boards.
    pub fn reset(&mut self) {
        *self = Self::with_rng(self.grid_size, self.rng.clone());
    }

    /// Applies a direction change. The direct opposite of the current
    /// direction is rejected while the snake is longer than one cell, since
    /// reversing in place would be an instant self-collision.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() && self.snake.len() > 1 {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Advances the game by one tick: move the head, detect terminal
    /// collisions, eat and respawn food. On a terminal tick the snake is
    /// left exactly as it was before the move.
    pub fn advance(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Running {
            return events;
        }

        let new_head = self.snake.head().step(self.direction);
        if !self.in_bounds(&new_head) {
            self.end_game(GameOverCause::Wall, &mut events);
            return events;
        }
        if self.snake.contains(&new_head) {
            self.end_game(GameOverCause::SelfCollision, &mut events);
            return events;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);
        if ate {
            self.score += FOOD_POINTS;
            events.push(GameEvent::FoodEaten { position: new_head });
            match self.place_food() {
                Some(position) => {
                    self.food = position;
                    events.push(GameEvent::FoodSpawned { position });
                }
                None => {
                    self.end_game(GameOverCause::BoardFull, &mut events);
                    return events;
                }
            }
        }

        self.tick += 1;
        events
    }

    /// Draws a food position not occupied by the snake. Rejection-samples a
    /// bounded number of cells, then falls back to choosing among the free
    /// cells directly. `None` means the snake covers the whole grid.
    pub fn place_food(&mut self) -> Option<Position> {
        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            let candidate = self.random_cell();
            if !self.snake.contains(&candidate) {
                return Some(candidate);
            }
        }

        warn!(
            "food placement exhausted {} draws, scanning for free cells",
            FOOD_PLACEMENT_ATTEMPTS
        );
        let grid_size = self.grid_size;
        let snake = &self.snake;
        let free: Vec<Position> = (0..grid_size)
            .flat_map(|y| (0..grid_size).map(move |x| Position { x, y }))
            .filter(|cell| !snake.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        let index = self.rng.next_u32() as usize % free.len();
        Some(free[index])
    }

    fn random_cell(&mut self) -> Position {
        Position {
            x: (self.rng.next_u32() % self.grid_size as u32) as i16,
            y: (self.rng.next_u32() % self.grid_size as u32) as i16,
        }
    }

    fn in_bounds(&self, position: &Position) -> bool {
        position.x >= 0
            && position.x < self.grid_size
            && position.y >= 0
            && position.y < self.grid_size
    }

    fn end_game(&mut self, cause: GameOverCause, events: &mut Vec<GameEvent>) {
        self.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { cause });
    }
}
