use anyhow::{Result, ensure};
use serde::Serialize;

use crate::constants::{GRID_SIZE, TICK_INTERVAL_MS};
use crate::game_state::{GameEvent, GamePhase, GameState};
use crate::snake::Direction;

/// Tunables for a single game session.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid_size: i16,
    pub tick_interval_ms: u32,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        GameConfig {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed,
        }
    }
}

/// Score and play time reported once a game reaches its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub duration_secs: u64,
}

/// Owns a `GameState` and advances it on a fixed tick cadence.
///
/// The engine holds no timer of its own: callers pass wall-clock (or, in
/// tests, virtual) milliseconds into `run_until` and the engine catches up
/// on however many whole ticks have elapsed since the game started.
pub struct GameEngine {
    state: GameState,
    tick_interval_ms: u32,
    started_at_ms: Option<i64>,
    frozen_elapsed_secs: Option<u64>,
}

impl GameEngine {
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::new(seed))
    }

    pub fn with_config(config: GameConfig) -> Result<Self> {
        ensure!(config.grid_size >= 4, "grid size must be at least 4");
        ensure!(config.tick_interval_ms > 0, "tick interval must be nonzero");
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        GameEngine {
            state: GameState::new(config.grid_size, config.seed),
            tick_interval_ms: config.tick_interval_ms,
            started_at_ms: None,
            frozen_elapsed_secs: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Read-only view for render projections.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a direction intent. The first input while idle starts the
    /// game and records its start time; inputs after game over are ignored.
    pub fn steer(&mut self, requested: Direction, now_ms: i64) -> bool {
        match self.state.phase {
            GamePhase::GameOver => false,
            GamePhase::Idle => {
                self.state.phase = GamePhase::Running;
                self.started_at_ms = Some(now_ms);
                self.state.set_direction(requested)
            }
            GamePhase::Running => self.state.set_direction(requested),
        }
    }

    /// Runs every whole tick that has elapsed up to `now_ms`. Stops early
    /// when the game reaches a terminal state, freezing the elapsed time at
    /// the nominal time of the fatal tick.
    pub fn run_until(&mut self, now_ms: i64) -> Vec<GameEvent> {
        let mut out = Vec::new();
        let Some(started_at_ms) = self.started_at_ms else {
            return out;
        };
        if self.state.phase != GamePhase::Running {
            return out;
        }

        let elapsed_ms = (now_ms - started_at_ms).max(0);
        let target_tick = (elapsed_ms / self.tick_interval_ms as i64) as u32;

        while self.state.phase == GamePhase::Running && self.state.tick < target_tick {
            let fatal_tick = self.state.tick + 1;
            let events = self.state.advance();
            if self.state.phase == GamePhase::GameOver {
                let end_ms = fatal_tick as i64 * self.tick_interval_ms as i64;
                self.frozen_elapsed_secs = Some((end_ms / 1000) as u64);
            }
            out.extend(events);
        }
        out
    }

    /// Whole seconds of play time: zero while idle, monotonic while running,
    /// frozen at the value reached when game over was entered.
    pub fn elapsed_secs(&self, now_ms: i64) -> u64 {
        if let Some(frozen) = self.frozen_elapsed_secs {
            return frozen;
        }
        match self.started_at_ms {
            Some(started_at_ms) => ((now_ms - started_at_ms).max(0) / 1000) as u64,
            None => 0,
        }
    }

    /// Available once the game is over; what gets submitted to the score API.
    pub fn summary(&self) -> Option<ScoreSummary> {
        self.frozen_elapsed_secs.map(|duration_secs| ScoreSummary {
            score: self.state.score,
            duration_secs,
        })
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.started_at_ms = None;
        self.frozen_elapsed_secs = None;
    }

    pub fn state_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Position;

    #[test]
    fn idle_engine_never_ticks() {
        let mut engine = GameEngine::new(7);
        let events = engine.run_until(60_000);
        assert!(events.is_empty());
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert_eq!(engine.state().tick, 0);
        assert_eq!(engine.elapsed_secs(60_000), 0);
    }

    #[test]
    fn first_steer_starts_the_game() {
        let mut engine = GameEngine::new(7);
        assert!(engine.steer(Direction::Down, 1_000));
        assert_eq!(engine.phase(), GamePhase::Running);
    }

    #[test]
    fn run_until_catches_up_on_whole_ticks() {
        let mut engine = GameEngine::new(7);
        engine.state.food = Position { x: 0, y: 0 };
        engine.steer(Direction::Down, 1_000);

        engine.run_until(1_000);
        assert_eq!(engine.state().tick, 0);

        engine.run_until(1_350);
        assert_eq!(engine.state().tick, 3);
        assert_eq!(*engine.state().snake.head(), Position { x: 10, y: 13 });
    }

    #[test]
    fn wall_crash_freezes_elapsed_time() {
        let mut engine = GameEngine::new(7);
        engine.state.food = Position { x: 0, y: 0 };
        // Heading right from (10,10): nine safe ticks, the tenth hits x=20.
        engine.steer(Direction::Right, 0);
        let events = engine.run_until(5_000);

        assert_eq!(engine.phase(), GamePhase::GameOver);
        assert!(events.contains(&GameEvent::GameOver {
            cause: crate::game_state::GameOverCause::Wall
        }));
        assert_eq!(engine.state().tick, 9);
        assert_eq!(engine.elapsed_secs(5_000), 1);
        assert_eq!(engine.elapsed_secs(500_000), 1);
        assert_eq!(
            engine.summary(),
            Some(ScoreSummary {
                score: 0,
                duration_secs: 1
            })
        );
    }

    #[test]
    fn summary_is_none_before_game_over() {
        let mut engine = GameEngine::new(7);
        assert!(engine.summary().is_none());
        engine.steer(Direction::Up, 0);
        assert!(engine.summary().is_none());
    }

    #[test]
    fn elapsed_tracks_wall_clock_while_running() {
        let mut engine = GameEngine::new(7);
        engine.steer(Direction::Down, 2_000);
        assert_eq!(engine.elapsed_secs(2_000), 0);
        assert_eq!(engine.elapsed_secs(2_999), 0);
        assert_eq!(engine.elapsed_secs(4_500), 2);
    }

    #[test]
    fn steering_is_ignored_after_game_over() {
        let mut engine = GameEngine::new(7);
        engine.state.food = Position { x: 0, y: 0 };
        engine.steer(Direction::Right, 0);
        engine.run_until(10_000);
        assert_eq!(engine.phase(), GamePhase::GameOver);
        assert!(!engine.steer(Direction::Up, 11_000));
    }

    #[test]
    fn reset_detaches_the_previous_session() {
        let mut engine = GameEngine::new(7);
        engine.state.food = Position { x: 0, y: 0 };
        engine.steer(Direction::Right, 0);
        engine.run_until(10_000);
        assert_eq!(engine.phase(), GamePhase::GameOver);

        engine.reset();

        assert_eq!(engine.phase(), GamePhase::Idle);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.state().snake.len(), 1);
        assert_eq!(engine.elapsed_secs(999_000), 0);
        // No ticks run until the next game is started.
        assert!(engine.run_until(999_000).is_empty());
        assert!(engine.steer(Direction::Left, 999_000));
        assert_eq!(engine.phase(), GamePhase::Running);
    }

    #[test]
    fn config_is_validated() {
        assert!(GameEngine::with_config(GameConfig {
            grid_size: 2,
            tick_interval_ms: 100,
            seed: 1,
        })
        .is_err());
        assert!(GameEngine::with_config(GameConfig {
            grid_size: 20,
            tick_interval_ms: 0,
            seed: 1,
        })
        .is_err());
        assert!(GameEngine::with_config(GameConfig::new(1)).is_ok());
    }

    #[test]
    fn state_json_projects_the_board() {
        let engine = GameEngine::new(7);
        let json = engine.state_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["grid_size"], 20);
        assert_eq!(value["snake"]["body"][0]["x"], 10);
        assert!(value["food"]["x"].is_i64());
        assert_eq!(value["phase"], "Idle");
    }
}
