mod net;
mod render;

pub use net::fetch_leaderboard;
pub use render::render_game;

use wasm_bindgen::prelude::*;

use common::{Direction, GameEngine, GameEvent, GamePhase};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// One browser game session: owns the engine, maps key presses to steering
/// and fire-and-forgets finished scores to the API.
#[wasm_bindgen]
pub struct GameClient {
    engine: GameEngine,
    api_base: String,
}

#[wasm_bindgen]
impl GameClient {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64, api_base: String) -> GameClient {
        GameClient {
            engine: GameEngine::new(seed as u64),
            api_base,
        }
    }

    /// Maps a `KeyboardEvent.key` value to a direction intent. Returns true
    /// when the key steered the snake (the first one also starts the game).
    pub fn handle_key(&mut self, key: &str, now_ms: f64) -> bool {
        let direction = match key {
            "ArrowUp" | "w" | "W" => Direction::Up,
            "ArrowDown" | "s" | "S" => Direction::Down,
            "ArrowLeft" | "a" | "A" => Direction::Left,
            "ArrowRight" | "d" | "D" => Direction::Right,
            _ => return false,
        };
        self.engine.steer(direction, now_ms as i64)
    }

    /// Advances the engine to `now_ms`. Returns true when the game reached
    /// its terminal state during this call; the score submission is already
    /// on its way by then.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let events = self.engine.run_until(now_ms as i64);
        let ended = events
            .iter()
            .any(|event| matches!(event, GameEvent::GameOver { .. }));
        if ended {
            if let Some(summary) = self.engine.summary() {
                net::submit_score_fire_and_forget(self.api_base.clone(), summary);
            }
        }
        ended
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn elapsed_secs(&self, now_ms: f64) -> u32 {
        self.engine.elapsed_secs(now_ms as i64) as u32
    }

    pub fn is_running(&self) -> bool {
        self.engine.phase() == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.phase() == GamePhase::GameOver
    }

    /// JSON projection of the board for `render_game`.
    pub fn state_json(&self) -> Result<String, JsValue> {
        self.engine
            .state_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
