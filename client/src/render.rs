use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Renders a game state projection onto a canvas element.
/// Takes the JSON string produced by `GameClient::state_json`.
#[wasm_bindgen]
pub fn render_game(
    state_json: &str,
    canvas: web_sys::HtmlCanvasElement,
    cell_size: f64,
) -> Result<(), JsValue> {
    let state: Value = serde_json::from_str(state_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse game state: {}", e)))?;

    let context = canvas
        .get_context("2d")
        .map_err(|_| JsValue::from_str("Failed to get 2d context"))?
        .ok_or_else(|| JsValue::from_str("2d context is null"))?;
    let ctx = context
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Failed to cast to 2d context"))?;

    let grid_size = state["grid_size"].as_i64().unwrap_or(20);
    let board = grid_size as f64 * cell_size;

    // Board background
    ctx.set_fill_style(&JsValue::from_str("#1f2937"));
    ctx.fill_rect(0.0, 0.0, board, board);

    // Dots at interior grid intersections
    ctx.set_fill_style(&JsValue::from_str("rgba(255, 255, 255, 0.08)"));
    for x in 1..grid_size {
        for y in 1..grid_size {
            ctx.begin_path();
            ctx.arc(
                x as f64 * cell_size,
                y as f64 * cell_size,
                1.0,
                0.0,
                2.0 * std::f64::consts::PI,
            )?;
            ctx.fill();
        }
    }

    // Food as a circle with a light reflection in the top-left
    if let (Some(x), Some(y)) = (state["food"]["x"].as_i64(), state["food"]["y"].as_i64()) {
        let center_x = x as f64 * cell_size + cell_size / 2.0;
        let center_y = y as f64 * cell_size + cell_size / 2.0;
        let radius = cell_size / 2.0 - 1.0;

        ctx.set_fill_style(&JsValue::from_str("#ef4444"));
        ctx.begin_path();
        ctx.arc(center_x, center_y, radius, 0.0, 2.0 * std::f64::consts::PI)?;
        ctx.fill();

        ctx.set_fill_style(&JsValue::from_str("#f87171"));
        ctx.begin_path();
        ctx.arc(
            center_x - radius * 0.35,
            center_y - radius * 0.35,
            radius * 0.25,
            0.0,
            2.0 * std::f64::consts::PI,
        )?;
        ctx.fill();
    }

    // Snake segments, head drawn last in a lighter shade
    if let Some(body) = state["snake"]["body"].as_array() {
        for (index, segment) in body.iter().enumerate().rev() {
            if let (Some(x), Some(y)) = (segment["x"].as_i64(), segment["y"].as_i64()) {
                let color = if index == 0 { "#4ade80" } else { "#22c55e" };
                ctx.set_fill_style(&JsValue::from_str(color));
                ctx.fill_rect(
                    x as f64 * cell_size + 1.0,
                    y as f64 * cell_size + 1.0,
                    cell_size - 2.0,
                    cell_size - 2.0,
                );
            }
        }
    }

    Ok(())
}
