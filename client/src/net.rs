use js_sys::Date;
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use common::{ScoreSubmission, ScoreSummary};

/// Posts a finished game's summary to the score API without blocking the
/// game loop. A failed submission is logged and dropped; the in-memory game
/// state is never touched from here.
pub fn submit_score_fire_and_forget(api_base: String, summary: ScoreSummary) {
    spawn_local(async move {
        let date = Date::new_0().to_locale_date_string("en-US", &JsValue::UNDEFINED);
        let submission = ScoreSubmission::new(summary, String::from(date));
        match submit_score(&api_base, &submission).await {
            Ok(()) => info!("submitted score {}", submission.score),
            Err(e) => error!("failed to submit score: {:?}", e),
        }
    });
}

async fn submit_score(api_base: &str, submission: &ScoreSubmission) -> Result<(), JsValue> {
    let body =
        serde_json::to_string(submission).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let url = format!("{}/api/scores", api_base);
    let request = Request::new_with_str_and_init(&url, &init)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    Ok(())
}

/// Fetches the current top scores as parsed JSON for the page to display.
#[wasm_bindgen]
pub async fn fetch_leaderboard(api_base: String) -> Result<JsValue, JsValue> {
    let url = format!("{}/api/scores", api_base);
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(&url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    JsFuture::from(response.json()?).await
}
