//! Browser bridge for `bunny-engine`.
//!
//! One [`GameRunner`] lives in a `thread_local!` and every export below
//! borrows it. Bulk per-frame data (render instances, wire events) is read by
//! the host straight out of linear memory through the pointer accessors; small
//! structured views (HUD, results, level list) are returned as JSON.

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use bunny_engine::{InputEvent, LevelError};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<GameRunner> = RefCell::new(GameRunner::default());
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| f(&mut cell.borrow_mut()))
}

fn to_js(err: LevelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Set up logging and load config and levels. Empty strings use the built-ins.
#[wasm_bindgen]
pub fn game_init(config_json: &str, levels_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    with_runner(|r| r.configure(config_json, levels_json)).map_err(to_js)?;
    log::info!("bunny-web: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn game_set_bindings(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.set_bindings(json)).map_err(to_js)
}

/// Advance by `dt` seconds of wall time. Returns the number of fixed ticks run.
#[wasm_bindgen]
pub fn game_tick(dt: f32) -> u32 {
    with_runner(|r| r.tick(dt))
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

/// Window blur: nothing stays held.
#[wasm_bindgen]
pub fn game_release_all() {
    with_runner(|r| r.push_input(InputEvent::ReleaseAll));
}

// ---- Progression ----

#[wasm_bindgen]
pub fn game_select_level(index: u32) -> Result<(), JsValue> {
    with_runner(|r| r.select_level(index as usize)).map_err(to_js)
}

#[wasm_bindgen]
pub fn game_restart_level() -> Result<(), JsValue> {
    with_runner(|r| r.restart_level()).map_err(to_js)
}

#[wasm_bindgen]
pub fn game_acknowledge() -> Result<(), JsValue> {
    with_runner(|r| r.acknowledge()).map_err(to_js)
}

#[wasm_bindgen]
pub fn game_return_to_select() {
    with_runner(|r| r.return_to_select());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_actor_split() -> u32 {
    with_runner(|r| r.actor_split())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_level_count() -> u32 {
    with_runner(|r| r.campaign().catalog().len() as u32)
}

#[wasm_bindgen]
pub fn get_hud_json() -> Result<String, JsValue> {
    with_runner(|r| r.hud_json()).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_results_json() -> Result<String, JsValue> {
    with_runner(|r| r.results_json()).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_levels_json() -> Result<String, JsValue> {
    with_runner(|r| r.levels_json()).map_err(to_js)
}
