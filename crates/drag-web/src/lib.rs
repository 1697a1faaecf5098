//! Browser entry points for the sprite-drag demo.
//!
//! The page calls `demo_init` once, then `demo_frame` from its
//! `requestAnimationFrame` callback (rescheduling while it returns `true`),
//! and forwards pointer events from the play area in play-area coordinates.

pub mod dom;
pub mod runner;

use std::cell::RefCell;

use drag_engine::{EngineError, EntityId, GameConfig, InputEvent};
use wasm_bindgen::prelude::*;

pub use dom::{DomSurface, DomVisual};
pub use runner::{install_once, DemoRunner};

/// Selector of the play area element.
pub const GAME_ROOT: &str = ".game";

thread_local! {
    static RUNNER: RefCell<Option<DemoRunner<DomSurface>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut DemoRunner<DomSurface>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("demo not initialized, call demo_init() first");
                None
            }
        }
    })
}

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Build the world inside `.game`. `config_json` overrides the default
/// layout (see `GameConfig`). Only the first successful call builds
/// anything; later calls are ignored.
#[wasm_bindgen]
pub fn demo_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref() {
        Some(json) => GameConfig::from_json(json).map_err(to_js)?,
        None => GameConfig::default(),
    };
    let installed = RUNNER
        .with(|cell| {
            let mut slot = cell.borrow_mut();
            install_once(&mut *slot, || {
                DemoRunner::new(DomSurface::new(GAME_ROOT)?, config)
            })
        })
        .map_err(to_js)?;

    if installed {
        log::info!("sprite-drag: initialized");
    } else {
        log::warn!("sprite-drag: already initialized, ignoring demo_init()");
    }
    Ok(())
}

/// Frame callback. `timestamp` is the `requestAnimationFrame` timestamp.
#[wasm_bindgen]
pub fn demo_frame(timestamp: f64) -> bool {
    with_runner(|r| r.frame(timestamp)).unwrap_or(false)
}

/// Pointer coordinates for these exports are relative to the play area's
/// top-left corner. `target` is the `data-entity-id` of the element under
/// the pointer.
#[wasm_bindgen]
pub fn demo_pointer_down(x: f32, y: f32, target: Option<u32>) {
    let target = target.map(EntityId);
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, target }));
}

#[wasm_bindgen]
pub fn demo_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn demo_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn demo_stop() {
    with_runner(|r| r.stop());
}
