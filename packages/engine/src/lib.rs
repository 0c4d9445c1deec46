//! Life Engine - Conway's Game of Life for the browser in WASM
//!
//! The page handles rendering and input; this crate owns the board.
//!
//! Architecture:
//! - core/        - Grid storage, logging
//! - domain/      - Cell state and the B3/S23 rule
//! - simulation/  - LifeCore: counters, double-buffered step, commands
//! - session/     - Run state machine and the evolution timer
//! - api/         - wasm-bindgen surface

// Logging macro (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod simulation;
pub mod session;
pub mod api;

pub use crate::core::grid;
pub use domain::cell;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Life WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Life;
pub use cell::Cell;
pub use grid::Grid;
pub use session::{RunState, Session};
pub use simulation::{LifeConfig, LifeCore, StepStats};

// Export cell constants for JS
#[wasm_bindgen(js_name = cellDead)]
pub fn cell_dead() -> u8 { cell::CELL_DEAD }
#[wasm_bindgen(js_name = cellLive)]
pub fn cell_live() -> u8 { cell::CELL_LIVE }
