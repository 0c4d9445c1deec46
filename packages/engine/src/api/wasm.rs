use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::grid::Grid;
use crate::session::{IntervalScheduler, Session};
use crate::simulation::{LifeConfig, LifeCore, StepStats};

/// Browser-facing Game of Life board.
///
/// The page owns the DOM/canvas; it forwards clicks and button presses here
/// and redraws from `cellsPtr` (or `cells()`) plus the counters, typically
/// inside the `setOnTick` listener.
///
/// Every method takes `&self`: the listener runs while a `step()` call (or a
/// timer tick) is still on the stack, and it must be able to read the board
/// or call `stop`/`clear` without tripping wasm-bindgen's exclusive borrow.
#[wasm_bindgen]
pub struct Life {
    session: RefCell<Session<IntervalScheduler>>,
}

impl Life {
    fn from_config(config: LifeConfig) -> Result<Life, JsValue> {
        let core = LifeCore::with_config(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            session: RefCell::new(Session::new(core, IntervalScheduler::new())),
        })
    }
}

#[wasm_bindgen]
impl Life {
    /// Create an empty `size`×`size` board with default timing
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Result<Life, JsValue> {
        Self::from_config(LifeConfig::with_grid_size(size))
    }

    /// Create from a JSON config: `{ "gridSize": 40, "tickMs": 100, "cellSizePx": 20 }`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<Life, JsValue> {
        let config = LifeConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        engine_log!(
            "life: config loaded ({}x{}, tick {}ms)",
            config.grid_size,
            config.grid_size,
            config.tick_ms
        );
        Self::from_config(config)
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.session.borrow().core().size() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.session.borrow().core().population() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.session.borrow().core().generation() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.session.borrow().is_running() }

    #[wasm_bindgen(getter, js_name = tickMs)]
    pub fn tick_ms(&self) -> u32 { self.session.borrow().core().config().tick_ms }

    #[wasm_bindgen(getter, js_name = cellSizePx)]
    pub fn cell_size_px(&self) -> u32 { self.session.borrow().core().config().cell_size_px }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.session.borrow().core().config().to_json()
    }

    /// Flip a cell. Returns the new state (0/1), or `undefined` off the board.
    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&self, row: u32, col: u32) -> Option<u8> {
        self.session.borrow_mut().toggle_cell(row, col).map(|c| c as u8)
    }

    /// Start the evolution timer. No-op when already running.
    pub fn start(&self) -> Result<(), JsValue> {
        self.session.borrow_mut().start().map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Stop the evolution timer. No-op when not running.
    pub fn stop(&self) {
        self.session.borrow_mut().stop();
    }

    /// Stop and reset the board, population and generation
    pub fn clear(&self) {
        self.session.borrow_mut().clear();
    }

    /// Advance a single generation by hand (also notifies the listener)
    pub fn step(&self) {
        // Release the session before the listener runs
        let ticker = self.session.borrow().ticker();
        ticker.tick();
    }

    /// Replace the board with `size * size` row-major 0/1 bytes
    #[wasm_bindgen(js_name = loadCells)]
    pub fn load_cells(&self, cells: Vec<u8>) -> Result<(), JsValue> {
        let size = self.session.borrow().core().size();
        let grid = Grid::from_cells(size, &cells).map_err(|e| JsValue::from_str(&e))?;
        self.session
            .borrow()
            .core_mut()
            .replace(grid)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Register a JS function called after every generation. The listener may
    /// read any getter and call `stop`/`clear`; during a timer tick it may
    /// also free this object.
    #[wasm_bindgen(js_name = setOnTick)]
    pub fn set_on_tick(&self, callback: js_sys::Function) {
        self.session.borrow_mut().set_listener(move || {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                engine_log!("life: onTick listener threw: {:?}", err);
            }
        });
    }

    #[wasm_bindgen(js_name = clearOnTick)]
    pub fn clear_on_tick(&self) {
        self.session.borrow_mut().clear_listener();
    }

    /// Cell state at (row, col): 0 dead, 1 live, `undefined` off the board
    pub fn cell(&self, row: u32, col: u32) -> Option<u8> {
        self.session.borrow().core().cell(row, col).map(|c| c as u8)
    }

    /// Copy of the board as row-major 0/1 bytes
    pub fn cells(&self) -> Vec<u8> {
        self.session.borrow().core().grid().to_bytes()
    }

    /// Get pointer to cell bytes (for zero-copy rendering from wasm memory)
    #[wasm_bindgen(js_name = cellsPtr)]
    pub fn cells_ptr(&self) -> *const u8 {
        self.session.borrow().core().cells_ptr()
    }

    #[wasm_bindgen(js_name = cellsLen)]
    pub fn cells_len(&self) -> usize {
        self.session.borrow().core().cells_len()
    }

    /// Get pointer to the row-major indices changed by the last step/toggle
    #[wasm_bindgen(js_name = changedPtr)]
    pub fn changed_ptr(&self) -> *const u32 {
        self.session.borrow().core().changed_ptr()
    }

    #[wasm_bindgen(js_name = changedLen)]
    pub fn changed_len(&self) -> usize {
        self.session.borrow().core().changed_len()
    }

    /// Stats for the last step (zeros after clear)
    #[wasm_bindgen(js_name = getStepStats)]
    pub fn get_step_stats(&self) -> StepStats {
        self.session.borrow().core().step_stats()
    }
}
