//! LifeCore - grid state, counters and the generation step
//!
//! Owns the live grid plus a same-sized back buffer. A step writes the next
//! generation into the back buffer from the untouched front grid, then swaps
//! the two, so the grid is replaced wholesale each tick.
//!
//! Invariants:
//! - `population == grid.live_count()` after every public operation
//! - `generation` counts steps since construction or the last `reset`

use crate::domain::cell::Cell;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/neighbors.rs"]
mod neighbors;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;

pub use neighbors::live_neighbors;
pub use perf_stats::StepStats;
pub use settings::{LifeConfig, DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_SIZE, DEFAULT_TICK_MS, MAX_GRID_SIZE};
pub use step::{next_generation, step_into, StepDelta};

pub struct LifeCore {
    config: LifeConfig,
    grid: Grid,
    back: Grid,

    // Counters
    population: u32,
    generation: u64,

    // Row-major indices flipped by the last step/toggle/replace
    changed: Vec<u32>,

    perf_enabled: bool,
    step_stats: StepStats,
}

impl LifeCore {
    /// Empty N×N board with default timing
    pub fn new(size: u32) -> Self {
        init::create_life_core(LifeConfig::with_grid_size(size))
    }

    pub fn with_config(config: LifeConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_life_core(config))
    }

    pub fn config(&self) -> LifeConfig {
        settings::get_config(self)
    }

    pub fn size(&self) -> u32 { self.grid.size() }

    pub fn population(&self) -> u32 { self.population }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        let size = self.grid.size();
        (row < size && col < size).then(|| self.grid.get(row, col))
    }

    /// Flip a cell between dead and live.
    ///
    /// Returns the new state, or `None` (no-op) when the coordinates are off
    /// the board.
    pub fn toggle(&mut self, row: u32, col: u32) -> Option<Cell> {
        commands::toggle(self, row, col)
    }

    /// Fresh all-dead board of the same size; counters back to zero
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    /// Swap in a whole grid. Population is recomputed, generation is kept.
    pub fn replace(&mut self, grid: Grid) -> Result<(), String> {
        commands::replace(self, grid)
    }

    /// Advance one generation
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Turn step wall-time measurement on or off (births/deaths are always recorded)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    pub fn step_stats(&self) -> StepStats {
        self.step_stats
    }

    /// Get pointer to cell bytes (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.as_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.len()
    }

    pub fn changed_cells(&self) -> &[u32] {
        &self.changed
    }

    pub fn changed_ptr(&self) -> *const u32 {
        render_extract::changed_ptr(self)
    }

    pub fn changed_len(&self) -> usize {
        render_extract::changed_len(self)
    }

    pub fn changed_coords(&self) -> Vec<(u32, u32)> {
        render_extract::changed_coords(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
