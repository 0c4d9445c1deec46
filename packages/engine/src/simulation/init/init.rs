use crate::grid::Grid;

use super::perf_stats::StepStats;
use super::settings::LifeConfig;
use super::LifeCore;

pub(super) fn create_life_core(config: LifeConfig) -> LifeCore {
    let size = config.grid_size;
    LifeCore {
        config,
        grid: Grid::new(size),
        // Back buffer for the double-buffered step
        back: Grid::new(size),
        population: 0,
        generation: 0,
        changed: Vec::with_capacity(size as usize * 4),
        perf_enabled: true,
        step_stats: StepStats::default(),
    }
}
