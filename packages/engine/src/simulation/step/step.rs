use crate::domain::cell::Cell;
use crate::grid::Grid;

use super::neighbors::live_neighbors;
use super::perf_timer::StepTimer;
use super::LifeCore;

/// Transitions produced by one generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepDelta {
    pub births: u32,
    pub deaths: u32,
}

/// Compute the next generation of `front` into `back`.
///
/// Neighbor counts read only `front`, so no transition can influence another
/// cell's count within the same step. `back` must have the same dimension;
/// its previous contents are overwritten. Indices of flipped cells are
/// written to `changed` (cleared first).
pub fn step_into(front: &Grid, back: &mut Grid, changed: &mut Vec<u32>) -> StepDelta {
    debug_assert_eq!(front.size(), back.size(), "step_into: buffer size mismatch");

    changed.clear();
    let mut delta = StepDelta::default();
    let size = front.size();
    let out = back.cells_mut();

    for row in 0..size {
        for col in 0..size {
            let idx = front.index(row, col);
            let current = front.cells()[idx];
            let next = current.next(live_neighbors(front, row, col));

            match (current, next) {
                (Cell::Dead, Cell::Live) => {
                    delta.births += 1;
                    changed.push(idx as u32);
                }
                (Cell::Live, Cell::Dead) => {
                    delta.deaths += 1;
                    changed.push(idx as u32);
                }
                _ => {}
            }

            out[idx] = next;
        }
    }

    delta
}

/// Pure form of the evolution rule.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.size());
    let mut changed = Vec::new();
    step_into(grid, &mut next, &mut changed);
    next
}

pub(super) fn step(world: &mut LifeCore) {
    let timer = if world.perf_enabled { Some(StepTimer::start()) } else { None };

    let delta = step_into(&world.grid, &mut world.back, &mut world.changed);
    std::mem::swap(&mut world.grid, &mut world.back);

    world.population = world.population + delta.births - delta.deaths;
    world.generation += 1;

    let stats = &mut world.step_stats;
    stats.births = delta.births;
    stats.deaths = delta.deaths;
    stats.changed = world.changed.len() as u32;
    stats.population = world.population;
    stats.generation = world.generation;
    stats.step_ms = timer.map(|t| t.elapsed_ms()).unwrap_or(0.0);
}
