use crate::domain::cell::Cell;
use crate::grid::Grid;

use super::LifeCore;

pub(super) fn toggle(world: &mut LifeCore, row: u32, col: u32) -> Option<Cell> {
    let size = world.grid.size();
    if row >= size || col >= size {
        return None;
    }

    let next = world.grid.toggle(row, col);
    match next {
        Cell::Live => world.population += 1,
        Cell::Dead => world.population -= 1,
    }

    world.changed.clear();
    world.changed.push(world.grid.index(row, col) as u32);
    Some(next)
}

pub(super) fn reset(world: &mut LifeCore) {
    world.grid.clear();
    world.back.clear();
    world.changed.clear();
    world.step_stats.reset();
    world.population = 0;
    world.generation = 0;
}

pub(super) fn replace(world: &mut LifeCore, grid: Grid) -> Result<(), String> {
    if grid.size() != world.grid.size() {
        return Err(format!(
            "grid size mismatch: expected {}x{}, got {}x{}",
            world.grid.size(),
            world.grid.size(),
            grid.size(),
            grid.size()
        ));
    }

    // Every index may have changed; report the ones that actually did
    world.changed.clear();
    for (idx, (old, new)) in world.grid.cells().iter().zip(grid.cells()).enumerate() {
        if old != new {
            world.changed.push(idx as u32);
        }
    }

    world.population = grid.live_count();
    world.grid = grid;
    Ok(())
}
