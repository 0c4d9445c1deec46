use super::LifeCore;

pub(super) fn changed_ptr(world: &LifeCore) -> *const u32 {
    world.changed.as_ptr()
}

pub(super) fn changed_len(world: &LifeCore) -> usize {
    world.changed.len()
}

/// Changed indices as (row, col) pairs, for hosts that don't read raw memory
pub(super) fn changed_coords(world: &LifeCore) -> Vec<(u32, u32)> {
    world
        .changed
        .iter()
        .map(|&idx| world.grid.coords(idx as usize))
        .collect()
}
