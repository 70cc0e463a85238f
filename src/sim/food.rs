//! Food placement

use rand::Rng;

use crate::config::GridConfig;
use crate::sim::state::Cell;

/// Pick a fresh food cell, grid-aligned and uniform per axis
///
/// Both axes sample the width range, so on a board taller than wide the
/// bottom strip never receives food. The spawner is also blind to the snake,
/// so food can land under the body.
pub fn spawn_food(grid: &GridConfig, rng: &mut impl Rng) -> Cell {
    let cells = grid.cells_across();
    let x = rng.random_range(0..cells) * grid.unit;
    let y = rng.random_range(0..cells) * grid.unit;
    Cell::new(x, y)
}
