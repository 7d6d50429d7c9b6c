use rand::Rng;

use crate::basic::{Grid, Position};

/// Sorted, deduplicated row-major indices of the given cells,
/// cells outside the board are ignored
pub fn occupied_indices(grid: &Grid, cells: impl IntoIterator<Item = Position>) -> Vec<usize> {
    let mut occupied = cells
        .into_iter()
        .filter(|pos| grid.contains(*pos))
        .map(|pos| grid.index(pos))
        .collect::<Vec<_>>();
    occupied.sort_unstable();
    occupied.dedup();
    occupied
}

/// Uniformly pick one of the cells not listed in `occupied`
/// (as returned by [`occupied_indices`]), `None` if there are none left
pub fn random_free_cell(grid: &Grid, occupied: &[usize], rng: &mut impl Rng) -> Option<Position> {
    let free_cells = grid.cell_count() - occupied.len();
    if free_cells == 0 {
        return None;
    }

    // the n-th free cell: skip over every occupied index at or before it
    let mut new_idx = rng.gen_range(0..free_cells);
    for &idx in occupied {
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    debug_assert!(new_idx < grid.cell_count());
    Some(grid.position_of(new_idx))
}
