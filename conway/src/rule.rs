// rule.rs - Neighbor counting and the B3/S23 transition

use std::ops::Range;

use crate::display::DisplayState;
use crate::grid::{ALIVE, Coord, DEAD, Grid};

/// How neighbors that fall off the grid are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Off-grid neighbors are dead.
    #[default]
    ZeroPad,
    /// Reproduces `cells[r-1:r+2, c-1:c+2]` slice arithmetic: index `-1`
    /// counts from the end, so on grids of 3 or more rows/cols the window for
    /// row 0 (or column 0) is empty, and slices past the end are clipped.
    LegacySlice,
}

impl EdgePolicy {
    /// Window of indices summed along one axis of length `len` around `i`.
    fn window(self, i: usize, len: usize) -> Range<usize> {
        let end = (i + 2).min(len);
        let start = match self {
            EdgePolicy::ZeroPad => i.saturating_sub(1),
            EdgePolicy::LegacySlice if i == 0 => len - 1,
            EdgePolicy::LegacySlice => i - 1,
        };
        start..end.max(start)
    }
}

/// Alive cells in the 3x3 block around `coord`, minus the cell itself.
///
/// Never exceeds 8. Under `LegacySlice` the cell's own value is subtracted
/// even when the window excludes it; the count saturates at 0.
pub fn neighbor_count(grid: &Grid, coord: Coord, policy: EdgePolicy) -> u8 {
    if !grid.contains(coord) {
        return 0;
    }

    let rows = policy.window(coord.row, grid.rows());
    let cols = policy.window(coord.col, grid.cols());

    let mut sum = 0u8;
    for row in rows {
        let Some(cells) = grid.row(row) else { continue };
        for &cell in &cells[cols.clone()] {
            sum += cell;
        }
    }

    sum.saturating_sub(grid.get(coord).unwrap_or(DEAD))
}

/// Next value and display label for one cell.
///
/// With `advance` false the label reflects the cell as it is now, so a paused
/// display shows edits without previewing the next generation.
pub fn classify(current: u8, neighbors: u8, advance: bool) -> (u8, DisplayState) {
    let alive = current == ALIVE;
    let next = match (alive, neighbors) {
        (true, 2) | (true, 3) => ALIVE, // Survival
        (false, 3) => ALIVE,            // Birth
        _ => DEAD,                      // Death or stays dead
    };

    let state = match (alive, next == ALIVE, advance) {
        (true, _, false) => DisplayState::AliveNow,
        (false, _, false) => DisplayState::Background,
        (true, false, true) => DisplayState::DyingNext,
        (_, true, true) => DisplayState::AliveNext,
        (false, false, true) => DisplayState::Background,
    };

    (next, state)
}
