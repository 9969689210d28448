// patterns.rs - Named seed patterns and random fill

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Coord, Grid};

/// A named pattern, as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Set the pattern's cells alive with its top-left corner at `origin`.
    /// Cells that land off the grid are skipped; returns how many were set.
    pub fn stamp(&self, grid: &mut Grid, origin: Coord) -> usize {
        let mut placed = 0;
        for &(r, c) in self.cells {
            let coord = Coord::new(origin.row + r, origin.col + c);
            if grid.set_alive(coord).is_ok() {
                placed += 1;
            }
        }
        placed
    }

    /// Origin that centers the pattern on `grid` (clamped to the top-left
    /// when the pattern is larger than the grid).
    pub fn centered_origin(&self, grid: &Grid) -> Coord {
        let (h, w) = self.size();
        Coord::new(
            grid.rows().saturating_sub(h) / 2,
            grid.cols().saturating_sub(w) / 2,
        )
    }
}

/// Clear the grid and place `pattern` at its center.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    let origin = pattern.centered_origin(grid);
    let placed = pattern.stamp(grid, origin);
    tracing::debug!(pattern = pattern.name, ?origin, placed, "applied pattern");
}

/// Clear the grid and set each cell alive with probability `density`,
/// reproducibly for a given `seed`.
pub fn apply_random_pattern(grid: &mut Grid, seed: u64, density: f64) {
    grid.clear();
    let mut rng = StdRng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);

    let coords: Vec<Coord> = grid.coords().collect();
    for coord in coords {
        if rng.random_bool(density) {
            let _ = grid.set_alive(coord);
        }
    }
    tracing::debug!(seed, density, population = grid.population(), "applied random pattern");
}
