// step.rs - One generation: next grid plus the labels to paint this frame

use crate::display::{DisplayState, DisplayTable};
use crate::grid::{Coord, Grid};
use crate::rule::{EdgePolicy, classify, neighbor_count};

/// Result of evaluating every cell of a grid once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Next-generation grid, same dimensions as the input.
    pub next: Grid,
    /// Labels for the frame that was just evaluated.
    pub display: DisplayTable,
}

/// One evaluated row, tagged with its index so rows can finish in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStep {
    pub row: usize,
    pub next: Vec<u8>,
    pub display: Vec<DisplayState>,
}

impl Step {
    /// Assemble a step from every row of a `rows x cols` grid.
    ///
    /// Returns `None` unless each row index in `0..rows` appears exactly once
    /// with `cols` cells.
    pub fn from_rows<I>(rows: usize, cols: usize, parts: I) -> Option<Step>
    where
        I: IntoIterator<Item = RowStep>,
    {
        let mut next = vec![0; rows * cols];
        let mut display = vec![DisplayState::Background; rows * cols];
        let mut seen = vec![false; rows];

        for part in parts {
            if part.row >= rows
                || seen[part.row]
                || part.next.len() != cols
                || part.display.len() != cols
            {
                return None;
            }
            seen[part.row] = true;
            let span = part.row * cols..(part.row + 1) * cols;
            next[span.clone()].copy_from_slice(&part.next);
            display[span].copy_from_slice(&part.display);
        }

        seen.iter().all(|&s| s).then(|| Step {
            next: Grid::from_raw(rows, cols, next),
            display: DisplayTable::from_raw(rows, cols, display),
        })
    }
}

/// Applies the Game of Life rule to whole grids under one edge policy.
///
/// Stateless apart from the policy: every call reads its input grid and
/// returns fresh values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stepper {
    policy: EdgePolicy,
}

impl Stepper {
    pub fn new(policy: EdgePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Evaluate every cell. With `advance` true the caller adopts `next` as
    /// its grid; with `advance` false only `display` is of interest, though
    /// `next` is computed identically.
    pub fn step(&self, grid: &Grid, advance: bool) -> Step {
        let mut next = Vec::with_capacity(grid.len());
        let mut display = Vec::with_capacity(grid.len());

        for coord in grid.coords() {
            let current = grid.get(coord).unwrap_or_default();
            let (value, state) = classify(current, neighbor_count(grid, coord, self.policy), advance);
            next.push(value);
            display.push(state);
        }

        let next = Grid::from_raw(grid.rows(), grid.cols(), next);
        tracing::trace!(
            rows = grid.rows(),
            cols = grid.cols(),
            advance,
            before = grid.population(),
            after = next.population(),
            "stepped grid"
        );

        Step {
            next,
            display: DisplayTable::from_raw(grid.rows(), grid.cols(), display),
        }
    }

    /// Labels for the grid as it stands, without advancing time.
    pub fn paint(&self, grid: &Grid) -> DisplayTable {
        self.step(grid, false).display
    }

    /// Evaluate a single row. Returns `None` if `row` is off the grid.
    pub fn step_row(&self, grid: &Grid, row: usize, advance: bool) -> Option<RowStep> {
        let cells = grid.row(row)?;
        let (next, display) = cells
            .iter()
            .enumerate()
            .map(|(col, &current)| {
                let neighbors = neighbor_count(grid, Coord::new(row, col), self.policy);
                classify(current, neighbors, advance)
            })
            .unzip();

        Some(RowStep { row, next, display })
    }
}

/// `Stepper::step` with zero-padded edges.
pub fn step(grid: &Grid, advance: bool) -> Step {
    Stepper::default().step(grid, advance)
}
