// error.rs - Errors raised when building or editing a grid

use crate::grid::Coord;

/// Errors from grid construction and edits.
///
/// Stepping itself never fails; malformed grids are rejected here, before a
/// `Grid` value exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid dimensions: {rows} x {cols} ({reason})")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },
    #[error("invalid cell value {value} at ({row}, {col}); expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("invalid character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("cell ({}, {}) is outside the {rows} x {cols} grid", coord.row, coord.col)]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
}
