// grid.rs - Grid types for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A `(row, col)` position in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Fixed-size grid of cells, each `0` (dead) or `1` (alive), stored row-major.
///
/// Dimensions are set once at construction and never change. The only way to
/// write a cell is through the edit methods, which store exactly `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid. Empty grids (`0 x n`, `n x 0`) are allowed.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let size = rows
            .checked_mul(cols)
            .ok_or(GridError::InvalidDimensions {
                rows,
                cols,
                reason: "cell count overflows",
            })?;

        tracing::debug!(rows, cols, "creating grid");
        Ok(Self {
            rows,
            cols,
            cells: vec![DEAD; size],
        })
    }

    /// Build a grid from explicit rows of cell values.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(height * width);

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::InvalidDimensions {
                    rows: height,
                    cols: width,
                    reason: "rows have different lengths",
                });
            }
            for (c, value) in row.into_iter().enumerate() {
                if value > ALIVE {
                    return Err(GridError::InvalidCell { row: r, col: c, value });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Build a grid of the given size with the listed cells alive.
    pub fn with_alive<I>(rows: usize, cols: usize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(rows, cols)?;
        for cell in alive {
            grid.set_alive(Coord::from(cell))?;
        }
        Ok(grid)
    }

    /// Assemble a grid from already validated row-major cells.
    pub(crate) fn from_raw(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[inline]
    pub(crate) fn index_of(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Cell value, or `None` off-grid.
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.contains(coord).then(|| self.cells[self.index_of(coord)])
    }

    /// Off-grid coordinates read as dead.
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord) == Some(ALIVE)
    }

    /// One row of cell values.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord { row, col }))
    }

    pub fn alive_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |&coord| self.is_alive(coord))
    }

    /// Mark a cell alive. This is the edit action the shell applies on click.
    pub fn set_alive(&mut self, coord: Coord) -> Result<(), GridError> {
        self.set(coord, true)
    }

    pub fn set(&mut self, coord: Coord, alive: bool) -> Result<(), GridError> {
        let idx = self.checked_index(coord)?;
        self.cells[idx] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, coord: Coord) -> Result<bool, GridError> {
        let idx = self.checked_index(coord)?;
        self.cells[idx] ^= ALIVE;
        Ok(self.cells[idx] == ALIVE)
    }

    /// Kill every cell; dimensions are kept.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index_of(coord))
    }
}

/// Text form: one line per row, `#` alive and `.` dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = if self.is_alive(Coord { row, col }) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the text form. `#`, `O` and `1` are alive; `.` and `0` are dead.
/// Blank lines and surrounding whitespace are ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (line_no, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(column, ch)| match ch {
                    '#' | 'O' | '1' => Ok(ALIVE),
                    '.' | '0' => Ok(DEAD),
                    found => Err(GridError::InvalidCharacter {
                        line: line_no,
                        column,
                        found,
                    }),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.len(), 24);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_empty_grids_are_valid() {
        assert!(Grid::new(0, 0).unwrap().is_empty());
        assert!(Grid::new(0, 5).unwrap().is_empty());
        assert!(Grid::new(5, 0).unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let err = Grid::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimensions { rows: 2, cols: 2, .. }));
    }

    #[test]
    fn test_from_rows_rejects_non_binary_values() {
        let err = Grid::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap_err();
        assert_eq!(err, GridError::InvalidCell { row: 1, col: 0, value: 2 });
    }

    #[test]
    fn test_index_of_is_row_major() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.index_of(Coord::new(0, 0)), 0);
        assert_eq!(grid.index_of(Coord::new(0, 3)), 3);
        assert_eq!(grid.index_of(Coord::new(1, 0)), 4);
        assert_eq!(grid.index_of(Coord::new(2, 3)), 11);
    }

    #[test]
    fn test_edits_and_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(Coord::new(1, 2)).unwrap();
        assert!(grid.is_alive(Coord::new(1, 2)));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(1));

        assert!(!grid.toggle(Coord::new(1, 2)).unwrap());
        assert!(grid.toggle(Coord::new(0, 0)).unwrap());
        assert_eq!(grid.population(), 1);

        let err = grid.set_alive(Coord::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds { coord: Coord::new(3, 0), rows: 3, cols: 3 }
        );
        assert_eq!(grid.get(Coord::new(0, 3)), None);
        assert!(!grid.is_alive(Coord::new(9, 9)));

        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.len(), 9);
    }

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "
            .#.
            ##.
        "
        .parse()
        .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(
            grid.alive_coords().collect::<Vec<_>>(),
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert_eq!(grid.to_string(), ".#.\n##.\n");
        assert_eq!(grid.row(1), Some(&[1, 1, 0][..]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        let err = "..\n.x".parse::<Grid>().unwrap_err();
        assert_eq!(err, GridError::InvalidCharacter { line: 1, column: 1, found: 'x' });
    }

    #[test]
    fn test_with_alive() {
        let grid = Grid::with_alive(2, 2, [(0, 0), (1, 1)]).unwrap();
        assert_eq!(grid.to_string(), "#.\n.#\n");
        assert!(Grid::with_alive(2, 2, [(2, 0)]).is_err());
    }
}
