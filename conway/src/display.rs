// display.rs - Per-cell render labels produced by a step

use crate::grid::Coord;

/// What the renderer should paint for a cell during the current frame.
///
/// Derived by every step and never written back into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayState {
    #[default]
    Background,
    AliveNow,
    DyingNext,
    AliveNext,
}

impl DisplayState {
    pub const ALL: [DisplayState; 4] = [
        DisplayState::Background,
        DisplayState::AliveNow,
        DisplayState::DyingNext,
        DisplayState::AliveNext,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DisplayState::Background => "background",
            DisplayState::AliveNow => "alive",
            DisplayState::DyingNext => "dying",
            DisplayState::AliveNext => "alive next",
        }
    }
}

/// Row-major table of display labels, same shape as the grid it describes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayTable {
    rows: usize,
    cols: usize,
    states: Vec<DisplayState>,
}

impl DisplayTable {
    pub(crate) fn from_raw(rows: usize, cols: usize, states: Vec<DisplayState>) -> Self {
        debug_assert_eq!(states.len(), rows * cols);
        Self { rows, cols, states }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, coord: Coord) -> Option<DisplayState> {
        (coord.row < self.rows && coord.col < self.cols)
            .then(|| self.states[coord.row * self.cols + coord.col])
    }

    /// Every cell with its label, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, DisplayState)> + '_ {
        let cols = self.cols.max(1);
        self.states
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Coord::new(i / cols, i % cols), state))
    }

    pub fn count(&self, state: DisplayState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_yields_row_major_coords() {
        let table = DisplayTable::from_raw(
            2,
            2,
            vec![
                DisplayState::Background,
                DisplayState::AliveNext,
                DisplayState::DyingNext,
                DisplayState::Background,
            ],
        );
        let cells: Vec<_> = table.iter().collect();
        assert_eq!(cells[1], (Coord::new(0, 1), DisplayState::AliveNext));
        assert_eq!(cells[2], (Coord::new(1, 0), DisplayState::DyingNext));
        assert_eq!(table.count(DisplayState::Background), 2);
        assert_eq!(table.get(Coord::new(1, 0)), Some(DisplayState::DyingNext));
        assert_eq!(table.get(Coord::new(2, 0)), None);
    }

    #[test]
    fn test_empty_table() {
        let table = DisplayTable::default();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
