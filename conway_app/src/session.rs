// session.rs - Paused/running state machine around the grid stepper

use conway::patterns::{self, Pattern};
use conway::{Coord, DisplayTable, Grid, GridError, Step, Stepper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Paused,
    Running,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Paused => "Paused",
            Mode::Running => "Running",
        }
    }
}

/// Current grid, run mode and the labels to paint for this frame.
///
/// Starts paused with an all-dead grid. While paused the display is
/// refreshed without advancing time; while running each tick adopts the
/// stepper's next grid.
pub struct Session {
    grid: Grid,
    stepper: Stepper,
    mode: Mode,
    generation: u64,
    display: DisplayTable,
}

impl Session {
    pub fn new(rows: usize, cols: usize, stepper: Stepper) -> Result<Self, GridError> {
        let grid = Grid::new(rows, cols)?;
        let display = stepper.paint(&grid);
        Ok(Self {
            grid,
            stepper,
            mode: Mode::Paused,
            generation: 0,
            display,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn display(&self) -> &DisplayTable {
        &self.display
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Paused => Mode::Running,
            Mode::Running => Mode::Paused,
        };
        tracing::debug!(mode = self.mode.label(), generation = self.generation, "toggled");
        self.refresh();
        self.mode
    }

    /// Set a cell alive. Off-grid coordinates are ignored.
    pub fn paint_cell(&mut self, coord: Coord) -> bool {
        if self.grid.is_alive(coord) || self.grid.set_alive(coord).is_err() {
            return false;
        }
        if !self.is_running() {
            self.refresh();
        }
        true
    }

    /// Advance one generation if running, otherwise just repaint.
    pub fn tick(&mut self) -> bool {
        self.tick_with(|stepper, grid| stepper.step(grid, true))
    }

    /// `tick` with the generation computed by `advance`.
    pub fn tick_with<F>(&mut self, advance: F) -> bool
    where
        F: FnOnce(&Stepper, &Grid) -> Step,
    {
        if !self.is_running() {
            self.refresh();
            return false;
        }
        let step = advance(&self.stepper, &self.grid);
        self.adopt(step);
        true
    }

    /// Advance exactly one generation regardless of mode.
    pub fn step_once(&mut self) {
        let step = self.stepper.step(&self.grid, true);
        self.adopt(step);
    }

    pub fn clear(&mut self) {
        self.mode = Mode::Paused;
        self.grid.clear();
        self.generation = 0;
        self.refresh();
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.mode = Mode::Paused;
        patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;
        self.refresh();
    }

    pub fn randomize(&mut self, seed: u64) {
        self.mode = Mode::Paused;
        patterns::apply_random_pattern(&mut self.grid, seed, 1.0 / 3.0);
        self.generation = 0;
        self.refresh();
    }

    fn adopt(&mut self, step: Step) {
        debug_assert_eq!(step.next.rows(), self.grid.rows());
        debug_assert_eq!(step.next.cols(), self.grid.cols());
        self.grid = step.next;
        self.display = step.display;
        self.generation += 1;
    }

    fn refresh(&mut self) {
        self.display = self.stepper.paint(&self.grid);
    }
}

/// Map a pixel offset from the grid's top-left corner to a cell.
pub fn cell_at(x: f32, y: f32, cell_size: f32, rows: usize, cols: usize) -> Option<Coord> {
    if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let row = (y / cell_size) as usize;
    let col = (x / cell_size) as usize;
    (row < rows && col < cols).then_some(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::DisplayState;

    fn session() -> Session {
        Session::new(6, 6, Stepper::default()).unwrap()
    }

    fn blinker(session: &mut Session) {
        for col in 1..4 {
            assert!(session.paint_cell(Coord::new(2, col)));
        }
    }

    #[test]
    fn test_starts_paused_and_empty() {
        let s = session();
        assert_eq!(s.mode(), Mode::Paused);
        assert_eq!(s.generation(), 0);
        assert_eq!(s.grid().population(), 0);
        assert_eq!(s.display().count(DisplayState::Background), 36);
    }

    #[test]
    fn test_paused_tick_does_not_advance() {
        let mut s = session();
        blinker(&mut s);
        assert!(!s.tick());
        assert_eq!(s.generation(), 0);
        assert_eq!(s.grid().population(), 3);
        assert_eq!(s.display().count(DisplayState::AliveNow), 3);
    }

    #[test]
    fn test_running_tick_advances() {
        let mut s = session();
        blinker(&mut s);
        assert_eq!(s.toggle(), Mode::Running);

        assert!(s.tick());
        assert_eq!(s.generation(), 1);
        assert!(s.grid().is_alive(Coord::new(1, 2)));
        assert!(!s.grid().is_alive(Coord::new(2, 1)));
        assert_eq!(s.display().get(Coord::new(2, 1)), Some(DisplayState::DyingNext));

        assert!(s.tick());
        assert_eq!(s.generation(), 2);
        assert!(s.grid().is_alive(Coord::new(2, 1)));

        assert_eq!(s.toggle(), Mode::Paused);
        assert!(!s.tick());
        assert_eq!(s.generation(), 2);
    }

    #[test]
    fn test_tick_with_custom_evaluation() {
        let mut s = session();
        blinker(&mut s);
        s.toggle();
        let mut called = false;
        s.tick_with(|stepper, grid| {
            called = true;
            stepper.step(grid, true)
        });
        assert!(called);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_paint_cell_ignores_off_grid_and_repeats() {
        let mut s = session();
        assert!(!s.paint_cell(Coord::new(6, 0)));
        assert!(s.paint_cell(Coord::new(0, 0)));
        assert!(!s.paint_cell(Coord::new(0, 0)));
        assert_eq!(s.display().get(Coord::new(0, 0)), Some(DisplayState::AliveNow));
    }

    #[test]
    fn test_clear_and_patterns_pause() {
        let mut s = session();
        blinker(&mut s);
        s.toggle();
        s.tick();
        s.clear();
        assert_eq!(s.mode(), Mode::Paused);
        assert_eq!(s.generation(), 0);
        assert_eq!(s.grid().population(), 0);

        s.toggle();
        s.apply_pattern(Pattern::find("Glider").unwrap());
        assert_eq!(s.mode(), Mode::Paused);
        assert_eq!(s.grid().population(), 5);

        s.randomize(3);
        assert_eq!(s.mode(), Mode::Paused);
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_step_once_while_paused() {
        let mut s = session();
        blinker(&mut s);
        s.step_once();
        assert_eq!(s.mode(), Mode::Paused);
        assert_eq!(s.generation(), 1);
        assert!(s.grid().is_alive(Coord::new(3, 2)));
    }

    #[test]
    fn test_cell_at() {
        assert_eq!(cell_at(0.0, 0.0, 10.0, 4, 5), Some(Coord::new(0, 0)));
        assert_eq!(cell_at(49.9, 39.9, 10.0, 4, 5), Some(Coord::new(3, 4)));
        assert_eq!(cell_at(25.0, 12.0, 10.0, 4, 5), Some(Coord::new(1, 2)));
        assert_eq!(cell_at(50.0, 0.0, 10.0, 4, 5), None);
        assert_eq!(cell_at(0.0, 40.0, 10.0, 4, 5), None);
        assert_eq!(cell_at(-1.0, 0.0, 10.0, 4, 5), None);
    }
}
