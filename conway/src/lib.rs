//! Conway's Game of Life grid stepper.
//!
//! A [`Stepper`] takes a [`Grid`] snapshot and produces the next generation
//! together with a [`DisplayTable`] telling a renderer how to paint each cell
//! for the current frame. Nothing here draws; the shell consumes the table.
//!
//! # Invariants
//! - Cells only ever hold `0` or `1`; grid dimensions never change.
//! - Stepping is pure: the input grid is never mutated.

pub mod display;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod step;


pub use display::{DisplayState, DisplayTable};
pub use error::GridError;
pub use grid::{Coord, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use rule::EdgePolicy;
pub use step::{RowStep, Step, Stepper, step};
