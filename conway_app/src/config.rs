// config.rs - Command line options and the colors handed to the renderer

use std::time::Duration;

use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};
use conway::{DisplayState, EdgePolicy};
use egui::Color32;

#[derive(Parser, Debug)]
#[command(name = "conway_app", about = "Conway's Game of Life")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Grid height in cells
    #[arg(long, default_value_t = 108)]
    pub rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 192)]
    pub cols: usize,

    /// Pixels per cell
    #[arg(long, default_value_t = 10)]
    pub cell_size: u32,

    /// Delay between generations while running
    #[arg(long, default_value_t = 1)]
    pub frame_delay_ms: u64,

    /// How neighbors beyond the grid border are counted
    #[arg(long, value_enum, default_value_t = Edge::ZeroPad)]
    pub edge: Edge,

    /// Evaluate each generation as one tokio task per row
    #[arg(long)]
    pub row_tasks: bool,

    /// Seed for the first random fill
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    ZeroPad,
    LegacySlice,
}

impl From<Edge> for EdgePolicy {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::ZeroPad => EdgePolicy::ZeroPad,
            Edge::LegacySlice => EdgePolicy::LegacySlice,
        }
    }
}

/// Color for each display state, plus the gap color between cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub grid: Color32,
    pub background: Color32,
    pub alive_now: Color32,
    pub dying_next: Color32,
    pub alive_next: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Color32::from_rgb(249, 237, 187),
            background: Color32::from_rgb(255, 246, 213),
            alive_now: Color32::from_rgb(93, 50, 43),
            dying_next: Color32::from_rgb(185, 157, 136),
            alive_next: Color32::from_rgb(93, 50, 43),
        }
    }
}

impl Palette {
    pub fn color(&self, state: DisplayState) -> Color32 {
        match state {
            DisplayState::Background => self.background,
            DisplayState::AliveNow => self.alive_now,
            DisplayState::DyingNext => self.dying_next,
            DisplayState::AliveNext => self.alive_next,
        }
    }

    pub fn color_mut(&mut self, state: DisplayState) -> &mut Color32 {
        match state {
            DisplayState::Background => &mut self.background,
            DisplayState::AliveNow => &mut self.alive_now,
            DisplayState::DyingNext => &mut self.dying_next,
            DisplayState::AliveNext => &mut self.alive_next,
        }
    }
}

/// Validated shell settings.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub frame_delay: Duration,
    pub edge: EdgePolicy,
    pub row_tasks: bool,
    pub seed: u64,
    pub palette: Palette,
}

impl TryFrom<&Cli> for ShellConfig {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        ensure!(cli.rows > 0 && cli.cols > 0, "grid must have at least one cell, got {} x {}", cli.rows, cli.cols);
        ensure!(cli.cell_size >= 2, "cell size must be at least 2 pixels, got {}", cli.cell_size);

        Ok(Self {
            rows: cli.rows,
            cols: cli.cols,
            cell_size: cli.cell_size as f32,
            frame_delay: Duration::from_millis(cli.frame_delay_ms),
            edge: cli.edge.into(),
            row_tasks: cli.row_tasks,
            seed: cli.seed,
            palette: Palette::default(),
        })
    }
}

impl ShellConfig {
    /// Pixel size of the drawn grid.
    pub fn canvas_size(&self) -> [f32; 2] {
        [self.cols as f32 * self.cell_size, self.rows as f32 * self.cell_size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["conway_app"]);
        let config = ShellConfig::try_from(&cli).unwrap();
        assert_eq!((config.rows, config.cols), (108, 192));
        assert_eq!(config.cell_size, 10.0);
        assert_eq!(config.frame_delay, Duration::from_millis(1));
        assert_eq!(config.edge, EdgePolicy::ZeroPad);
        assert!(!config.row_tasks);
        assert_eq!(config.canvas_size(), [1920.0, 1080.0]);
    }

    #[test]
    fn test_edge_and_flags() {
        let cli = Cli::parse_from([
            "conway_app", "--edge", "legacy-slice", "--row-tasks", "--rows", "5", "--cols", "7",
        ]);
        let config = ShellConfig::try_from(&cli).unwrap();
        assert_eq!(config.edge, EdgePolicy::LegacySlice);
        assert!(config.row_tasks);
        assert_eq!((config.rows, config.cols), (5, 7));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let cli = Cli::parse_from(["conway_app", "--cell-size", "1"]);
        assert!(ShellConfig::try_from(&cli).is_err());
        let cli = Cli::parse_from(["conway_app", "--rows", "0"]);
        assert!(ShellConfig::try_from(&cli).is_err());
    }

    #[test]
    fn test_palette_maps_every_state() {
        let palette = Palette::default();
        assert_eq!(palette.color(DisplayState::Background), Color32::from_rgb(255, 246, 213));
        assert_eq!(palette.color(DisplayState::DyingNext), Color32::from_rgb(185, 157, 136));
        assert_eq!(
            palette.color(DisplayState::AliveNow),
            palette.color(DisplayState::AliveNext)
        );
    }
}
