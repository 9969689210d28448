// main.rs - Conway's Game of Life desktop shell
// Rule evaluation lives in the `conway` crate; this crate owns the window,
// input, pacing and colors.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use conway::Stepper;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod config;
mod coro;
mod session;
mod ui;

use config::{Cli, ShellConfig};
use session::Session;

/// Height reserved above the grid for the controls.
const CONTROLS_HEIGHT: f32 = 90.0;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = ShellConfig::try_from(&cli)?;
    let app = GameOfLife::new(config)?;

    let [width, height] = app.config.canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width + 20.0, height + CONTROLS_HEIGHT]),
        ..Default::default()
    };

    tracing::info!(
        rows = app.config.rows,
        cols = app.config.cols,
        edge = ?app.config.edge,
        row_tasks = app.config.row_tasks,
        "starting"
    );

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}

/// Shell state: the session plus everything needed to pace and draw it.
pub struct GameOfLife {
    pub session: Session,
    pub config: ShellConfig,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub selected_pattern: usize,
    pub next_seed: u64,

    runtime: Option<tokio::runtime::Runtime>,
}

impl GameOfLife {
    pub fn new(config: ShellConfig) -> Result<Self> {
        let session = Session::new(config.rows, config.cols, Stepper::new(config.edge))
            .context("creating grid")?;

        let runtime = if config.row_tasks {
            Some(tokio::runtime::Runtime::new().context("starting tokio runtime")?)
        } else {
            None
        };

        Ok(Self {
            session,
            update_interval: config.frame_delay,
            next_seed: config.seed,
            config,
            last_update: Instant::now(),
            selected_pattern: 0,
            runtime,
        })
    }

    /// Advance the session if running, using row tasks when configured.
    pub fn update_generation(&mut self) {
        let Some(runtime) = &self.runtime else {
            self.session.tick();
            return;
        };

        let mut failure = None;
        self.session.tick_with(|stepper, grid| {
            coro::advance_by_rows(runtime, *stepper, grid).unwrap_or_else(|e| {
                let serial = stepper.step(grid, true);
                failure = Some(e);
                serial
            })
        });
        if let Some(e) = failure {
            tracing::warn!(error = %e, "row tasks failed, stepped serially");
        }
    }

    pub fn randomize(&mut self) {
        self.session.randomize(self.next_seed);
        self.next_seed = self.next_seed.wrapping_add(1);
    }
}
