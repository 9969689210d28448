// coro.rs - One generation evaluated as a tokio task per row

use std::sync::Arc;

use anyhow::{Context, Result};
use conway::{Grid, RowStep, Step, Stepper};
use tokio::runtime::Runtime;

/// Row coroutine: evaluates one row of the shared snapshot.
async fn process_row(stepper: Stepper, grid: Arc<Grid>, row: usize) -> Option<RowStep> {
    tokio::task::yield_now().await; // Let sibling rows interleave
    stepper.step_row(&grid, row, true)
}

/// Spawn every row at once, then gather the finished rows into a `Step`.
pub fn advance_by_rows(runtime: &Runtime, stepper: Stepper, grid: &Grid) -> Result<Step> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let snapshot = Arc::new(grid.clone());

    runtime.block_on(async move {
        let handles: Vec<_> = (0..rows)
            .map(|row| tokio::spawn(process_row(stepper, Arc::clone(&snapshot), row)))
            .collect();

        let mut parts = Vec::with_capacity(rows);
        for handle in handles {
            parts.extend(handle.await.context("row task panicked")?);
        }

        Step::from_rows(rows, cols, parts).context("row tasks did not cover the grid")
    })
}
