use std::time::Duration;

use crate::grid::GridSize;

pub const DEFAULT_GRID_SIZE: GridSize = GridSize::new(15, 10);
pub const DEFAULT_CELL_SIDE: f64 = 25.0;
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(400);

/// Fixed parameters of one automaton window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutomatonConfig {
    pub size: GridSize,
    /// Side of one cell on the canvas, in pixels.
    pub cell_side: f64,
    pub step_interval: Duration,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cell_side: DEFAULT_CELL_SIDE,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

impl AutomatonConfig {
    pub fn canvas_width(&self) -> u32 {
        (self.size.width as f64 * self.cell_side).ceil() as u32
    }

    pub fn canvas_height(&self) -> u32 {
        (self.size.height as f64 * self.cell_side).ceil() as u32
    }
}
