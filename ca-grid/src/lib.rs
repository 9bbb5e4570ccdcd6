#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod animator;
mod automaton;
mod canvas;
mod cell;
mod config;
mod grid;
mod random;

pub use animator::{Animate, Animator};
pub use automaton::Automaton;
pub use canvas::{Canvas, Rect, Rgba};
pub use cell::{BinaryCell, GradientCell, GridCell};
pub use config::{
    AutomatonConfig, DEFAULT_CELL_SIDE, DEFAULT_GRID_SIZE, DEFAULT_STEP_INTERVAL,
};
pub use grid::{wrap, GridCells, GridError, GridSize, Loc, Neighborhood};
pub use random::{Random, RandomSource};
