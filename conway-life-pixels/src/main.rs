#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;

use ca_grid::{Automaton, AutomatonConfig, BinaryCell, GridCells, GridError, Loc, Random};
use ca_pixels_support::animate;
use log::info;

const TITLE: &str = "Conway's Life";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = AutomatonConfig::default();
    let world = Automaton::new(seed_cells(&config)?, Box::new(Random::new()), config.cell_side);
    info!("seeded {} live cells", world.num_live());
    animate(config, TITLE, world)?;
    Ok(())
}

fn seed_cells(config: &AutomatonConfig) -> Result<GridCells<BinaryCell>, GridError> {
    BinaryCell::seeded(config.size, &seed_pattern())
}

/// A glider heading down and right in the top-left corner, and a blinker
/// toward the right edge.
fn seed_pattern() -> Vec<Loc> {
    vec![
        Loc::new(1, 2),
        Loc::new(2, 3),
        Loc::new(3, 1),
        Loc::new(3, 2),
        Loc::new(3, 3),
        Loc::new(5, 10),
        Loc::new(5, 11),
        Loc::new(5, 12),
    ]
}
