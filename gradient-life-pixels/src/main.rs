#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::env;
use std::error::Error;

use ca_grid::{Automaton, AutomatonConfig, GradientCell, Random};
use ca_pixels_support::animate;
use log::{info, warn};

const TITLE: &str = "Gradient Life";
const SEED_VAR: &str = "CA_SEED";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = AutomatonConfig::default();
    let mut rand = random_from_env();
    let cells = GradientCell::random_fill(config.size, &mut rand)?;
    let world = Automaton::new(cells, Box::new(rand), config.cell_side);
    info!("{} of {} cells start live", world.num_live(), config.size.num_cells());
    animate(config, TITLE, world)?;
    Ok(())
}

/// Seeds from `CA_SEED` when it holds a number, so a run can be replayed.
fn random_from_env() -> Random {
    match env::var(SEED_VAR) {
        Ok(value) => match parse_seed(&value) {
            Some(seed) => {
                info!("using {SEED_VAR}={seed}");
                Random::from_seed(seed)
            }
            None => {
                warn!("ignoring {SEED_VAR}={value:?}, not an unsigned integer");
                Random::new()
            }
        },
        Err(_) => Random::new(),
    }
}

fn parse_seed(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}
