use std::fmt::Debug;

use crate::canvas::Rgba;
use crate::grid::{GridCells, GridError, GridSize, Loc};
use crate::random::RandomSource;

/// One automaton variant: what a cell holds, when it counts as live for its
/// neighbors, how it is colored and how it moves to the next generation.
pub trait GridCell
where
    Self: Copy + Debug + Default + PartialEq,
{
    fn is_live(&self) -> bool;
    fn fill_color(&self) -> Rgba;
    fn next(&self, live_neighbors: u32, rand: &mut dyn RandomSource) -> Self;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryCell {
    pub alive: bool,
}

impl BinaryCell {
    pub const DEAD: Self = Self { alive: false };
    pub const ALIVE: Self = Self { alive: true };

    const ALIVE_COLOR: Rgba = Rgba([0x80, 0x80, 0x80, 0xff]);
    const DEAD_COLOR: Rgba = Rgba([0x00, 0x00, 0x40, 0xff]);

    /// Any non-zero value is alive.
    pub fn from_value(value: u8) -> Self {
        Self { alive: value != 0 }
    }

    pub fn value(&self) -> u8 {
        self.alive as u8
    }

    /// A dead grid with the given cells brought to life.
    pub fn seeded(size: GridSize, live: &[Loc]) -> Result<GridCells<Self>, GridError> {
        let mut cells = GridCells::new(size)?;
        for &loc in live {
            let cell = cells.get_mut(loc).ok_or(GridError::SeedOutOfBounds {
                row: loc.row,
                col: loc.col,
                width: size.width,
                height: size.height,
            })?;
            *cell = Self::ALIVE;
        }
        Ok(cells)
    }
}

impl GridCell for BinaryCell {
    fn is_live(&self) -> bool {
        self.alive
    }

    fn fill_color(&self) -> Rgba {
        if self.alive {
            Self::ALIVE_COLOR
        } else {
            Self::DEAD_COLOR
        }
    }

    fn next(&self, live_neighbors: u32, _rand: &mut dyn RandomSource) -> Self {
        let alive = if self.alive {
            (2..=3).contains(&live_neighbors)
        } else {
            live_neighbors == 3
        };
        Self { alive }
    }
}

/// A cell of continuous intensity that brightens while it has Life-like
/// company, fades otherwise, and is reseeded at random once it reaches either
/// extreme.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientCell {
    pub intensity: f64,
}

impl GradientCell {
    pub const LIVE_THRESHOLD: f64 = 0.8;
    pub const STEP: f64 = 0.05;
    pub const MIN_STABLE: f64 = 0.05;
    pub const MAX_STABLE: f64 = 0.95;

    pub fn new(intensity: f64) -> Self {
        Self { intensity }
    }

    pub fn random(rand: &mut dyn RandomSource) -> Self {
        Self::new(rand.next_unit())
    }

    pub fn random_fill(
        size: GridSize,
        rand: &mut dyn RandomSource,
    ) -> Result<GridCells<Self>, GridError> {
        GridCells::from_fn(size, |_loc| Self::random(rand))
    }

    fn is_stable(&self) -> bool {
        (Self::MIN_STABLE..=Self::MAX_STABLE).contains(&self.intensity)
    }
}

impl GridCell for GradientCell {
    fn is_live(&self) -> bool {
        self.intensity >= Self::LIVE_THRESHOLD
    }

    // Clamped for drawing only; the stored intensity is left as computed.
    fn fill_color(&self) -> Rgba {
        Rgba::from_hsv(0.0, 0.0, self.intensity)
    }

    fn next(&self, live_neighbors: u32, rand: &mut dyn RandomSource) -> Self {
        if !self.is_stable() {
            return Self::random(rand);
        }
        if (2..=3).contains(&live_neighbors) {
            Self::new(self.intensity + Self::STEP)
        } else {
            Self::new(self.intensity - Self::STEP)
        }
    }
}
