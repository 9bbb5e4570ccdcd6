use std::mem;

use log::{debug, trace};

use crate::animator::Animate;
use crate::canvas::{Canvas, Rect, Rgba};
use crate::cell::GridCell;
use crate::grid::{GridCells, GridSize, Loc, Neighborhood};
use crate::random::RandomSource;

const OUTLINE_COLOR: Rgba = Rgba::BLACK;

/// A grid of cells of one variant, advanced a generation per frame.
#[derive(Debug)]
pub struct Automaton<C>
where
    C: GridCell,
{
    cells: GridCells<C>,
    next_cells: GridCells<C>,
    rand: Box<dyn RandomSource>,
    cell_side: f64,
    generation: u64,
}

impl<C> Automaton<C>
where
    C: GridCell,
{
    pub fn new(cells: GridCells<C>, rand: Box<dyn RandomSource>, cell_side: f64) -> Self {
        assert!(cell_side > 0.0);
        Self {
            next_cells: cells.clone(),
            cells,
            rand,
            cell_side,
            generation: 0,
        }
    }

    pub fn size(&self) -> GridSize {
        self.cells.size()
    }

    pub fn cells(&self) -> &GridCells<C> {
        &self.cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn num_live(&self) -> usize {
        self.cells.num_live()
    }

    pub fn cell_rect(&self, loc: Loc) -> Rect {
        Rect::new(
            loc.col as f64 * self.cell_side,
            loc.row as f64 * self.cell_side,
            self.cell_side,
            self.cell_side,
        )
    }

    /// Draws the current generation and replaces it with the next one. Every
    /// cell reads its neighbors from the current generation only.
    pub fn do_frame(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear();
        for loc in self.size().locs() {
            self.draw_cell(loc, canvas);
            self.update_cell(loc);
        }
        mem::swap(&mut self.next_cells, &mut self.cells);
        self.generation += 1;
        debug!(
            "generation {}: {} of {} cells live",
            self.generation,
            self.cells.num_live(),
            self.cells.num_cells()
        );
    }

    fn draw_cell(&self, loc: Loc, canvas: &mut dyn Canvas) {
        canvas.draw_rect(self.cell_rect(loc), self.cells[loc].fill_color(), OUTLINE_COLOR);
    }

    fn update_cell(&mut self, loc: Loc) {
        let cell = self.cells[loc];
        let live_neighbors = Neighborhood::new(&self.cells, loc).num_live_neighbors();
        let next_cell = cell.next(live_neighbors, self.rand.as_mut());
        trace!("{loc:?}: {cell:?} with {live_neighbors} live -> {next_cell:?}");
        self.next_cells[loc] = next_cell;
    }
}

impl<C> Animate for Automaton<C>
where
    C: GridCell,
{
    fn do_frame(&mut self, canvas: &mut dyn Canvas) {
        Automaton::do_frame(self, canvas);
    }
}
