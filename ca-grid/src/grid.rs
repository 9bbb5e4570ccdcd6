use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::cell::GridCell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("seed cell {row}, {col} lies outside a {width}x{height} grid")]
    SeedOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

/// Wraps a coordinate that is at most one step outside `0..size` back onto the torus.
///
/// Only offsets of -1 and +1 are folded exactly. That is all a 3x3
/// neighborhood ever asks for, so no general modulo is done here.
pub fn wrap(coord: i64, size: u32) -> u32 {
    if coord < 0 {
        size - 1
    } else if coord >= size as i64 {
        0
    } else {
        coord as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> Result<Self, GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.row < self.height && loc.col < self.width
    }

    /// Every location in row-major order.
    pub fn locs(self) -> impl DoubleEndedIterator<Item = Loc> + Clone {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Loc::new(row, col)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, size: GridSize) -> Option<usize> {
        if size.contains(*self) {
            Some(self.row as usize * size.width as usize + self.col as usize)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridCells<C>
where
    C: GridCell,
{
    cells: Vec<C>,
    size: GridSize,
}

impl<C> GridCells<C>
where
    C: GridCell,
{
    pub fn new(size: GridSize) -> Result<Self, GridError> {
        let size = size.validate()?;
        Ok(Self {
            cells: vec![C::default(); size.num_cells()],
            size,
        })
    }

    pub fn from_fn<F>(size: GridSize, mut cell_at: F) -> Result<Self, GridError>
    where
        F: FnMut(Loc) -> C,
    {
        let size = size.validate()?;
        Ok(Self {
            cells: size.locs().map(&mut cell_at).collect(),
            size,
        })
    }

    /// Builds a grid from rows listed top to bottom.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[C]>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let size = GridSize::new(width as u32, rows.len() as u32).validate()?;
        let mut cells = Vec::with_capacity(size.num_cells());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { cells, size })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.iter()
    }

    pub fn num_live(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    pub fn get(&self, loc: Loc) -> Option<&C> {
        loc.grid_index(self.size).map(|index| &self.cells[index])
    }

    pub fn get_mut(&mut self, loc: Loc) -> Option<&mut C> {
        loc.grid_index(self.size)
            .map(|index| &mut self.cells[index])
    }
}

impl<C> Index<Loc> for GridCells<C>
where
    C: GridCell,
{
    type Output = C;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.get(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl<C> IndexMut<Loc> for GridCells<C>
where
    C: GridCell,
{
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.get_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// The 3x3 block around a cell, with rows and columns already wrapped.
pub struct Neighborhood<'a, C>
where
    C: GridCell,
{
    cells: &'a GridCells<C>,
    rows: [u32; 3],
    cols: [u32; 3],
}

impl<'a, C> Neighborhood<'a, C>
where
    C: GridCell,
{
    pub fn new(cells: &'a GridCells<C>, center: Loc) -> Self {
        let (row_above, row_below) = Self::adjacent_indexes(center.row, cells.height());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, cells.width());
        Self {
            cells,
            rows: [row_above, center.row, row_below],
            cols: [col_left, center.col, col_right],
        }
    }

    pub fn cell(&self, row: u32, col: u32) -> &C {
        let loc = Loc::new(self.rows[row as usize], self.cols[col as usize]);
        &self.cells[loc]
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&C),
    {
        self.for_cell(0, 0, &mut f);
        self.for_cell(0, 1, &mut f);
        self.for_cell(0, 2, &mut f);

        self.for_cell(1, 0, &mut f);
        self.for_cell(1, 2, &mut f);

        self.for_cell(2, 0, &mut f);
        self.for_cell(2, 1, &mut f);
        self.for_cell(2, 2, &mut f);
    }

    /// Counts the eight surrounding positions whose cell is live. A small
    /// torus can visit the same cell more than once; each visit counts.
    pub fn num_live_neighbors(&self) -> u32 {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if neighbor.is_live() {
                result += 1;
            }
        });
        result
    }

    fn for_cell<F>(&self, row: u32, col: u32, f: &mut F)
    where
        F: FnMut(&C),
    {
        f(self.cell(row, col));
    }

    fn adjacent_indexes(cell_index: u32, max: u32) -> (u32, u32) {
        (
            wrap(cell_index as i64 - 1, max),
            wrap(cell_index as i64 + 1, max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{BinaryCell, GradientCell};

    fn binary_rows(rows: &[&[u8]]) -> GridCells<BinaryCell> {
        let rows: Vec<Vec<BinaryCell>> = rows
            .iter()
            .map(|row| row.iter().map(|&value| BinaryCell::from_value(value)).collect())
            .collect();
        GridCells::from_rows(&rows).expect("grid")
    }

    #[test]
    fn wrap_folds_single_step_offsets() {
        for size in 1..=6 {
            for boundary in [0, size as i64 - 1] {
                for offset in -1..=1 {
                    let wrapped = wrap(boundary + offset, size);
                    assert!(wrapped < size, "wrap({}, {size}) = {wrapped}", boundary + offset);
                }
            }
        }
        assert_eq!(wrap(-1, 15), 14);
        assert_eq!(wrap(15, 15), 0);
        assert_eq!(wrap(7, 15), 7);
    }

    #[test]
    fn wrap_does_not_fold_multi_step_offsets() {
        assert_eq!(wrap(-2, 10), 9);
        assert_eq!(wrap(12, 10), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GridCells::<BinaryCell>::new(GridSize::new(0, 10)),
            Err(GridError::ZeroSize {
                width: 0,
                height: 10
            })
        );
        assert!(GridCells::<GradientCell>::new(GridSize::new(15, 0)).is_err());
        let empty: [&[BinaryCell]; 0] = [];
        assert!(GridCells::<BinaryCell>::from_rows(&empty).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![BinaryCell::DEAD; 3], vec![BinaryCell::DEAD; 2]];
        assert_eq!(
            GridCells::<BinaryCell>::from_rows(&rows),
            Err(GridError::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn locs_are_row_major_and_cover_the_grid() {
        let size = GridSize::new(3, 2);
        let locs: Vec<Loc> = size.locs().collect();
        assert_eq!(locs.len(), 6);
        assert_eq!(locs[0], Loc::new(0, 0));
        assert_eq!(locs[1], Loc::new(0, 1));
        assert_eq!(locs[3], Loc::new(1, 0));
        for (index, loc) in locs.iter().enumerate() {
            assert_eq!(loc.grid_index(size), Some(index));
        }
        assert_eq!(Loc::new(2, 0).grid_index(size), None);
    }

    #[test]
    fn from_rows_indexes_by_row_then_col() {
        let grid = binary_rows(&[&[0, 1, 0], &[0, 0, 1]]);
        assert_eq!(grid.size(), GridSize::new(3, 2));
        assert!(grid[Loc::new(0, 1)].is_live());
        assert!(grid[Loc::new(1, 2)].is_live());
        assert!(!grid[Loc::new(1, 0)].is_live());
        assert_eq!(grid.num_live(), 2);
        assert!(grid.get(Loc::new(2, 0)).is_none());
    }

    #[test]
    fn neighbors_wrap_around_edges() {
        let grid = binary_rows(&[
            &[0, 0, 0, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[1, 0, 0, 1],
        ]);
        // Corner (0, 0) touches the other three corners through the wrap.
        assert_eq!(Neighborhood::new(&grid, Loc::new(0, 0)).num_live_neighbors(), 3);
        assert_eq!(Neighborhood::new(&grid, Loc::new(1, 1)).num_live_neighbors(), 0);
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let grid = binary_rows(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        assert_eq!(Neighborhood::new(&grid, Loc::new(1, 1)).num_live_neighbors(), 0);
        assert_eq!(Neighborhood::new(&grid, Loc::new(0, 0)).num_live_neighbors(), 1);
    }

    #[test]
    fn neighbor_count_stays_within_eight() {
        let full = binary_rows(&[&[1; 5], &[1; 5], &[1; 5], &[1; 5]]);
        for loc in full.size().locs() {
            assert_eq!(Neighborhood::new(&full, loc).num_live_neighbors(), 8);
        }

        // A 1x1 torus sees itself in all eight positions.
        let single = binary_rows(&[&[1]]);
        assert_eq!(Neighborhood::new(&single, Loc::new(0, 0)).num_live_neighbors(), 8);

        let sparse = binary_rows(&[&[1, 0, 1], &[0, 1, 0]]);
        for loc in sparse.size().locs() {
            assert!(Neighborhood::new(&sparse, loc).num_live_neighbors() <= 8);
        }
    }

    #[test]
    fn gradient_liveness_uses_threshold() {
        let rows = vec![
            vec![GradientCell::new(0.8), GradientCell::new(0.79), GradientCell::new(0.5)],
            vec![GradientCell::new(0.5), GradientCell::new(0.5), GradientCell::new(1.0)],
            vec![GradientCell::new(0.5), GradientCell::new(0.5), GradientCell::new(0.5)],
        ];
        let grid = GridCells::<GradientCell>::from_rows(&rows).expect("grid");
        assert_eq!(Neighborhood::new(&grid, Loc::new(1, 1)).num_live_neighbors(), 2);
    }
}
