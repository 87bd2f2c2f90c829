use error_chain::bail;
use itertools::iproduct;
use log::{debug, trace};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::cmp;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, Cell, CellIndex};
use crate::errors::*;
use crate::grid_iterators::{RectGridCellIter, RectRowIter};
use crate::patterns::Pattern;
use crate::region::{ChangeRegion, RegionBuilder};
use crate::units::{Height, Width};

/// A rectangular board of cells with clamped edges.
///
/// The grid owns every cell. Neighbour links are indices into `cells`, rebuilt in full whenever
/// the topology changes, so a `resize` can reallocate the storage freely.
#[derive(Clone)]
pub struct Grid {
    width: Width,
    height: Height,
    cells: Vec<Cell>,
    generation: u64,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, generation: {:?}, alive: {:?}",
               self.width, self.height, self.generation, self.alive_count())
    }
}

impl Grid {
    /// Build an all dead grid.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let cells = build_cells(width, height)?;
        debug!("Built {}x{} grid", width, height);
        Ok(Grid {
            width,
            height,
            cells,
            generation: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Generations stepped since the topology was last built.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.width, self.height)
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        RectRowIter::new(self.width, self.height)
    }

    /// Rebuild the grid for new dimensions.
    ///
    /// Unchanged dimensions are a no-op returning `ChangeRegion::Empty`. Otherwise every cell is
    /// replaced by a dead one and the region covers the whole new grid. On error the grid is
    /// left exactly as it was.
    pub fn resize(&mut self, width: Width, height: Height) -> Result<ChangeRegion> {
        if width == self.width && height == self.height {
            return Ok(ChangeRegion::Empty);
        }

        let cells = build_cells(width, height)?;
        debug!("Resized grid from {}x{} to {}x{}", self.width, self.height, width, height);
        self.cells = cells;
        self.width = width;
        self.height = height;
        self.generation = 0;

        Ok(ChangeRegion::Bounds {
            top: 0,
            left: 0,
            bottom: (height.0 - 1) as u32,
            right: (width.0 - 1) as u32,
        })
    }

    /// Give every cell a new state, alive with probability 1/2.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ChangeRegion {
        let mut changes = RegionBuilder::new();
        for cell in &mut self.cells {
            let alive = rng.gen::<bool>();
            if cell.is_alive() != alive {
                changes.include(cell.position());
            }
            cell.set_alive(alive);
        }

        let region = changes.build();
        debug!("Randomized grid, changed {}", region);
        region
    }

    /// Advance every cell by one generation.
    pub fn step(&mut self) -> ChangeRegion {
        self.compute_next_states();

        let mut changes = RegionBuilder::new();
        for cell in &mut self.cells {
            if cell.commit() {
                changes.include(cell.position());
            }
        }
        self.generation += 1;

        let region = changes.build();
        trace!("Generation {}: {}", self.generation, region);
        region
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_next_states(&mut self) {
        // The counts only ever read `alive`, which no cell changes until every cell has a
        // pending state.
        for index in 0..self.cells.len() {
            let live_neighbours = self.cells[index].live_neighbour_count(&self.cells);
            self.cells[index].compute_next_state(live_neighbours);
        }
    }

    #[cfg(feature = "parallel")]
    fn compute_next_states(&mut self) {
        let counts: Vec<usize> = {
            let cells = &self.cells;
            cells.par_iter().map(|cell| cell.live_neighbour_count(cells)).collect()
        };
        for (cell, live_neighbours) in self.cells.iter_mut().zip(counts) {
            cell.compute_next_state(live_neighbours);
        }
    }

    /// Kill every cell, returning the region that held live cells.
    pub fn clear(&mut self) -> ChangeRegion {
        let mut changes = RegionBuilder::new();
        for cell in self.cells.iter_mut().filter(|cell| cell.is_alive()) {
            cell.set_alive(false);
            changes.include(cell.position());
        }
        changes.build()
    }

    /// Bounds checked access to a cell.
    pub fn cell_at(&self, coord: Cartesian2DCoordinate) -> Result<&Cell> {
        let index = self.grid_coordinate_to_index(coord)?;
        Ok(&self.cells[index])
    }

    pub fn is_alive(&self, coord: Cartesian2DCoordinate) -> Result<bool> {
        self.cell_at(coord).map(Cell::is_alive)
    }

    /// Set the state of a single cell outside of generation stepping.
    /// Returns true if the state changed.
    pub fn set_cell_alive(&mut self, coord: Cartesian2DCoordinate, alive: bool) -> Result<bool> {
        let index = self.grid_coordinate_to_index(coord)?;
        let cell = &mut self.cells[index];
        let changed = cell.is_alive() != alive;
        cell.set_alive(alive);
        Ok(changed)
    }

    /// Flip a single cell, returning its new state.
    pub fn toggle_cell(&mut self, coord: Cartesian2DCoordinate) -> Result<bool> {
        let index = self.grid_coordinate_to_index(coord)?;
        let cell = &mut self.cells[index];
        let alive = !cell.is_alive();
        cell.set_alive(alive);
        Ok(alive)
    }

    /// Bring the cells of `pattern` to life with its top left corner at `origin`.
    ///
    /// Nothing is changed if any of the pattern's cells would fall outside the grid.
    pub fn place_pattern(&mut self,
                         pattern: &Pattern,
                         origin: Cartesian2DCoordinate)
                         -> Result<ChangeRegion> {
        let indices = pattern.cells
            .iter()
            .map(|&(dx, dy)| {
                let x = origin.x.checked_add(dx);
                let y = origin.y.checked_add(dy);
                match (x, y) {
                    (Some(x), Some(y)) => {
                        self.grid_coordinate_to_index(Cartesian2DCoordinate::new(x, y))
                    }
                    // Report the cell that fell off the grid, clamped to the coordinate range
                    _ => {
                        Err(ErrorKind::OutOfBounds(origin.x.saturating_add(dx),
                                                   origin.y.saturating_add(dy))
                            .into())
                    }
                }
            })
            .collect::<Result<Vec<CellIndex>>>()?;

        let mut changes = RegionBuilder::new();
        for index in indices {
            let cell = &mut self.cells[index];
            if !cell.is_alive() {
                cell.set_alive(true);
                changes.include(cell.position());
            }
        }

        let region = changes.build();
        debug!("Placed {} at ({}, {}), changed {}", pattern.name, origin.x, origin.y, region);
        Ok(region)
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Result<CellIndex> {
        if self.is_valid_coordinate(coord) {
            Ok(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            Err(ErrorKind::OutOfBounds(coord.x, coord.y).into())
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_row() {
            let line: String = row.into_iter()
                .map(|coord| {
                    let index = coord.y as usize * self.width.0 + coord.x as usize;
                    if self.cells[index].is_alive() { 'O' } else { '.' }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Allocate dead cells for the topology, in row-major order, and link each to its Moore
/// neighbourhood clamped to the grid edges.
fn build_cells(width: Width, height: Height) -> Result<Vec<Cell>> {
    let (Width(w), Height(h)) = (width, height);
    let cells_count = w.checked_mul(h)
        .filter(|&count| count > 0)
        .ok_or_else(|| Error::from(ErrorKind::InvalidDimension(w, h)))?;
    // Coordinates are u32.
    if w > u32::MAX as usize || h > u32::MAX as usize {
        bail!(ErrorKind::InvalidDimension(w, h));
    }

    let mut cells: Vec<Cell> = RectGridCellIter::new(width, height).map(Cell::new).collect();
    debug_assert_eq!(cells.len(), cells_count);
    link_neighbours(&mut cells, width, height);
    Ok(cells)
}

fn link_neighbours(cells: &mut [Cell], width: Width, height: Height) {
    let (Width(w), Height(h)) = (width, height);

    for cell in cells.iter_mut() {
        cell.clear_neighbours();
    }

    for (y, x) in iproduct!(0..h, 0..w) {
        let cell = &mut cells[y * w + x];
        let rows = y.saturating_sub(1)..=cmp::min(h - 1, y + 1);
        let columns = x.saturating_sub(1)..=cmp::min(w - 1, x + 1);

        for (ny, nx) in iproduct!(rows, columns) {
            if ny == y && nx == x {
                continue;
            }
            cell.add_neighbour(ny * w + nx);
        }
    }
}
