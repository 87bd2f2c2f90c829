use smallvec::SmallVec;
use std::convert::From;

use crate::units::{ColumnIndex, RowIndex, Width};

/// Index of a cell in the grid's dense row-major cell storage.
pub type CellIndex = usize;

/// Up to 8 neighbours in the Moore neighbourhood, stored inline.
pub type NeighbourSmallVec = SmallVec<[CellIndex; 8]>;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: CellIndex, row_width: Width) -> Cartesian2DCoordinate {
        let Width(width) = row_width;
        let x = index % width;
        let y = index / width;

        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> Self {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new(col as u32, row as u32)
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// The B3/S23 transition: a live cell survives with 2 or 3 live neighbours, a dead cell is born
/// with exactly 3. Everything else is dead in the next generation.
#[inline]
pub fn next_generation_state(alive: bool, live_neighbours: usize) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// A single automaton cell.
///
/// Cells never own each other. Neighbours are indices into the cell storage of the `Grid` that
/// created them and are only meaningful for the topology they were built for.
#[derive(Clone, Debug)]
pub struct Cell {
    position: Cartesian2DCoordinate,
    alive: bool,
    pending_alive: Option<bool>,
    neighbours: NeighbourSmallVec,
}

impl Cell {
    pub(crate) fn new(position: Cartesian2DCoordinate) -> Cell {
        Cell {
            position,
            alive: false,
            pending_alive: None,
            neighbours: NeighbourSmallVec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> Cartesian2DCoordinate {
        self.position
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Set the state right away, outside of generation stepping. Any pending next state is
    /// discarded.
    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
        self.pending_alive = None;
    }

    #[inline]
    pub fn neighbours(&self) -> &[CellIndex] {
        &self.neighbours
    }

    pub(crate) fn add_neighbour(&mut self, neighbour: CellIndex) {
        debug_assert!(self.neighbours.len() < 8, "a cell has at most 8 neighbours");
        self.neighbours.push(neighbour);
    }

    pub(crate) fn clear_neighbours(&mut self) {
        self.neighbours.clear();
    }

    /// Count the neighbours that are alive in the current generation.
    ///
    /// `cells` must be the storage the neighbour indices were built against.
    pub fn live_neighbour_count(&self, cells: &[Cell]) -> usize {
        self.neighbours
            .iter()
            .filter(|&&index| cells[index].alive)
            .count()
    }

    /// Work out the state for the next generation without changing the current one.
    #[inline]
    pub fn compute_next_state(&mut self, live_neighbours: usize) {
        self.pending_alive = Some(next_generation_state(self.alive, live_neighbours));
    }

    /// Apply the state computed by `compute_next_state`.
    /// Returns true if the alive state changed.
    pub fn commit(&mut self) -> bool {
        match self.pending_alive.take() {
            Some(next) if next != self.alive => {
                self.alive = next;
                true
            }
            _ => false,
        }
    }
}
