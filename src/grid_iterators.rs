use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::units::{ColumnIndex, Height, RowIndex, Width};

/// Row-major iteration over every coordinate of a `width` x `height` topology.
#[derive(Copy, Clone)]
pub struct RectGridCellIter {
    width: Width,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub fn new(width: Width, height: Height) -> RectGridCellIter {
        RectGridCellIter {
            width,
            current_cell_number: 0,
            cells_count: width.0 * height.0,
        }
    }
}

impl fmt::Debug for RectGridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.width);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iteration over the rows of a rectangular topology, top to bottom, each row as a batch of
/// coordinates from left to right.
#[derive(Debug, Copy, Clone)]
pub struct RectRowIter {
    current_index: usize,
    width: Width,
    height: Height,
}

impl RectRowIter {
    pub fn new(width: Width, height: Height) -> RectRowIter {
        RectRowIter {
            current_index: 0,
            width,
            height,
        }
    }
}

impl ExactSizeIterator for RectRowIter {} // default impl using size_hint()
impl Iterator for RectRowIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let Height(rows) = self.height;
        if self.current_index < rows {
            let Width(length) = self.width;
            let row = RowIndex(self.current_index);
            let coords = (0..length)
                .map(|i: usize| Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(i), row))
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.height.0 - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
