//! **lifegrid** is a synchronous cellular automaton engine for Conway's game of life on a
//! bounded rectangular grid.
//!
//! Each generation reports the smallest rectangle of cells that changed so that a view only
//! needs to redraw that part of the board.

pub mod cells;
pub mod config;
pub mod errors;
pub mod grid;
pub mod grid_iterators;
pub mod patterns;
pub mod region;
pub mod scheduler;
pub mod units;
