//! Error types for grid construction and cell access.
//!
//! Other modules in this crate `use crate::errors::*;` to get the `Error`, `ErrorKind`, `Result`
//! and `ResultExt` types generated by `error_chain!`.

// error_chain! expands to code using the deprecated `Error::description`/`cause`.
#![allow(deprecated)]

use error_chain::*;

error_chain! {

    errors {
        // Zero width or height, or a cell count that overflows usize.
        InvalidDimension(width: usize, height: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: width {} height {}", width, height)
        }

        OutOfBounds(x: u32, y: u32) {
            description("coordinate out of bounds")
            display("coordinate ({}, {}) is outside the grid", x, y)
        }
    }
}
