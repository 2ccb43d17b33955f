// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board geometry.
//!
//! - GridState: immutable, hashable snapshot of a toroidal board
//! - constants: board height for the puzzle, neighborhood offsets, text notation

pub mod constants;
pub mod grid;

// Re-export for convenience
pub use constants::*;
pub use grid::GridState;
