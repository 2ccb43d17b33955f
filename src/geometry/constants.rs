// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board constants.
//!
//! The puzzle fixes the board height at three rows; everything else in the
//! crate works for any height and width whose product fits in [`MAX_CELLS`].

/// Height of the boards searched by [`crate::search::search`].
pub const PUZZLE_HEIGHT: usize = 3;

/// Maximum number of cells on a board (one bit per cell in a `u64`).
pub const MAX_CELLS: usize = u64::BITS as usize;

/// Largest board the exhaustive search accepts. Its `2^cells` boards must be
/// countable in a `usize` choice index, which rules out a full 64 cells.
pub const MAX_SEARCH_CELLS: usize = MAX_CELLS - 1;

/// The eight compass offsets `(di, dj)` of a cell's Moore neighborhood.
///
/// Order: N, NE, E, SE, S, SW, W, NW.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Character used for a live cell in the text notation.
pub const ALIVE: char = 'o';

/// Character used for a dead cell in the text notation.
pub const DEAD: char = '.';

/// Separator between rows in the single-line text notation.
pub const ROW_SEPARATOR: char = '/';
