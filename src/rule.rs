// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The toroidal Game of Life transition function (B3/S23).
//!
//! A cell is alive in the next generation iff it has exactly 3 live
//! neighbors, or it is alive now and has exactly 2. Neighbors are the 8
//! compass offsets with indices wrapping modulo the board height and width.
//!
//! On boards narrower than 3 in either dimension two offsets can land on the
//! same cell (or on the cell itself). Each offset is counted separately, so
//! the neighbor table stores one index per offset rather than a set.

use crate::geometry::{GridState, NEIGHBOR_OFFSETS};

/// Whether a cell is alive after one step, given its current state and the
/// sum over its 8 neighbors.
#[inline]
pub fn survives(alive: bool, neighbors: u32) -> bool {
    neighbors == 3 || (neighbors == 2 && alive)
}

/// Precomputed neighbor table for a `height` x `width` torus.
///
/// Building the table costs one pass over the board; stepping with it is a
/// handful of bit tests per cell. The search builds one per board size and
/// reuses it for every candidate.
#[derive(Debug, Clone)]
pub struct Torus {
    height: usize,
    width: usize,
    /// `neighbors[i * width + j][k]` is the cell index at offset `NEIGHBOR_OFFSETS[k]`.
    neighbors: Vec<[usize; 8]>,
}

impl Torus {
    pub fn new(height: usize, width: usize) -> Self {
        let mut neighbors = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                let mut cell = [0usize; 8];
                for (slot, &(di, dj)) in cell.iter_mut().zip(NEIGHBOR_OFFSETS.iter()) {
                    let ni = (i as isize + di).rem_euclid(height as isize) as usize;
                    let nj = (j as isize + dj).rem_euclid(width as isize) as usize;
                    *slot = ni * width + nj;
                }
                neighbors.push(cell);
            }
        }
        Self {
            height,
            width,
            neighbors,
        }
    }

    /// The torus matching a state's dimensions.
    pub fn for_state(state: &GridState) -> Self {
        Self::new(state.height(), state.width())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn check_dimensions(&self, state: &GridState) {
        assert_eq!(
            (state.height(), state.width()),
            (self.height, self.width),
            "{}x{} board stepped on a {}x{} torus",
            state.height(),
            state.width(),
            self.height,
            self.width
        );
    }

    /// Sum of the 8 toroidal neighbors of cell `(i, j)`.
    pub fn neighbor_count(&self, state: &GridState, i: usize, j: usize) -> u32 {
        self.check_dimensions(state);
        let cells = state.bits();
        self.neighbors[i * self.width + j]
            .iter()
            .map(|&n| ((cells >> n) & 1) as u32)
            .sum()
    }

    /// Advance `state` by one generation.
    ///
    /// # Panics
    ///
    /// Panics if `state` does not have this torus's dimensions.
    pub fn step(&self, state: &GridState) -> GridState {
        self.check_dimensions(state);
        let cells = state.bits();
        let mut next = 0u64;
        for (index, cell) in self.neighbors.iter().enumerate() {
            let count: u32 = cell.iter().map(|&n| ((cells >> n) & 1) as u32).sum();
            let alive = (cells >> index) & 1 != 0;
            if survives(alive, count) {
                next |= 1 << index;
            }
        }
        state.with_bits(next)
    }
}

/// Advance `state` by one generation, building the neighbor table on the fly.
pub fn step(state: &GridState) -> GridState {
    Torus::for_state(state).step(state)
}
