// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data: immutable tables precomputed once per board size.
//!
//! - the toroidal neighbor table used by every call to the transition function
//! - the non-trivial symmetries of the board, as index permutations
//!
//! Nothing here changes during a search, so one `MemoizedData` can be cloned
//! into any number of independent search contexts.

use crate::geometry::GridState;
use crate::rule::Torus;
use crate::symmetry::{symmetries, Remapping};
use log::debug;

#[derive(Debug, Clone)]
pub struct MemoizedData {
    height: usize,
    width: usize,

    /// Neighbor table for the transition function.
    pub torus: Torus,

    /// Every symmetry of the board except the identity, in generator order.
    pub symmetries: Vec<Remapping>,
}

impl MemoizedData {
    /// Compute the tables for a `height` x `width` board.
    pub fn new(height: usize, width: usize) -> Self {
        let torus = Torus::new(height, width);
        let symmetries: Vec<Remapping> = symmetries(height, width, false).collect();

        debug!(
            "[MemoizedData] {}x{} board: {} cells, {} non-trivial symmetries",
            height,
            width,
            height * width,
            symmetries.len()
        );

        Self {
            height,
            width,
            torus,
            symmetries,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Advance a board on this torus by one generation.
    #[inline]
    pub fn step(&self, state: &GridState) -> GridState {
        self.torus.step(state)
    }

    /// Images of `state` under every non-trivial symmetry.
    pub fn images<'a>(&'a self, state: &'a GridState) -> impl Iterator<Item = GridState> + 'a {
        self.symmetries.iter().map(move |remap| state.apply_symmetry(remap))
    }
}
