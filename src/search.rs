// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive oscillator search.
//!
//! [`search_board`] enumerates every configuration of a toroidal board,
//! skips configurations symmetric to one already examined, classifies the
//! trajectory of each survivor, and collects one cycle member for every
//! trajectory that ends in a cycle of period 2 or more.
//!
//! The result holds at least one representative of every cycle that survives
//! symmetry pruning. It is not a complete list of cycle members, and a cycle
//! can be missed entirely if each of its members mirrors a board visited
//! earlier.
//!
//! # Example
//!
//! ```
//! use life_oscillators::search::search;
//!
//! let oscillators = search(4).unwrap();
//! assert_eq!(oscillators.len(), 3);
//! assert!(search(5).unwrap().is_empty());
//! ```

use crate::context::SearchContext;
use crate::cycle::{group_cycles, Cycle};
use crate::engine::EngineBuilder;
use crate::error::GridError;
use crate::geometry::{GridState, MAX_SEARCH_CELLS, PUZZLE_HEIGHT};
use crate::predicates::{
    ClassifyPredicate, EnumeratePredicate, FailPredicate, RecordOscillatorPredicate,
    SymmetryPrunePredicate,
};
use crate::rule::Torus;
use crate::state::statistics::Statistics;
use log::info;
use std::collections::BTreeSet;

/// Everything a search produces.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub height: usize,
    pub width: usize,
    /// Recorded cycle members, in [`GridState`] order.
    pub oscillators: BTreeSet<GridState>,
    pub statistics: Statistics,
}

impl SearchOutcome {
    /// Group the recorded members into the disjoint cycles they belong to.
    pub fn cycles(&self) -> Vec<Cycle> {
        let torus = Torus::new(self.height, self.width);
        group_cycles(&self.oscillators, |state| torus.step(state))
    }
}

/// Search a `3 x width` board and return the recorded cycle members.
///
/// # Errors
///
/// [`GridError::TooManyCells`] if the board has more than 64 cells.
pub fn search(width: usize) -> Result<BTreeSet<GridState>, GridError> {
    search_board(PUZZLE_HEIGHT, width).map(|outcome| outcome.oscillators)
}

/// Search a `height x width` board.
///
/// # Errors
///
/// [`GridError::TooManyCells`] if the board has more than 64 cells, or
/// exactly 64 (one more than [`MAX_SEARCH_CELLS`]).
pub fn search_board(height: usize, width: usize) -> Result<SearchOutcome, GridError> {
    // Validate up front; the enumerator cannot report errors.
    let cells = GridState::empty(height, width)?.cell_count();
    if cells > MAX_SEARCH_CELLS {
        return Err(GridError::TooManyCells {
            cells,
            max: MAX_SEARCH_CELLS,
        });
    }

    let mut ctx = SearchContext::new(height, width);
    let engine = EngineBuilder::new()
        .add(Box::new(EnumeratePredicate::new()))
        .add(Box::new(SymmetryPrunePredicate))
        .add(Box::new(ClassifyPredicate))
        .add(Box::new(RecordOscillatorPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    let exhausted = engine.search(&mut ctx).is_none();
    debug_assert!(exhausted, "oscillator search suspended before exhaustion");

    info!(
        "[Search] {}x{}: {} oscillator states; {}",
        height,
        width,
        ctx.state.oscillators.len(),
        ctx.statistics
    );

    Ok(SearchOutcome {
        height,
        width,
        oscillators: ctx.state.oscillators,
        statistics: ctx.statistics,
    })
}
