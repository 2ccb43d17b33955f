// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SymmetryPrunePredicate: skip boards equivalent to one already examined.
//!
//! The Life rule commutes with every symmetry of the torus, so a board and
//! its mirror images share a classification. A candidate whose image under
//! some non-trivial symmetry is already in Visited is rejected; otherwise it
//! joins Visited and moves on to classification.
//!
//! Visited also holds the cycle members recorded by earlier candidates. A
//! cycle member can therefore be pruned because it mirrors one of those,
//! even when its own cycle has not been reported yet; the search keeps this
//! behavior and guarantees only one representative per surviving cycle.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;

#[derive(Debug, Default)]
pub struct SymmetryPrunePredicate;

impl Predicate for SymmetryPrunePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let candidate = ctx.candidate();
        if ctx.has_visited_image(&candidate) {
            ctx.statistics.increment(Counters::SymmetryPruned);
            return PredicateResult::Failure;
        }
        ctx.mark_visited(candidate);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "SymmetryPrune"
    }
}
