// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use life_oscillators::context::SearchContext;
use life_oscillators::cycle::{group_cycles, Cycle};
use life_oscillators::{GridState, Predicate, PredicateResult, Torus};
use std::cell::RefCell;
use std::rc::Rc;

/// Parse a board in `/` notation, panicking on malformed test data.
pub fn parse(rows: &str) -> GridState {
    rows.parse()
        .unwrap_or_else(|e| panic!("bad test board {rows:?}: {e}"))
}

/// Group arbitrary states into cycles on their own torus.
pub fn cycles_of<'a, I>(states: I, height: usize, width: usize) -> Vec<Cycle>
where
    I: IntoIterator<Item = &'a GridState>,
{
    let torus = Torus::new(height, width);
    group_cycles(states, |state| torus.step(state))
}

/// A predicate that copies each candidate reaching it into a shared log.
///
/// Used to observe what an earlier stage of a program lets through.
#[derive(Debug, Default)]
pub struct CollectPredicate(pub Rc<RefCell<Vec<GridState>>>);

impl Predicate for CollectPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        self.0.borrow_mut().push(ctx.candidate());
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Collect"
    }
}
