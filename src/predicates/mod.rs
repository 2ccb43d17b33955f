// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The oscillator search is the program
//!
//! ```text
//! Enumerate -> SymmetryPrune -> Classify -> RecordOscillator -> Fail
//! ```
//!
//! `Enumerate` is the only choice point. Each of its choices installs one
//! board; the final `Fail` sends the engine back for the next, so the
//! program runs once per board and ends when the enumeration is exhausted.
//! A pruned board fails early and skips classification.
//!
//! # Organization
//!
//! - `enumerate`: EnumeratePredicate and the subset enumerator
//! - `prune`: SymmetryPrunePredicate
//! - `classify`: ClassifyPredicate, RecordOscillatorPredicate
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod classify;
pub mod enumerate;
pub mod prune;

// Re-export main predicates for convenience
pub use classify::{ClassifyPredicate, RecordOscillatorPredicate};
pub use enumerate::{EnumeratePredicate, SubsetEnumerator};
pub use prune::SymmetryPrunePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking into the most recent
/// choice point. As the last predicate of a program it makes the engine
/// explore every alternative.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the engine with the context as it stands, e.g. to inspect each
/// board in turn. Resuming continues with the next alternative.
///
/// ```
/// use life_oscillators::context::SearchContext;
/// use life_oscillators::engine::EngineBuilder;
/// use life_oscillators::predicates::{EnumeratePredicate, SuspendPredicate};
///
/// let mut ctx = SearchContext::new(1, 2);
/// let engine = EngineBuilder::new()
///     .add(Box::new(EnumeratePredicate::new()))
///     .terminal(Box::new(SuspendPredicate))
///     .build();
///
/// let engine = engine.search(&mut ctx).unwrap();
/// assert_eq!(ctx.candidate().to_string(), "..");
/// let _engine = engine.search(&mut ctx).unwrap();
/// assert_eq!(ctx.candidate().to_string(), "o.");
/// ```
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
