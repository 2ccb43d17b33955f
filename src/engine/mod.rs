// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence, in the style of a WAM:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): open a choice point, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the most recent open choice point
//! 6. If Suspend: pause and return control to caller
//!
//! Deterministic steps leave no choice point behind, so backtracking skips
//! straight over them. The search is exhausted when no choice point remains.
//!
//! # Example
//!
//! ```
//! use life_oscillators::context::SearchContext;
//! use life_oscillators::engine::EngineBuilder;
//! use life_oscillators::predicates::{EnumeratePredicate, FailPredicate};
//!
//! let mut ctx = SearchContext::new(3, 2);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(EnumeratePredicate::new()))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Every board is enumerated, then the program fails: engine consumed.
//! assert!(engine.search(&mut ctx).is_none());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether this entry is an open choice point.
    in_choice_mode: bool,

    /// Next choice to try (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the last call to search() stopped at a Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which also guarantees the program ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() again resumes by
    ///   backtracking from the suspension point
    /// - `None` if exhausted - every choice has been tried
    ///
    /// Results are delivered through side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence runs off its end (a program must end
    /// with FAIL or SUSPEND), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            self.suspended = false;
            self.backtrack();
        } else {
            self.stack.clear();
            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.stack.push(StackEntry::new(0, 0));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted (all choices failed)
            };
            let pred_idx = entry.predicate_index;
            let round = entry.round;
            let in_choice_mode = entry.in_choice_mode;

            let result = if !in_choice_mode {
                self.try_count += 1;
                self.predicates[pred_idx].try_pred(ctx, round)
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.backtrack();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);
                if matches!(result, PredicateResult::Choices(_) | PredicateResult::Suspend) {
                    panic!(
                        "{}::retry_pred returned invalid result: {:?}",
                        self.predicates[pred_idx].name(),
                        result
                    );
                }
                result
            };

            match result {
                PredicateResult::Success => self.push_next_predicate(),
                PredicateResult::SuccessSamePredicate => {
                    self.stack.push(StackEntry::new(pred_idx, round + 1));
                }
                PredicateResult::Failure => {
                    // A failed choice leaves its choice point open for the next one.
                    if !in_choice_mode {
                        self.backtrack();
                    }
                }
                PredicateResult::Choices(n) => {
                    if let Some(entry) = self.stack.last_mut() {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                    }
                }
                PredicateResult::Suspend => {
                    self.suspended = true;
                    return Some(self);
                }
            }
        }
    }

    /// Drop the top entry and every deterministic entry below it, leaving the
    /// most recent open choice point (if any) on top.
    fn backtrack(&mut self) {
        self.stack.pop();
        while matches!(self.stack.last(), Some(entry) if !entry.in_choice_mode) {
            self.stack.pop();
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self) {
        let next_index = self.stack.last().map_or(0, |entry| entry.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for a predicate program.
///
/// ```
/// use life_oscillators::engine::EngineBuilder;
/// use life_oscillators::predicates::SuspendPredicate;
///
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(SuspendPredicate))
///     .build();
/// assert_eq!(engine.statistics(), (0, 0));
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A program that ends in a terminal predicate, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
