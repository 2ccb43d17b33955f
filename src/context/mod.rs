// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the data structure passed through every predicate:
//! - MEMO: immutable tables for one board size (neighbors, symmetries)
//! - DYNAMIC: the Visited and Oscillator sets and the current candidate
//! - statistics counters
//!
//! A context belongs to exactly one search. Independent searches, for
//! different widths or run in parallel, each own their own context and can
//! share nothing but a clone of the MEMO data.
//!
//! ```text
//! SearchContext {
//!     memo: MemoizedData,    // immutable, per board size
//!     state: DynamicState,   // mutable, owned
//!     statistics: Statistics,
//! }
//! ```

use crate::cycle::Trajectory;
use crate::geometry::GridState;
use crate::memo::MemoizedData;
use crate::state::statistics::{Counters, Statistics};
use crate::state::DynamicState;

#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data
    pub memo: MemoizedData,
    /// Mutable search state
    pub state: DynamicState,
    /// Counters updated by the predicates
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a search context for a `height` x `width` board.
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_memo(MemoizedData::new(height, width))
    }

    /// Create a search context with existing MEMO data.
    pub fn with_memo(memo: MemoizedData) -> Self {
        Self {
            memo,
            state: DynamicState::new(),
            statistics: Statistics::new(),
        }
    }

    /// Make `candidate` the board under examination, clearing any
    /// classification left from the previous one.
    pub fn set_candidate(&mut self, candidate: GridState) {
        self.state.candidate = Some(candidate);
        self.state.trajectory = None;
        self.statistics.increment(Counters::Candidates);
    }

    /// The board under examination.
    ///
    /// # Panics
    ///
    /// Panics if no candidate has been set; predicates that call this must
    /// run after the enumerator.
    pub fn candidate(&self) -> GridState {
        self.state
            .candidate
            .unwrap_or_else(|| panic!("no candidate: predicate ran before the enumerator"))
    }

    /// Classification of the current candidate.
    ///
    /// # Panics
    ///
    /// Panics if the candidate has not been classified yet.
    pub fn trajectory(&self) -> Trajectory {
        self.state
            .trajectory
            .unwrap_or_else(|| panic!("candidate has not been classified"))
    }

    /// Whether any non-trivial symmetric image of `state` has been visited.
    pub fn has_visited_image(&self, state: &GridState) -> bool {
        self.memo
            .images(state)
            .any(|image| self.state.visited.contains(&image))
    }

    pub fn mark_visited(&mut self, state: GridState) {
        self.state.visited.insert(state);
    }

    /// Record a member of a period ≥ 2 cycle. It also counts as visited.
    pub fn record_oscillator(&mut self, member: GridState) {
        self.state.oscillators.insert(member);
        self.state.visited.insert(member);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_empty() {
        let ctx = SearchContext::new(3, 4);
        assert!(ctx.state.visited.is_empty());
        assert!(ctx.state.oscillators.is_empty());
        assert!(ctx.state.candidate.is_none());
        assert_eq!(ctx.statistics.get(Counters::Candidates), 0);
    }

    #[test]
    fn test_visited_image_ignores_identity() {
        let mut ctx = SearchContext::new(3, 4);
        let state: GridState = "o.../..../....".parse().unwrap();
        ctx.mark_visited(state);

        // The board itself is only found through a symmetry that fixes it,
        // and this one has none.
        assert!(!ctx.has_visited_image(&state));

        let mirrored: GridState = "...o/..../....".parse().unwrap();
        assert!(ctx.has_visited_image(&mirrored));
    }

    #[test]
    fn test_record_oscillator_marks_visited() {
        let mut ctx = SearchContext::new(3, 4);
        let member: GridState = ".oo./.oo./.oo.".parse().unwrap();
        ctx.record_oscillator(member);
        assert!(ctx.state.oscillators.contains(&member));
        assert!(ctx.state.visited.contains(&member));
    }

    #[test]
    fn test_set_candidate_clears_trajectory() {
        let mut ctx = SearchContext::new(3, 4);
        ctx.state.trajectory = Some(Trajectory {
            first_rep: 0,
            period: 1,
        });
        ctx.set_candidate(GridState::empty(3, 4).unwrap());
        assert!(ctx.state.trajectory.is_none());
        assert_eq!(ctx.statistics.get(Counters::Candidates), 1);
    }

    #[test]
    #[should_panic(expected = "no candidate")]
    fn test_candidate_before_enumeration() {
        let ctx = SearchContext::new(3, 4);
        ctx.candidate();
    }
}
