// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for oscillators of Conway's Game of Life on small tori.
//!
//! Every configuration of a `3 x n` board with wraparound edges is
//! enumerated and followed under the B3/S23 rule until it repeats. Boards
//! whose trajectory settles into a cycle of period 2 or more contribute one
//! member of that cycle to the result.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per board size:
//! - neighbor index table of the torus
//! - index permutations for each non-trivial symmetry of the board
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state owned by a single search:
//! - Visited - every board examined, plus recorded cycle members
//! - Oscillators - the cycle members reported to the caller
//! - the current candidate and its trajectory
//!
//! # Search Algorithm
//!
//! The search is a predicate program run by a backtracking engine:
//!
//! 1. **EnumeratePredicate**: one choice per board, by population then index order
//! 2. **SymmetryPrunePredicate**: reject boards whose mirror image was already seen
//! 3. **ClassifyPredicate**: Floyd cycle detection on the trajectory
//! 4. **RecordOscillatorPredicate**: keep the first cycle member reached
//! 5. **FailPredicate**: backtrack into the enumerator for the next board
//!
//! # Example
//!
//! ```
//! use life_oscillators::search_board;
//!
//! let outcome = search_board(3, 4).unwrap();
//! let cycles = outcome.cycles();
//! assert_eq!(cycles.len(), 2);
//! assert!(cycles.iter().all(|cycle| cycle.period() == 2));
//! ```

pub mod context;
pub mod cycle;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod predicates;
pub mod rule;
pub mod search;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use context::SearchContext;
pub use cycle::{detect_cycle, Cycle, Trajectory};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::GridError;
pub use geometry::GridState;
pub use rule::{step, Torus};
pub use search::{search, search_board, SearchOutcome};
pub use symmetry::{symmetries, Remapping, Symmetry};
