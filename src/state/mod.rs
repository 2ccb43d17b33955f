// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! Everything here is owned by one [`SearchContext`](crate::context::SearchContext)
//! and lives only as long as a single search:
//! - `Visited`: every board examined, plus every recorded cycle member
//! - `Oscillators`: one cycle member per trajectory ending in a period ≥ 2 cycle
//! - the board currently being examined and its classification
//! - statistics counters

pub mod statistics;

use crate::cycle::Trajectory;
use crate::geometry::GridState;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Per-search mutable state.
#[derive(Debug, Default)]
pub struct DynamicState {
    /// Boards already examined. Membership of any symmetric image prunes a candidate.
    pub visited: FxHashSet<GridState>,

    /// Discovered cycle members, in a stable order for reporting.
    pub oscillators: BTreeSet<GridState>,

    /// Board currently moving through the predicates.
    pub candidate: Option<GridState>,

    /// Classification of `candidate`, once computed.
    pub trajectory: Option<Trajectory>,
}

impl DynamicState {
    pub fn new() -> Self {
        Self::default()
    }
}
