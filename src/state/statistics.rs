// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the search
//! predicates as candidates are enumerated, pruned and classified.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Boards produced by the enumerator.
    Candidates,
    /// Boards skipped because a symmetric image had already been visited.
    SymmetryPruned,
    /// Boards run through the cycle detector.
    Classified,
    /// Classified boards whose trajectory ends in a fixed point.
    FixedPoints,
    /// Classified boards whose trajectory ends in a cycle of period 2 or more.
    Oscillators,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} candidates, {} pruned by symmetry, {} classified ({} fixed, {} oscillating)",
            self.get(Counters::Candidates),
            self.get(Counters::SymmetryPruned),
            self.get(Counters::Classified),
            self.get(Counters::FixedPoints),
            self.get(Counters::Oscillators),
        )
    }
}
