// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! EnumeratePredicate: the choice point over every board configuration.
//!
//! Boards are enumerated as subsets of the cell indices, by increasing
//! subset size and lexicographically within a size:
//! `{}`, `{0}`, `{1}`, ..., `{0, 1}`, `{0, 2}`, ...
//!
//! Any exhaustive order visits the same boards, but symmetry pruning keeps
//! whichever member of an orbit comes first, so the order decides which
//! representatives the search reports.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::{GridState, MAX_SEARCH_CELLS};
use itertools::{Combinations, Itertools};
use log::{debug, error};
use std::fmt;
use std::ops::Range;

/// Iterator over the `2^cells` subsets of `0..cells`, as bitsets, by size.
pub struct SubsetEnumerator {
    cells: usize,
    size: usize,
    current: Combinations<Range<usize>>,
}

impl SubsetEnumerator {
    pub fn new(cells: usize) -> Self {
        Self {
            cells,
            size: 0,
            current: (0..cells).combinations(0),
        }
    }

    /// Number of subsets, saturating at `usize::MAX`.
    pub fn total(cells: usize) -> usize {
        u32::try_from(cells)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
            .unwrap_or(usize::MAX)
    }
}

impl Iterator for SubsetEnumerator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(subset) = self.current.next() {
                return Some(subset.iter().fold(0u64, |bits, &cell| bits | 1 << cell));
            }
            if self.size >= self.cells {
                return None;
            }
            self.size += 1;
            self.current = (0..self.cells).combinations(self.size);
        }
    }
}

impl fmt::Debug for SubsetEnumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubsetEnumerator")
            .field("cells", &self.cells)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Choice point yielding every board of the context's dimensions in turn.
///
/// Each choice installs the next board as the context's candidate. The
/// enumeration restarts whenever the predicate is entered afresh.
#[derive(Debug, Default)]
pub struct EnumeratePredicate {
    board: Option<GridState>,
    subsets: Option<SubsetEnumerator>,
}

impl EnumeratePredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for EnumeratePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (height, width) = (ctx.memo.height(), ctx.memo.width());
        let board = match GridState::empty(height, width) {
            Ok(board) => board,
            Err(err) => {
                error!("[Enumerate] cannot enumerate {}x{} boards: {}", height, width, err);
                return PredicateResult::Failure;
            }
        };
        let cells = board.cell_count();
        if cells > MAX_SEARCH_CELLS {
            error!(
                "[Enumerate] {}x{} has {} cells; at most {} can be enumerated",
                height, width, cells, MAX_SEARCH_CELLS
            );
            return PredicateResult::Failure;
        }
        debug!(
            "[Enumerate] {} boards of {}x{}",
            SubsetEnumerator::total(cells),
            height,
            width
        );
        self.board = Some(board);
        self.subsets = Some(SubsetEnumerator::new(cells));
        PredicateResult::Choices(SubsetEnumerator::total(cells))
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
        let (Some(board), Some(subsets)) = (self.board, self.subsets.as_mut()) else {
            return PredicateResult::Failure;
        };
        match subsets.next() {
            Some(bits) => {
                ctx.set_candidate(board.with_bits(bits));
                PredicateResult::Success
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Enumerate"
    }
}
