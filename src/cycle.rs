// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cycle detection on eventually periodic trajectories.
//!
//! Iterating a deterministic function on a finite set must eventually repeat,
//! so every trajectory `x, f(x), f(f(x)), ...` is a transient of length
//! `first_rep` followed by a cycle of length `period`. [`detect_cycle`] finds
//! both with Floyd's tortoise-and-hare, holding only three states at a time.
//!
//! # Example
//!
//! ```
//! use life_oscillators::cycle::detect_cycle;
//!
//! // 0 -> 1 -> 2 -> 3 -> 4 -> 2 ...
//! let trajectory = detect_cycle(&0u32, |&x| if x < 4 { x + 1 } else { 2 });
//! assert_eq!(trajectory.first_rep, 2);
//! assert_eq!(trajectory.period, 3);
//! ```

use crate::geometry::GridState;
use rustc_hash::FxHashSet;

/// Shape of a trajectory: transient length and eventual period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trajectory {
    /// Steps taken before the trajectory first enters its cycle.
    pub first_rep: usize,
    /// Length of the cycle; always at least 1.
    pub period: usize,
}

impl Trajectory {
    /// Period 1: the trajectory ends in an absorbing state.
    pub fn is_fixed_point(&self) -> bool {
        self.period == 1
    }

    /// Period 2 or more.
    pub fn is_oscillator(&self) -> bool {
        self.period > 1
    }
}

/// Find the transient length and period of the trajectory from `start`.
///
/// `step` must be deterministic and the reachable state space finite;
/// otherwise this need not terminate.
///
/// Three phases:
/// 1. tortoise moves 1, hare moves 2, from one step past `start`, until they meet;
/// 2. tortoise restarts at `start`, both move 1 until they meet again, at
///    the first repeated state, after `first_rep` steps;
/// 3. a pointer walks the cycle from there back to itself, giving `period`.
pub fn detect_cycle<T, F>(start: &T, mut step: F) -> Trajectory
where
    T: PartialEq + Clone,
    F: FnMut(&T) -> T,
{
    let mut tortoise = step(start);
    let mut hare = step(&tortoise);
    while tortoise != hare {
        tortoise = step(&tortoise);
        let midway = step(&hare);
        hare = step(&midway);
    }

    let mut first_rep = 0;
    tortoise = start.clone();
    while tortoise != hare {
        tortoise = step(&tortoise);
        hare = step(&hare);
        first_rep += 1;
    }

    let mut period = 1;
    hare = step(&tortoise);
    while tortoise != hare {
        hare = step(&hare);
        period += 1;
    }

    Trajectory { first_rep, period }
}

/// Apply `step` to `start` `steps` times.
pub fn advance<T, F>(start: &T, steps: usize, mut step: F) -> T
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    let mut state = start.clone();
    for _ in 0..steps {
        state = step(&state);
    }
    state
}

/// One periodic orbit of the Life rule.
///
/// Members are in trajectory order, starting from the smallest member, so
/// two walks of the same cycle produce equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cycle {
    members: Vec<GridState>,
}

impl Cycle {
    /// Walk the cycle containing `entry`, which must already be periodic.
    fn from_member<F>(entry: GridState, mut step: F) -> Self
    where
        F: FnMut(&GridState) -> GridState,
    {
        let mut members = vec![entry];
        let mut next = step(&entry);
        while next != entry {
            members.push(next);
            next = step(&next);
        }
        let start = members
            .iter()
            .enumerate()
            .min_by_key(|(_, state)| **state)
            .map_or(0, |(index, _)| index);
        members.rotate_left(start);
        Self { members }
    }

    pub fn members(&self) -> &[GridState] {
        &self.members
    }

    pub fn period(&self) -> usize {
        self.members.len()
    }

    /// The smallest member, used as the cycle's name in reports.
    pub fn representative(&self) -> &GridState {
        &self.members[0]
    }

    pub fn contains(&self, state: &GridState) -> bool {
        self.members.contains(state)
    }

    /// Render every phase side by side, one text line per board row.
    pub fn render(&self) -> Vec<String> {
        let height = self.representative().height();
        let mut lines = vec![String::new(); height];
        for (phase, member) in self.members.iter().enumerate() {
            for (line, row) in lines.iter_mut().zip(member.render()) {
                if phase > 0 {
                    line.push_str("  ");
                }
                line.push_str(&row);
            }
        }
        lines
    }
}

/// Split a collection of states into the disjoint cycles they lie on.
///
/// Each state not already accounted for is followed to its cycle, which is
/// then walked in full. Cycles are returned in order of representative.
pub fn group_cycles<'a, I, F>(states: I, mut step: F) -> Vec<Cycle>
where
    I: IntoIterator<Item = &'a GridState>,
    F: FnMut(&GridState) -> GridState,
{
    let mut claimed: FxHashSet<GridState> = FxHashSet::default();
    let mut cycles = Vec::new();

    for state in states {
        if claimed.contains(state) {
            continue;
        }
        let trajectory = detect_cycle(state, &mut step);
        let entry = advance(state, trajectory.first_rep, &mut step);
        if claimed.contains(&entry) {
            continue;
        }
        let cycle = Cycle::from_member(entry, &mut step);
        claimed.extend(cycle.members.iter().copied());
        cycles.push(cycle);
    }

    cycles.sort();
    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Torus;

    #[test]
    fn test_pure_cycle() {
        let trajectory = detect_cycle(&0u32, |&x| (x + 1) % 5);
        assert_eq!(trajectory, Trajectory { first_rep: 0, period: 5 });
        assert!(trajectory.is_oscillator());
    }

    #[test]
    fn test_fixed_point_after_transient() {
        let trajectory = detect_cycle(&10u32, |&x| x.saturating_sub(3));
        // 10, 7, 4, 1, 0, 0 ...
        assert_eq!(trajectory, Trajectory { first_rep: 4, period: 1 });
        assert!(trajectory.is_fixed_point());
    }

    #[test]
    fn test_immediate_fixed_point() {
        let trajectory = detect_cycle(&7u32, |&x| x);
        assert_eq!(trajectory, Trajectory { first_rep: 0, period: 1 });
    }

    #[test]
    fn test_rho_shape() {
        // 0 -> 1 -> ... -> 9 -> 3
        let trajectory = detect_cycle(&0u32, |&x| if x < 9 { x + 1 } else { 3 });
        assert_eq!(trajectory, Trajectory { first_rep: 3, period: 7 });
    }

    #[test]
    fn test_advance() {
        assert_eq!(advance(&1u64, 10, |&x| x * 2), 1024);
        assert_eq!(advance(&5u64, 0, |&x| x * 2), 5);
    }

    #[test]
    fn test_empty_board_is_absorbing() {
        for width in 1..8 {
            let empty = GridState::empty(3, width).unwrap();
            let torus = Torus::for_state(&empty);
            let trajectory = detect_cycle(&empty, |s| torus.step(s));
            assert_eq!(trajectory.period, 1);
            assert_eq!(trajectory.first_rep, 0);
        }
    }

    #[test]
    fn test_group_cycles_merges_phases() {
        let inner: GridState = ".oo./.oo./.oo.".parse().unwrap();
        let outer: GridState = "o..o/o..o/o..o".parse().unwrap();
        let left: GridState = "oo../oo../oo..".parse().unwrap();
        let torus = Torus::new(3, 4);

        let cycles = group_cycles(&[inner, outer, left], |s| torus.step(s));
        assert_eq!(cycles.len(), 2);
        for cycle in &cycles {
            assert_eq!(cycle.period(), 2);
        }
        let with_inner = cycles.iter().find(|c| c.contains(&inner)).unwrap();
        assert!(with_inner.contains(&outer));
        assert!(!with_inner.contains(&left));
        assert_eq!(with_inner.members(), &[inner.min(outer), inner.max(outer)]);
    }

    #[test]
    fn test_cycle_starts_at_smallest_member() {
        let inner: GridState = ".oo./.oo./.oo.".parse().unwrap();
        let outer: GridState = "o..o/o..o/o..o".parse().unwrap();
        let torus = Torus::new(3, 4);

        let from_inner = group_cycles(&[inner], |s| torus.step(s));
        let from_outer = group_cycles(&[outer], |s| torus.step(s));
        assert_eq!(from_inner, from_outer);
        assert_eq!(from_inner[0].representative(), &inner.min(outer));
    }

    #[test]
    fn test_render_side_by_side() {
        let inner: GridState = ".oo./.oo./.oo.".parse().unwrap();
        let torus = Torus::new(3, 4);
        let cycles = group_cycles(&[inner], |s| torus.step(s));
        let lines = cycles[0].render();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 4 + 2 + 4);
    }
}
