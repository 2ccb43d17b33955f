// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Classification of a candidate's trajectory, and recording of oscillators.

use crate::context::SearchContext;
use crate::cycle::{advance, detect_cycle};
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use log::trace;

/// Run the cycle detector on the candidate and store its [`Trajectory`](crate::cycle::Trajectory).
#[derive(Debug, Default)]
pub struct ClassifyPredicate;

impl Predicate for ClassifyPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let candidate = ctx.candidate();
        let memo = &ctx.memo;
        let trajectory = detect_cycle(&candidate, |state| memo.step(state));

        ctx.state.trajectory = Some(trajectory);
        ctx.statistics.increment(Counters::Classified);
        if trajectory.is_oscillator() {
            ctx.statistics.increment(Counters::Oscillators);
        } else {
            ctx.statistics.increment(Counters::FixedPoints);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Classify"
    }
}

/// For a candidate ending in a cycle of period 2 or more, step past the
/// transient and record the first cycle member reached.
#[derive(Debug, Default)]
pub struct RecordOscillatorPredicate;

impl Predicate for RecordOscillatorPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let trajectory = ctx.trajectory();
        if trajectory.is_oscillator() {
            let candidate = ctx.candidate();
            let memo = &ctx.memo;
            let member = advance(&candidate, trajectory.first_rep, |state| memo.step(state));
            trace!(
                "[RecordOscillator] {} -> {} (transient {}, period {})",
                candidate,
                member,
                trajectory.first_rep,
                trajectory.period
            );
            ctx.record_oscillator(member);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordOscillator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::Trajectory;
    use crate::geometry::GridState;

    fn classify(ctx: &mut SearchContext, board: &str) -> Trajectory {
        ctx.set_candidate(board.parse().unwrap());
        assert_eq!(ClassifyPredicate.try_pred(ctx, 0), PredicateResult::Success);
        ctx.trajectory()
    }

    #[test]
    fn test_classify_fixed_point() {
        let mut ctx = SearchContext::new(3, 4);
        let trajectory = classify(&mut ctx, "..../..../....");
        assert_eq!(trajectory, Trajectory { first_rep: 0, period: 1 });
        assert_eq!(ctx.statistics.get(Counters::FixedPoints), 1);
        assert_eq!(ctx.statistics.get(Counters::Oscillators), 0);
    }

    #[test]
    fn test_classify_oscillator() {
        let mut ctx = SearchContext::new(3, 4);
        let trajectory = classify(&mut ctx, ".oo./.oo./.oo.");
        assert_eq!(trajectory, Trajectory { first_rep: 0, period: 2 });
        assert_eq!(ctx.statistics.get(Counters::Oscillators), 1);
        assert_eq!(ctx.statistics.get(Counters::Classified), 1);
    }

    #[test]
    fn test_record_skips_fixed_points() {
        let mut ctx = SearchContext::new(3, 4);
        classify(&mut ctx, "o.../..../....");
        RecordOscillatorPredicate.try_pred(&mut ctx, 0);
        assert!(ctx.state.oscillators.is_empty());
    }

    #[test]
    fn test_record_lands_on_cycle() {
        let mut ctx = SearchContext::new(3, 4);
        let trajectory = classify(&mut ctx, "oo../oo../oo..");
        assert!(trajectory.is_oscillator());
        RecordOscillatorPredicate.try_pred(&mut ctx, 0);

        let member: GridState = "oo../oo../oo..".parse().unwrap();
        assert!(ctx.state.oscillators.contains(&member));
        assert!(ctx.state.visited.contains(&member));
    }
}
