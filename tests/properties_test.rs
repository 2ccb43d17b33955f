// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for the transition function and the cycle detector.
//!
//! Boards are drawn at random from small rectangles and squares, so both
//! the four- and eight-element symmetry groups are exercised.

use life_oscillators::cycle::{advance, detect_cycle, group_cycles};
use life_oscillators::{search_board, symmetries, GridState, Torus};
use proptest::prelude::*;

/// A random board of 1-5 rows and 1-6 columns.
fn board() -> impl Strategy<Value = GridState> {
    (1usize..=5, 1usize..=6, any::<u64>()).prop_map(|(height, width, bits)| {
        GridState::from_bits(height, width, bits).expect("at most 30 cells")
    })
}

/// A random square board of side 1-5.
fn square_board() -> impl Strategy<Value = GridState> {
    (1usize..=5, any::<u64>()).prop_map(|(side, bits)| {
        GridState::from_bits(side, side, bits).expect("at most 25 cells")
    })
}

// =============================================================================
// Transition function
// =============================================================================

proptest! {
    /// Stepping is a pure function of the board.
    #[test]
    fn prop_step_deterministic(state in board()) {
        let torus = Torus::for_state(&state);
        prop_assert_eq!(torus.step(&state), torus.step(&state));
        prop_assert_eq!(torus.step(&state), state.step());
    }

    /// Stepping preserves the board's dimensions.
    #[test]
    fn prop_step_keeps_dimensions(state in board()) {
        let next = state.step();
        prop_assert_eq!((next.height(), next.width()), (state.height(), state.width()));
    }

    /// The rule commutes with every symmetry of a rectangle.
    #[test]
    fn prop_step_commutes_with_rectangle_symmetries(state in board()) {
        let torus = Torus::for_state(&state);
        for remap in symmetries(state.height(), state.width(), true) {
            prop_assert_eq!(
                torus.step(&state.apply_symmetry(&remap)),
                torus.step(&state).apply_symmetry(&remap),
                "{:?}", remap.symmetry()
            );
        }
    }

    /// The rule commutes with every symmetry of a square, diagonals included.
    #[test]
    fn prop_step_commutes_with_square_symmetries(state in square_board()) {
        let torus = Torus::for_state(&state);
        for remap in symmetries(state.height(), state.width(), true) {
            prop_assert_eq!(
                torus.step(&state.apply_symmetry(&remap)),
                torus.step(&state).apply_symmetry(&remap),
                "{:?}", remap.symmetry()
            );
        }
    }

    /// Symmetries permute cells, so population is unchanged.
    #[test]
    fn prop_symmetry_preserves_population(state in square_board()) {
        for remap in symmetries(state.height(), state.width(), true) {
            prop_assert_eq!(state.apply_symmetry(&remap).population(), state.population());
        }
    }

    /// Text notation round-trips.
    #[test]
    fn prop_display_parses_back(state in board()) {
        let parsed: GridState = state.to_string().parse().unwrap();
        prop_assert_eq!(parsed, state);
    }
}

// =============================================================================
// Cycle detection
// =============================================================================

proptest! {
    /// After the transient, the trajectory repeats with the reported period.
    #[test]
    fn prop_eventually_periodic(state in board()) {
        let torus = Torus::for_state(&state);
        let step = |s: &GridState| torus.step(s);
        let trajectory = detect_cycle(&state, step);
        prop_assert!(trajectory.period >= 1);

        let entry = advance(&state, trajectory.first_rep, step);
        prop_assert_eq!(advance(&entry, trajectory.period, step), entry);
    }

    /// The reported period is the smallest one, and the transient is minimal.
    #[test]
    fn prop_period_and_transient_minimal(state in board()) {
        let torus = Torus::for_state(&state);
        let step = |s: &GridState| torus.step(s);
        let trajectory = detect_cycle(&state, step);
        let entry = advance(&state, trajectory.first_rep, step);

        for shorter in 1..trajectory.period {
            prop_assert_ne!(advance(&entry, shorter, step), entry);
        }
        if trajectory.first_rep > 0 {
            let before = advance(&state, trajectory.first_rep - 1, step);
            prop_assert_ne!(advance(&before, trajectory.period, step), before);
        }
    }

    /// Grouping a state with its whole trajectory yields exactly one cycle.
    #[test]
    fn prop_trajectory_groups_into_one_cycle(state in board()) {
        let torus = Torus::for_state(&state);
        let step = |s: &GridState| torus.step(s);
        let trajectory = detect_cycle(&state, step);

        let mut walk = vec![state];
        for _ in 0..trajectory.first_rep + trajectory.period {
            let next = step(walk.last().unwrap());
            walk.push(next);
        }
        let cycles = group_cycles(&walk, step);
        prop_assert_eq!(cycles.len(), 1);
        prop_assert_eq!(cycles[0].period(), trajectory.period);
    }
}

// =============================================================================
// Search
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Every recorded state is periodic with period at least 2.
    #[test]
    fn prop_search_records_cycle_members(height in 1usize..=3, width in 1usize..=4) {
        let outcome = search_board(height, width).unwrap();
        let torus = Torus::new(height, width);
        for state in &outcome.oscillators {
            let trajectory = detect_cycle(state, |s| torus.step(s));
            prop_assert_eq!(trajectory.first_rep, 0);
            prop_assert!(trajectory.period >= 2);
        }
    }
}
