//! Property tests for the merge kernel and the move contract.

use proptest::prelude::*;

use rust_2048::{merge_line_left, Direction, EngineBuilder};

/// A cell: empty, or a tile from 2 up to 4096.
fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        2 => (1u32..=12).prop_map(|e| 1 << e),
    ]
}

fn line() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(tile(), 2..=8)
}

proptest! {
    /// Applying the kernel to its own output is a no-op.
    #[test]
    fn kernel_is_idempotent(mut input in line()) {
        merge_line_left(&mut input);
        let once = input.clone();
        let second_gain = merge_line_left(&mut input);

        prop_assert_eq!(input, once);
        prop_assert_eq!(second_gain, 0);
    }

    /// After the kernel, no zero sits left of a tile.
    #[test]
    fn kernel_output_is_left_compacted(mut input in line()) {
        merge_line_left(&mut input);

        let first_zero = input.iter().position(|&v| v == 0).unwrap_or(input.len());
        prop_assert!(input[first_zero..].iter().all(|&v| v == 0));
    }

    /// Merging never creates or destroys tile value, only combines it.
    #[test]
    fn kernel_conserves_value_sum(mut input in line()) {
        let sum_before: u64 = input.iter().map(|&v| u64::from(v)).sum();
        merge_line_left(&mut input);
        let sum_after: u64 = input.iter().map(|&v| u64::from(v)).sum();

        prop_assert_eq!(sum_before, sum_after);
    }

    /// Every merge doubles a tile of at least 2, so gains come in
    /// multiples of 4.
    #[test]
    fn kernel_gain_is_a_multiple_of_four(mut input in line()) {
        let gain = merge_line_left(&mut input);
        prop_assert_eq!(gain % 4, 0);
    }

    /// Driving the engine with arbitrary inputs keeps the state legal:
    /// valid cell values, monotone score, no-op moves leave no trace,
    /// one history record per successful move.
    #[test]
    fn engine_walk_preserves_invariants(
        seed in 0u64..1_000,
        raw_moves in prop::collection::vec(0u8..4, 1..40),
    ) {
        let mut engine = EngineBuilder::new().seed(seed).build();
        let mut successes = 0usize;

        for raw in raw_moves {
            let direction = Direction::from_u8(raw).unwrap();
            let before = engine.snapshot();
            let moved = engine.make_move(direction);
            let after = engine.snapshot();

            if moved {
                successes += 1;
                prop_assert!(after.score >= before.score);
            } else {
                prop_assert_eq!(after.board.cells(), before.board.cells());
                prop_assert_eq!(after.score, before.score);
            }

            prop_assert!(after
                .board
                .cells()
                .iter()
                .all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())));

            if after.won || after.game_over {
                break;
            }
        }

        prop_assert_eq!(engine.history_len(), successes);
    }
}
