use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use connect_four_bot::ai::minimax::{exhaustive_value, search};
use connect_four_bot::game::position::column_base;
use connect_four_bot::game::{GameState, MoveError, Player, COLS};

/// Play `choices` as indices into the legal columns, stopping at game end.
fn play_out(choices: &[usize]) -> Vec<GameState> {
    let mut states = vec![GameState::initial()];
    let mut state = GameState::initial();
    for &choice in choices {
        if state.is_over() {
            break;
        }
        let legal = state.legal_columns();
        let column = legal.iter().nth(choice % legal.len()).unwrap();
        state.apply(column).unwrap();
        states.push(state);
    }
    states
}

fn choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..COLS, 0..42)
}

proptest! {
    #[test]
    fn position_invariants_hold_after_every_move(choices in choices()) {
        for state in play_out(&choices) {
            let position = state.position();
            let red = position.bitboard(Player::Red);
            let blue = position.bitboard(Player::Blue);
            prop_assert_eq!(red & blue, 0);

            for (column, &height) in position.heights().iter().enumerate() {
                let filled = height - column_base(column);
                prop_assert!(filled <= 6, "column {} holds {}", column, filled);
            }

            prop_assert_eq!(position.disc_count(), state.turn());
            prop_assert_eq!(
                state.is_over(),
                state.legal_columns().is_empty() || state.winner().is_some()
            );
        }
    }

    #[test]
    fn snapshot_roundtrip_is_identity(choices in choices()) {
        let state = *play_out(&choices).last().unwrap();
        let json = state.to_json().unwrap();
        let restored = GameState::from_json(&json).unwrap();

        prop_assert_eq!(restored, state);
        prop_assert_eq!(restored.to_json().unwrap(), json);
    }

    #[test]
    fn illegal_moves_leave_state_unchanged(choices in choices(), column in 0usize..10) {
        let mut state = *play_out(&choices).last().unwrap();
        if !state.legal_columns().contains(column) {
            let before = state;
            prop_assert_eq!(state.apply(column), Err(MoveError::InvalidMove { column }));
            prop_assert_eq!(state, before);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn alpha_beta_value_matches_minimax(
        choices in prop::collection::vec(0usize..COLS, 0..30),
        depth in 1usize..=3,
        seed in any::<u64>(),
    ) {
        let state = *play_out(&choices).last().unwrap();
        let maximizer = state.current_player();
        let mut rng = StdRng::seed_from_u64(seed);

        match search(&state, depth, maximizer, &mut rng) {
            Some(report) => {
                prop_assert!(state.legal_columns().contains(report.column));
                prop_assert_eq!(Some(report.value), exhaustive_value(&state, depth, maximizer));
            }
            None => prop_assert!(state.is_over()),
        }
    }
}
