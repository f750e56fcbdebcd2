#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::game::common::{GameColor, GamePosition, IGame};
    use crate::rota::rota_game::{RotaBoard, RotaGame, RotaMove};
    use crate::solver::policy::PolicyPlayer;
    use crate::solver::states::{StateSpace, PLACEMENT_STAGES};
    use crate::solver::value_iteration::PolicySolver;

    #[test]
    fn enumeration_is_exhaustive_and_unique() {
        let states = StateSpace::enumerate();
        assert_eq!(states.len(), 4030);

        let unique: HashSet<&RotaBoard> = states.boards().iter().collect();
        assert_eq!(unique.len(), states.len());

        /* Boards appear grouped by stage, in stage order */
        let expected_sizes = [1, 9, 72, 252, 756, 1260, 1680];
        let mut next = 0;
        for ((count_a, count_b), size) in PLACEMENT_STAGES.into_iter().zip(expected_sizes) {
            for board in &states.boards()[next..next + size] {
                assert_eq!(board.pieces_count(GameColor::Player1) as usize, count_a);
                assert_eq!(board.pieces_count(GameColor::Player2) as usize, count_b);
            }
            next += size;
        }
        assert_eq!(next, states.len());
    }

    #[test]
    fn index_lookup_roundtrip() {
        let states = StateSpace::enumerate();
        for state in 0..states.len() {
            assert_eq!(states.index_of(states.board(state)), state);
        }
    }

    #[test]
    #[should_panic]
    fn lookup_of_unreachable_board_is_fatal() {
        let states = StateSpace::enumerate();
        /* Four pieces of one side never occur */
        let board = RotaBoard::from_str("xxxx_____");
        states.index_of(&board);
    }

    #[test]
    fn opponent_win_values_minus_100() {
        let states = StateSpace::enumerate();
        let solver = PolicySolver::new(&states, GameColor::Player1);
        let values = solver.solve();

        for state in 0..states.len() {
            if states.board(state).is_win(GameColor::Player2) {
                assert_eq!(values[state], -100.0);
            }
        }

        /* Both sides holding a triple at once: the opponent check wins */
        let both_win = RotaBoard::from_str("xxxooo___");
        assert!(both_win.is_win(GameColor::Player1));
        assert!(both_win.is_win(GameColor::Player2));
        assert_eq!(values[states.index_of(&both_win)], -100.0);
    }

    #[test]
    fn own_win_values_plus_100() {
        let states = StateSpace::enumerate();
        let solver = PolicySolver::new(&states, GameColor::Player1);
        let values = solver.solve();

        /* Player1 already won, Player2 holds no triple and Player1 can move */
        let won = RotaBoard::from_str("xxxoo_o__");
        assert!(won.is_win(GameColor::Player1));
        assert!(!won.is_win(GameColor::Player2));
        assert!(!won.legal_moves(GameColor::Player1).is_empty());
        assert_eq!(values[states.index_of(&won)], 100.0);
    }

    #[test]
    fn blocked_player_values_minus_100() {
        let states = StateSpace::enumerate();
        let solver = PolicySolver::new(&states, GameColor::Player2);
        let values = solver.solve();

        /* Player2 may not act before Player1's first placement */
        let empty = RotaBoard::new();
        assert_eq!(values[states.index_of(&empty)], -100.0);
    }

    #[test]
    fn empty_board_policy_places() {
        let states = StateSpace::enumerate();
        let policy = PolicySolver::new(&states, GameColor::Player1).train_policy();

        let empty_state = states.index_of(&RotaBoard::new());
        match policy.best_move(empty_state) {
            Some(RotaMove::Place(_)) => {}
            other => panic!("expected a placement on the empty board, got {:?}", other),
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let states = StateSpace::enumerate();

        let solver_a = PolicySolver::new(&states, GameColor::Player1);
        let solver_b = PolicySolver::new(&states, GameColor::Player1);
        let values_a = solver_a.solve();
        let values_b = solver_b.solve();
        assert_eq!(values_a, values_b);

        let policy_a = solver_a.extract_policy(&values_a);
        let policy_b = solver_b.extract_policy(&values_b);
        for state in 0..states.len() {
            assert_eq!(policy_a.best_move(state), policy_b.best_move(state));
        }
    }

    #[test]
    fn trained_policies_play_out_a_full_game() {
        let states = StateSpace::enumerate();
        let policy1 = PolicySolver::new(&states, GameColor::Player1).train_policy();
        let policy2 = PolicySolver::new(&states, GameColor::Player2).train_policy();

        let mut player1 = PolicyPlayer::new(&policy1, &states);
        let mut player2 = PolicyPlayer::new(&policy2, &states);

        let ply_cap = 200;
        let mut game = RotaGame::new();
        let (final_pos, winner) = game.play_until_over(&mut player1, &mut player2, Some(ply_cap));

        if let Some(winner) = winner {
            assert!(final_pos.board().is_win(winner));
        } else if final_pos.is_over() {
            /* Draw by no legal move */
            assert!(final_pos.get_legal_moves().is_empty());
        }
        /* Otherwise the ply cap kicked in, which is a legal outcome of two
         * optimal policies cycling through the movement phase */
    }
}
