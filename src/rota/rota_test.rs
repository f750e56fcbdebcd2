#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, RngCore, SeedableRng};

    use crate::game::common::{GameBitboard, GameColor, GamePosition, IGame};
    use crate::rota::rota_game::{
        adjacent, RotaBoard, RotaGame, RotaMove, RotaPosition, BOARD_CELLS, CENTER_CELL,
        WINNING_TRIPLES,
    };
    use crate::rota::simple_players::PlayerRand;

    #[test]
    fn win_on_every_triple() {
        for triple in WINNING_TRIPLES {
            let mut board = RotaBoard::new();
            for cell in triple {
                board.place(cell, GameColor::Player1);
            }
            assert!(board.is_win(GameColor::Player1), "triple {:?}", triple);
            assert!(!board.is_win(GameColor::Player2));
        }
    }

    #[test]
    fn no_win_below_three_pieces() {
        let board = RotaBoard::from_str("xx_______");
        assert!(!board.is_win(GameColor::Player1));
        assert!(!board.is_win(GameColor::Player2));
    }

    #[test]
    fn no_win_off_the_triples() {
        for s in ["x_x_x____", "_x_x_x___", "x__x___x_", "__x__x_x_"] {
            let board = RotaBoard::from_str(s);
            assert!(!board.is_win(GameColor::Player1), "board {:?}", s);
        }
    }

    #[test]
    fn single_winner_along_played_games() {
        let seed: u64 = rand::thread_rng().gen();
        println!("[single_winner_along_played_games] Using seed {}", seed);
        let mut rand = StdRng::seed_from_u64(seed);

        for _ in 0..100 {
            let mut player1 = PlayerRand::from_seed(rand.next_u64());
            let mut player2 = PlayerRand::from_seed(rand.next_u64());
            let mut game = RotaGame::new();
            let (final_pos, _winner) = game.play_until_over(&mut player1, &mut player2, Some(100));
            assert!(
                !(final_pos.board().is_win(GameColor::Player1)
                    && final_pos.board().is_win(GameColor::Player2))
            );
        }
    }

    #[test]
    fn adjacency_wheel() {
        /* Hub touches the whole rim */
        assert_eq!(adjacent(CENTER_CELL), &[0, 1, 2, 3, 5, 6, 7, 8][..]);

        /* Corner: center, below, right */
        assert_eq!(adjacent(0), &[4, 3, 1][..]);

        /* Every rim cell touches the hub and exactly two rim neighbors */
        for cell in (0..BOARD_CELLS).filter(|&c| c != CENTER_CELL) {
            let neighbors = adjacent(cell);
            assert_eq!(neighbors.len(), 3, "cell {}", cell);
            assert!(neighbors.contains(&CENTER_CELL));
        }

        /* Symmetric, no self loops, no duplicates */
        for cell in 0..BOARD_CELLS {
            for &neighbor in adjacent(cell) {
                assert_ne!(neighbor, cell);
                assert!(adjacent(neighbor).contains(&cell));
            }
            let mut sorted = adjacent(cell).to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), adjacent(cell).len());
        }

        /* Diagonal rim cells only meet through the hub */
        assert!(!adjacent(0).contains(&8));
        assert!(!adjacent(2).contains(&6));
        assert!(!adjacent(0).contains(&2));
    }

    #[test]
    fn placement_legality() {
        let empty = RotaBoard::new();
        assert_eq!(empty.legal_moves(GameColor::Player1).len(), 9);
        assert!(empty.legal_moves(GameColor::Player2).is_empty());

        /* After Player1's first placement only Player2 may act */
        let board = RotaBoard::from_str("x________");
        assert!(board.legal_moves(GameColor::Player1).is_empty());
        assert_eq!(board.legal_moves(GameColor::Player2).len(), 8);
        assert!(board
            .legal_moves(GameColor::Player2)
            .iter()
            .all(|(_, m)| matches!(m, RotaMove::Place(_))));

        /* Stage (3,2): Player1 waits, Player2 places on any of 4 free cells */
        let board = RotaBoard::from_str("xxxoo____");
        assert!(board.legal_moves(GameColor::Player1).is_empty());
        assert_eq!(board.legal_moves(GameColor::Player2).len(), 4);
    }

    #[test]
    fn movement_legality() {
        /* x on 0,1,2 and o on 3,4,5, cells 6,7,8 free. Every neighbor of
         * the x cells is occupied, so Player1 is blocked. */
        let board = RotaBoard::from_str("xxxooo___");
        assert!(board.legal_moves(GameColor::Player1).is_empty());

        /* Player2: 3->[4,0,6] gives 6, 4->rim gives 6,7,8, 5->[4,2,8] gives 8 */
        let moves = board.legal_moves(GameColor::Player2);
        let descriptors: Vec<RotaMove> = moves.iter().map(|&(_, m)| m).collect();
        assert_eq!(
            descriptors,
            vec![
                RotaMove::relocate(3, 6),
                RotaMove::relocate(4, 6),
                RotaMove::relocate(4, 7),
                RotaMove::relocate(4, 8),
                RotaMove::relocate(5, 8),
            ]
        );
    }

    #[test]
    fn move_descriptor_reproduces_candidate() {
        let seed: u64 = rand::thread_rng().gen();
        println!("[move_descriptor_reproduces_candidate] Using seed {}", seed);
        let mut rand = StdRng::seed_from_u64(seed);

        for _ in 0..20 {
            let mut player1 = PlayerRand::from_seed(rand.next_u64());
            let mut player2 = PlayerRand::from_seed(rand.next_u64());
            let mut game = RotaGame::new();
            for _ in 0..60 {
                if game.is_over() {
                    break;
                }
                let pos = *game.get_position();
                let color = pos.get_turn();
                for (candidate, m) in pos.board().legal_moves(color) {
                    /* Re-apply the descriptor through the board mutators */
                    let mut replayed = *pos.board();
                    match m {
                        RotaMove::Place(cell) => replayed.place(cell as usize, color),
                        RotaMove::Relocate(from, to) => {
                            replayed.relocate(from as usize, to as usize)
                        }
                    }
                    assert_eq!(replayed, candidate);
                }
                let player: &mut dyn crate::game::common::GamePlayer<RotaGame> =
                    match color {
                        GameColor::Player1 => &mut player1,
                        GameColor::Player2 => &mut player2,
                    };
                let next_move = player.next_move(&pos).unwrap();
                game.play_single_turn(next_move);
            }
        }
    }

    #[test]
    fn board_encoding_roundtrip() {
        let board = RotaBoard::from_str("x_ox__o_x");
        let cells = board.cells();
        assert_eq!(cells, [1, 0, 2, 1, 0, 0, 2, 0, 1]);
        assert_eq!(RotaBoard::from_cells(&cells), board);
    }

    #[test]
    #[should_panic]
    fn reject_bad_cell_value() {
        RotaBoard::from_cells(&[0, 0, 0, 0, 3, 0, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn reject_bad_board_char() {
        RotaBoard::from_str("x___q____");
    }

    #[test]
    #[should_panic]
    fn place_on_occupied_cell() {
        let mut board = RotaBoard::from_str("x________");
        board.place(0, GameColor::Player2);
    }

    #[test]
    #[should_panic]
    fn relocate_from_empty_cell() {
        let mut board = RotaBoard::from_str("x________");
        board.relocate(1, 2);
    }

    #[test]
    fn placement_turn_matches_explicit_tag() {
        let seed: u64 = rand::thread_rng().gen();
        println!("[placement_turn_matches_explicit_tag] Using seed {}", seed);
        let mut rand = StdRng::seed_from_u64(seed);

        for _ in 0..20 {
            let mut player = PlayerRand::from_seed(rand.next_u64());
            let mut pos = RotaPosition::new();
            while !pos.is_over() && pos.board().placement_turn().is_some() {
                assert_eq!(pos.board().placement_turn(), Some(pos.get_turn()));
                let next_move =
                    <_ as crate::game::common::GamePlayer<RotaGame>>::next_move(&mut player, &pos)
                        .unwrap();
                pos.make_move(next_move);
            }
        }
    }

    #[test]
    fn position_from_str() {
        let pos = RotaPosition::from_str("xxxoo_o__o");
        assert_eq!(pos.get_turn(), GameColor::Player2);
        assert!(pos.is_over());
        assert_eq!(pos.get_winner(), Some(GameColor::Player1));

        let ongoing = RotaPosition::from_str("x________o");
        assert_eq!(ongoing.get_turn(), GameColor::Player2);
        assert!(!ongoing.is_over());
        assert_eq!(ongoing.get_legal_moves().len(), 8);
    }

    #[test]
    fn count_pieces() {
        let board = RotaBoard::from_str("xxo_o___x");
        assert_eq!(board.pieces(GameColor::Player1).count(), 3);
        assert_eq!(board.pieces(GameColor::Player2).count(), 2);
        assert_eq!(board.pieces_count(GameColor::Player1), 3);
    }
}
