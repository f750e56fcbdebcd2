use std::collections::HashMap;

use itertools::Itertools;

use crate::game::common::GameColor;
use crate::rota::rota_game::{RotaBoard, BOARD_CELLS};

/// Piece-count snapshots of the alternating placement turns, in game order.
/// The final (3,3) stage covers every board of the movement phase, which
/// never changes piece counts.
pub const PLACEMENT_STAGES: [(usize, usize); 7] =
    [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2), (3, 3)];

/// The exhaustive, deduplicated array of reachable boards. A board's index
/// in the array is its stable identity for the value and policy tables.
pub struct StateSpace {
    boards: Vec<RotaBoard>,
    index: HashMap<RotaBoard, usize>,
}

impl StateSpace {
    /// Enumerate every distinct arrangement of each placement stage,
    /// concatenated in stage order. Arrangements within a stage are distinct
    /// by construction (cell combinations, not permutations), and stages
    /// cannot overlap because their piece counts differ.
    pub fn enumerate() -> Self {
        let mut boards = Vec::new();
        for (count_a, count_b) in PLACEMENT_STAGES {
            for cells_a in (0..BOARD_CELLS).combinations(count_a) {
                let free = (0..BOARD_CELLS)
                    .filter(|c| !cells_a.contains(c))
                    .collect_vec();
                for cells_b in free.into_iter().combinations(count_b) {
                    let mut board = RotaBoard::new();
                    for &cell in &cells_a {
                        board.place(cell, GameColor::Player1);
                    }
                    for &cell in &cells_b {
                        board.place(cell, GameColor::Player2);
                    }
                    boards.push(board);
                }
            }
        }

        let index: HashMap<RotaBoard, usize> = boards
            .iter()
            .enumerate()
            .map(|(idx, board)| (*board, idx))
            .collect();
        assert_eq!(index.len(), boards.len(), "duplicate board enumerated");

        Self { boards, index }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn boards(&self) -> &[RotaBoard] {
        &self.boards
    }

    pub fn board(&self, state: usize) -> &RotaBoard {
        &self.boards[state]
    }

    /// State index of a board. A miss means the enumeration is incomplete or
    /// the board is corrupt, neither of which is recoverable.
    pub fn index_of(&self, board: &RotaBoard) -> usize {
        match self.index.get(board) {
            Some(&idx) => idx,
            None => panic!("board missing from the enumerated state space:\n{}", board),
        }
    }
}
