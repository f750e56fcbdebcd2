use std::fmt::{self, Display};

use lazy_static::lazy_static;

use crate::game::common::{GameBitboard, GameColor, GameMove, GamePlayer, GamePosition, IGame};

pub const BOARD_CELLS: usize = 9;
pub const CENTER_CELL: usize = 4;
pub const PIECES_PER_PLAYER: u32 = 3;

/// The 12 winning cell triples of the wheel board.
/// The first eight are the regular grid lines, the last four exist only on
/// the wheel layout. The exact triples are part of the game definition and
/// are never derived.
pub const WINNING_TRIPLES: [[usize; 3]; 12] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [5, 7, 8],
    [3, 6, 7],
    [0, 1, 3],
    [1, 2, 5],
];

lazy_static! {
    static ref WINNING_MASKS: [u16; 12] = {
        let mut masks = [0u16; 12];
        for (i, triple) in WINNING_TRIPLES.iter().enumerate() {
            for &cell in triple {
                masks[i] |= 1u16 << cell;
            }
        }
        masks
    };

    /// Neighbors per cell. The center is adjacent to all other cells, a rim
    /// cell is adjacent to the center and to its in-range axis neighbors.
    /// Enumeration order is fixed: center, up, down, left, right.
    static ref ADJACENT: [Vec<usize>; 9] = {
        std::array::from_fn(|cell| {
            if cell == CENTER_CELL {
                return (0..BOARD_CELLS).filter(|&c| c != CENTER_CELL).collect();
            }
            let (r, c) = (cell / 3, cell % 3);
            let mut neighbors = vec![CENTER_CELL];
            let mut push = |neighbor: usize| {
                /* An edge cell's axis neighbor may be the center itself */
                if neighbor != CENTER_CELL {
                    neighbors.push(neighbor);
                }
            };
            if r > 0 {
                push((r - 1) * 3 + c);
            }
            if r < 2 {
                push((r + 1) * 3 + c);
            }
            if c > 0 {
                push(r * 3 + c - 1);
            }
            if c < 2 {
                push(r * 3 + c + 1);
            }
            neighbors
        })
    };
}

pub fn adjacent(cell: usize) -> &'static [usize] {
    assert!(cell < BOARD_CELLS);
    &ADJACENT[cell]
}

pub fn color_to_str(c: Option<GameColor>) -> String {
    match c {
        None => String::from("None"),
        Some(GameColor::Player1) => String::from("X"),
        Some(GameColor::Player2) => String::from("O"),
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RotaMove {
    Place(u8),
    Relocate(u8, u8),
}

impl RotaMove {
    pub fn place(cell: usize) -> Self {
        assert!(cell < BOARD_CELLS);
        RotaMove::Place(cell as u8)
    }

    pub fn relocate(from: usize, to: usize) -> Self {
        assert!(from < BOARD_CELLS && to < BOARD_CELLS);
        RotaMove::Relocate(from as u8, to as u8)
    }
}

impl GameMove for RotaMove {
    type Game = RotaGame;
}

impl Display for RotaMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotaMove::Place(cell) => write!(f, "place {}", cell),
            RotaMove::Relocate(from, to) => write!(f, "move {} to {}", from, to),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct RotaBitboard {
    bitmap: u16,
}

impl RotaBitboard {
    pub fn get_raw(&self) -> u16 {
        self.bitmap
    }
}

impl GameBitboard for RotaBitboard {
    type Game = RotaGame;

    fn new() -> Self {
        Self { bitmap: 0 }
    }

    fn get(&self, idx: usize) -> bool {
        assert!(idx < BOARD_CELLS);
        (self.bitmap & (1u16 << idx)) != 0
    }

    fn set(&mut self, idx: usize, val: bool) {
        assert!(idx < BOARD_CELLS);
        if val {
            self.bitmap |= 1u16 << idx;
        } else {
            self.bitmap &= !(1u16 << idx);
        }
    }

    fn count(&self) -> u32 {
        self.bitmap.count_ones()
    }
}

/// A bare board, one bitboard per player. This is the canonical state
/// representation the solver enumerates: no turn tag, piece counts alone
/// determine which side may act (see `placement_turn`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct RotaBoard {
    board_a: RotaBitboard,
    board_b: RotaBitboard,
}

impl RotaBoard {
    pub fn new() -> Self {
        Self {
            board_a: GameBitboard::new(),
            board_b: GameBitboard::new(),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        assert_eq!(s.chars().count(), BOARD_CELLS, "unexpected string length");
        let mut board = Self::new();
        for (idx, c) in s.chars().enumerate() {
            match c {
                'x' => board.board_a.set(idx, true),
                'o' => board.board_b.set(idx, true),
                '_' => {}
                _ => panic!("unknown board char: {:?}", c),
            }
        }
        board
    }

    /// Board encoding used across the external interfaces: cell values
    /// 0 (empty), 1 (Player1), 2 (Player2), in cell-index order.
    pub fn cells(&self) -> [u8; BOARD_CELLS] {
        std::array::from_fn(|idx| GameColor::to_idx(self.get_cell(idx)))
    }

    /// Panics on any cell value other than 0/1/2, before any state lookup
    /// may be attempted on the result.
    pub fn from_cells(cells: &[u8; BOARD_CELLS]) -> Self {
        let mut board = Self::new();
        for (idx, &val) in cells.iter().enumerate() {
            match GameColor::from_idx(val) {
                None => {}
                Some(GameColor::Player1) => board.board_a.set(idx, true),
                Some(GameColor::Player2) => board.board_b.set(idx, true),
            }
        }
        board
    }

    pub fn pieces(&self, player: GameColor) -> RotaBitboard {
        match player {
            GameColor::Player1 => self.board_a,
            GameColor::Player2 => self.board_b,
        }
    }

    pub fn pieces_count(&self, player: GameColor) -> u32 {
        self.pieces(player).count()
    }

    pub fn get_cell(&self, idx: usize) -> Option<GameColor> {
        assert!(idx < BOARD_CELLS);
        if self.board_a.get(idx) {
            return Some(GameColor::Player1);
        }
        if self.board_b.get(idx) {
            return Some(GameColor::Player2);
        }
        None
    }

    /// Put a piece of `player` on an empty cell.
    pub fn place(&mut self, cell: usize, player: GameColor) {
        assert!(self.get_cell(cell).is_none(), "cell {} is occupied", cell);
        match player {
            GameColor::Player1 => self.board_a.set(cell, true),
            GameColor::Player2 => self.board_b.set(cell, true),
        }
    }

    /// Slide the piece on `from` to the empty cell `to`. The mover is
    /// whichever side occupies `from`.
    pub fn relocate(&mut self, from: usize, to: usize) {
        let mover = self
            .get_cell(from)
            .unwrap_or_else(|| panic!("cell {} is empty", from));
        assert!(self.get_cell(to).is_none(), "cell {} is occupied", to);
        match mover {
            GameColor::Player1 => {
                self.board_a.set(from, false);
                self.board_a.set(to, true);
            }
            GameColor::Player2 => {
                self.board_b.set(from, false);
                self.board_b.set(to, true);
            }
        }
    }

    /// Apply a move of `player`, returning the resulting board.
    pub fn moved_board(&self, m: RotaMove, player: GameColor) -> Self {
        let mut next = *self;
        match m {
            RotaMove::Place(cell) => next.place(cell as usize, player),
            RotaMove::Relocate(from, to) => {
                assert_eq!(self.get_cell(from as usize), Some(player));
                next.relocate(from as usize, to as usize);
            }
        }
        next
    }

    /// True iff the player's occupied cells are exactly one of the 12
    /// winning triples. A player never owns more than 3 pieces, so mask
    /// equality is exact set membership.
    pub fn is_win(&self, player: GameColor) -> bool {
        if self.pieces_count(player) < PIECES_PER_PLAYER {
            return false;
        }
        let raw = self.pieces(player).get_raw();
        WINNING_MASKS.iter().any(|&mask| raw == mask)
    }

    /// The side to place next, inferred from piece counts alone. None once
    /// both sides placed all pieces and the movement phase began.
    pub fn placement_turn(&self) -> Option<GameColor> {
        let count_a = self.pieces_count(GameColor::Player1);
        let count_b = self.pieces_count(GameColor::Player2);
        if count_b >= PIECES_PER_PLAYER {
            return None;
        }
        if count_a == count_b {
            Some(GameColor::Player1)
        } else {
            Some(GameColor::Player2)
        }
    }

    /// All legal moves of `player` on this board, as (resulting board, move)
    /// pairs. Scan order is deterministic: ascending cell index, then the
    /// fixed adjacency order. An empty result means the player is blocked or
    /// it is not their turn.
    pub fn legal_moves(&self, player: GameColor) -> Vec<(RotaBoard, RotaMove)> {
        let my_count = self.pieces_count(player);
        let opp_count = self.pieces_count(player.opposite());
        let mut moves = Vec::new();

        /* Player1 acts only when the piece counts are balanced */
        if player == GameColor::Player1 && opp_count != my_count {
            return moves;
        }

        if my_count < PIECES_PER_PLAYER {
            /* Player2 places only while trailing Player1's count */
            if player == GameColor::Player2 && opp_count <= my_count {
                return moves;
            }
            for cell in 0..BOARD_CELLS {
                if self.get_cell(cell).is_none() {
                    let m = RotaMove::place(cell);
                    moves.push((self.moved_board(m, player), m));
                }
            }
        } else {
            for from in 0..BOARD_CELLS {
                if !self.pieces(player).get(from) {
                    continue;
                }
                for &to in adjacent(from) {
                    if self.get_cell(to).is_none() {
                        let m = RotaMove::relocate(from, to);
                        moves.push((self.moved_board(m, player), m));
                    }
                }
            }
        }
        moves
    }
}

impl Default for RotaBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RotaBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3 {
            for c in 0..3 {
                let ch = match self.get_cell(r * 3 + c) {
                    None => '_',
                    Some(GameColor::Player1) => 'x',
                    Some(GameColor::Player2) => 'o',
                };
                write!(f, "{}", ch)?;
                if c < 2 {
                    write!(f, " ")?;
                }
            }
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A live position: the canonical board plus an explicit turn tag. The tag
/// is redundant during the placement phase, where the piece counts imply the
/// side to move; the two are asserted to agree on every move.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct RotaPosition {
    board: RotaBoard,
    turn: GameColor,
    winner: Option<GameColor>,
}

impl RotaPosition {
    pub fn from_board(board: RotaBoard, turn: GameColor) -> Self {
        let mut pos = Self {
            board,
            turn,
            winner: None,
        };
        pos.check_winner();
        pos
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        assert_eq!(
            s.chars().count(),
            BOARD_CELLS + 1,
            "unexpected string length"
        );
        let board = RotaBoard::from_str(&s[..BOARD_CELLS]);
        let turn = match s.chars().nth(BOARD_CELLS).unwrap() {
            'x' => GameColor::Player1,
            'o' => GameColor::Player2,
            c => panic!("unknown turn char: {:?}", c),
        };
        Self::from_board(board, turn)
    }

    pub fn board(&self) -> &RotaBoard {
        &self.board
    }

    pub fn is_valid_move(&self, m: RotaMove) -> bool {
        self.board
            .legal_moves(self.turn)
            .iter()
            .any(|&(_, legal)| legal == m)
    }

    pub fn make_move(&mut self, m: RotaMove) {
        assert!(self.is_valid_move(m));

        /* The counts-inferred side to place must match the explicit tag */
        if let Some(inferred) = self.board.placement_turn() {
            debug_assert_eq!(inferred, self.turn);
        }

        self.board = self.board.moved_board(m, self.turn);
        self.turn = self.turn.opposite();
        self.check_winner();
    }

    fn check_winner(&mut self) {
        self.winner = if self.board.is_win(GameColor::Player1) {
            Some(GameColor::Player1)
        } else if self.board.is_win(GameColor::Player2) {
            Some(GameColor::Player2)
        } else {
            None
        };
    }
}

impl GamePosition for RotaPosition {
    type Game = RotaGame;

    fn new() -> Self {
        Self {
            board: RotaBoard::new(),
            turn: GameColor::Player1,
            winner: None,
        }
    }

    fn get_turn(&self) -> GameColor {
        self.turn
    }

    fn get_legal_moves(&self) -> Vec<RotaMove> {
        if self.winner.is_some() {
            return vec![];
        }
        self.board
            .legal_moves(self.turn)
            .into_iter()
            .map(|(_, m)| m)
            .collect()
    }

    fn get_moved_position(&self, m: RotaMove) -> Self {
        let mut res = *self;
        res.make_move(m);
        res
    }

    fn is_over(&self) -> bool {
        self.winner.is_some() || self.get_legal_moves().is_empty()
    }

    fn get_winner(&self) -> Option<GameColor> {
        assert!(self.is_over());
        self.winner
    }

    fn print(&self) {
        println!("{}", self.board);
    }
}

pub struct RotaGame {
    pos: RotaPosition,
}

impl IGame for RotaGame {
    type Position = RotaPosition;
    type Move = RotaMove;
    type Bitboard = RotaBitboard;
    const BOARD_SIZE: usize = BOARD_CELLS;

    fn new() -> Self {
        Self {
            pos: RotaPosition::new(),
        }
    }

    fn new_from_pos(pos: Self::Position) -> Self {
        Self { pos }
    }

    fn get_position(&self) -> &Self::Position {
        &self.pos
    }

    fn is_over(&self) -> bool {
        self.pos.is_over()
    }

    fn get_winner(&self) -> Option<GameColor> {
        self.pos.get_winner()
    }

    fn play_single_turn(&mut self, next_move: Self::Move) {
        assert!(self.pos.is_valid_move(next_move));
        self.pos.make_move(next_move);
    }

    fn play_until_over(
        &mut self,
        player1: &mut dyn GamePlayer<Self>,
        player2: &mut dyn GamePlayer<Self>,
        ply_limit: Option<u32>,
    ) -> (Self::Position, Option<GameColor>) {
        let mut plies = 0;
        while !self.is_over() && ply_limit.map_or(true, |limit| plies < limit) {
            let player: &mut dyn GamePlayer<Self> = match self.pos.get_turn() {
                GameColor::Player1 => player1,
                GameColor::Player2 => player2,
            };
            let next_move = player.next_move(&self.pos).unwrap();
            self.play_single_turn(next_move);
            plies += 1;
        }
        let winner = if self.is_over() { self.get_winner() } else { None };
        (self.pos, winner)
    }
}
