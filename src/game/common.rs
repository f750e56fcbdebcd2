#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameColor {
    Player1,
    Player2,
}

impl GameColor {
    pub fn opposite(&self) -> GameColor {
        match self {
            GameColor::Player1 => GameColor::Player2,
            GameColor::Player2 => GameColor::Player1,
        }
    }

    pub fn to_idx(player: Option<GameColor>) -> u8 {
        match player {
            None => 0,
            Some(GameColor::Player1) => 1,
            Some(GameColor::Player2) => 2,
        }
    }

    pub fn from_idx(player: u8) -> Option<GameColor> {
        match player {
            0 => None,
            1 => Some(GameColor::Player1),
            2 => Some(GameColor::Player2),
            other => panic!("unknown player index: {}", other),
        }
    }
}

pub trait IGame: Sized {
    type Position: GamePosition<Game = Self>;
    type Move: GameMove<Game = Self>;
    type Bitboard: GameBitboard<Game = Self>;
    const BOARD_SIZE: usize;

    fn new() -> Self;
    fn new_from_pos(pos: Self::Position) -> Self;
    fn get_position(&self) -> &Self::Position;
    fn is_over(&self) -> bool;
    fn get_winner(&self) -> Option<GameColor>;
    fn play_single_turn(&mut self, next_move: Self::Move);

    /// Play with the given players until the game is over or `ply_limit` moves
    /// were made, whichever comes first. Returns the final position and the
    /// winner (None for a draw or an unfinished capped game).
    fn play_until_over(
        &mut self,
        player1: &mut dyn GamePlayer<Self>,
        player2: &mut dyn GamePlayer<Self>,
        ply_limit: Option<u32>,
    ) -> (Self::Position, Option<GameColor>);
}

pub trait GamePosition: Clone + Copy + Eq + std::hash::Hash {
    type Game: IGame<Position = Self>;

    fn new() -> Self;
    fn get_turn(&self) -> GameColor;
    fn get_legal_moves(&self) -> Vec<<Self::Game as IGame>::Move>;
    fn get_moved_position(&self, m: <Self::Game as IGame>::Move) -> Self;
    fn is_over(&self) -> bool;
    fn get_winner(&self) -> Option<GameColor>;
    fn print(&self);
}

pub trait GameMove: Clone + Copy + Eq + std::hash::Hash + std::fmt::Display + std::fmt::Debug {
    type Game: IGame<Move = Self>;
}

pub trait GameBitboard: Clone + Copy + Eq {
    type Game: IGame<Bitboard = Self>;

    fn new() -> Self;
    fn get(&self, idx: usize) -> bool;
    fn set(&mut self, idx: usize, val: bool);
    fn count(&self) -> u32;
}

pub trait GamePlayer<Game: IGame> {
    fn next_move(&mut self, position: &Game::Position) -> Option<Game::Move>;
}
