use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::common::{GamePlayer, GamePosition, IGame};

pub struct PlayerRand {
    rand: StdRng,
}

impl PlayerRand {
    pub fn new() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rand: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PlayerRand {
    fn default() -> Self {
        Self::new()
    }
}

impl<Game: IGame> GamePlayer<Game> for PlayerRand {
    fn next_move(&mut self, position: &Game::Position) -> Option<Game::Move> {
        let moves = position.get_legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rand.gen_range(0..moves.len())])
    }
}
