use crate::game::common::{GameColor, GamePlayer, GamePosition};
use crate::rota::rota_game::{RotaGame, RotaMove, RotaPosition};
use crate::solver::states::StateSpace;

/// The trained move table of one player: state index to best move, None for
/// states on which the player has no legal move. Immutable once extracted.
pub struct Policy {
    player: GameColor,
    moves: Vec<Option<RotaMove>>,
}

impl Policy {
    pub(crate) fn new(player: GameColor, moves: Vec<Option<RotaMove>>) -> Self {
        Self { player, moves }
    }

    pub fn player(&self) -> GameColor {
        self.player
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn best_move(&self, state: usize) -> Option<RotaMove> {
        self.moves[state]
    }
}

/// A game player that acts out a trained policy.
pub struct PolicyPlayer<'a> {
    policy: &'a Policy,
    states: &'a StateSpace,
}

impl<'a> PolicyPlayer<'a> {
    pub fn new(policy: &'a Policy, states: &'a StateSpace) -> Self {
        Self { policy, states }
    }
}

impl GamePlayer<RotaGame> for PolicyPlayer<'_> {
    fn next_move(&mut self, position: &RotaPosition) -> Option<RotaMove> {
        assert_eq!(position.get_turn(), self.policy.player());
        let state = self.states.index_of(position.board());
        let m = self.policy.best_move(state);
        if m.is_none() && !position.get_legal_moves().is_empty() {
            /* The enumeration and the trained table disagree on this state */
            panic!(
                "policy of {} has no move for non-terminal state {}:\n{}",
                crate::rota::rota_game::color_to_str(Some(self.policy.player())),
                state,
                position.board()
            );
        }
        m
    }
}
