use crate::game::common::GameColor;
use crate::rota::rota_game::RotaMove;
use crate::solver::policy::Policy;
use crate::solver::states::StateSpace;

pub const DEFAULT_DISCOUNT: f32 = 0.25;
pub const DEFAULT_TOLERANCE: f32 = 0.01;

const WIN_REWARD: f32 = 100.0;
const LOSS_REWARD: f32 = -100.0;
const STEP_REWARD: f32 = 1.0;

/// Discounted minimax value iteration for one trained player over the full
/// state space. Every state is valued as if the trained player is to act on
/// it; the opponent's best reply is folded into each move's value.
pub struct PolicySolver<'a> {
    states: &'a StateSpace,
    player: GameColor,
    discount: f32,
    tolerance: f32,
    max_iterations: Option<u32>,

    /* Per-state move lists, computed once: moves are a pure function of
     * (board, player). `moves` holds the trained player's moves as
     * (resulting state, descriptor), `replies` the opponent's resulting
     * states. */
    moves: Vec<Vec<(usize, RotaMove)>>,
    replies: Vec<Vec<usize>>,
}

impl<'a> PolicySolver<'a> {
    pub fn new(states: &'a StateSpace, player: GameColor) -> Self {
        Self::new_custom(states, player, DEFAULT_DISCOUNT, DEFAULT_TOLERANCE, None)
    }

    pub fn new_custom(
        states: &'a StateSpace,
        player: GameColor,
        discount: f32,
        tolerance: f32,
        max_iterations: Option<u32>,
    ) -> Self {
        let opponent = player.opposite();
        let moves = states
            .boards()
            .iter()
            .map(|board| {
                board
                    .legal_moves(player)
                    .into_iter()
                    .map(|(next, m)| (states.index_of(&next), m))
                    .collect()
            })
            .collect();
        let replies = states
            .boards()
            .iter()
            .map(|board| {
                board
                    .legal_moves(opponent)
                    .into_iter()
                    .map(|(next, _)| states.index_of(&next))
                    .collect()
            })
            .collect();
        Self {
            states,
            player,
            discount,
            tolerance,
            max_iterations,
            moves,
            replies,
        }
    }

    pub fn player(&self) -> GameColor {
        self.player
    }

    /// Sweep the state space in index order, updating values in place, until
    /// the largest per-sweep change drops to the tolerance. Returns the
    /// converged value table (or the best effort on cap exhaustion).
    pub fn solve(&self) -> Vec<f32> {
        let mut values = vec![0.0; self.states.len()];
        let mut iteration = 0;
        loop {
            let mut epsilon: f32 = 0.0;
            for state in 0..self.states.len() {
                let old_value = values[state];
                let new_value = self.state_value(&values, state);
                epsilon = epsilon.max((old_value - new_value).abs());
                values[state] = new_value;
            }
            iteration += 1;
            log::info!("Iteration: {} Epsilon: {}", iteration, epsilon);

            if epsilon <= self.tolerance {
                break;
            }
            if let Some(cap) = self.max_iterations {
                if iteration >= cap {
                    log::warn!(
                        "value iteration stopped after {} iterations above tolerance {} (epsilon {}), table is best-effort",
                        iteration,
                        self.tolerance,
                        epsilon
                    );
                    break;
                }
            }
        }
        values
    }

    /// Derive the best move per state from a converged value table. The
    /// earliest move in scan order with a strictly greater value than every
    /// move before it is selected; a later move of equal value never
    /// replaces an earlier selection.
    pub fn extract_policy(&self, values: &[f32]) -> Policy {
        assert_eq!(values.len(), self.states.len());
        let best_moves = (0..self.states.len())
            .map(|state| {
                let mut best_move = None;
                let mut best_value = f32::NEG_INFINITY;
                for &(next, m) in &self.moves[state] {
                    let value = self.move_value(values, next);
                    if value > best_value {
                        best_value = value;
                        best_move = Some(m);
                    }
                }
                best_move
            })
            .collect();
        Policy::new(self.player, best_moves)
    }

    pub fn train_policy(&self) -> Policy {
        let values = self.solve();
        self.extract_policy(&values)
    }

    fn state_value(&self, values: &[f32], state: usize) -> f32 {
        let board = self.states.board(state);
        let moves = &self.moves[state];

        /* A lost or blocked state is terminal, and takes priority over a
         * simultaneous own win */
        if board.is_win(self.player.opposite()) || moves.is_empty() {
            return LOSS_REWARD;
        }
        if board.is_win(self.player) {
            return WIN_REWARD;
        }

        let mut best = f32::NEG_INFINITY;
        for &(next, _) in moves {
            best = best.max(self.move_value(values, next));
        }
        best
    }

    /// Value of moving into state `next`: one ply of reward plus the
    /// discounted opponent best reply. A winning board short-circuits the
    /// reply search; a blocked opponent contributes nothing.
    fn move_value(&self, values: &[f32], next: usize) -> f32 {
        let continuation = if self.states.board(next).is_win(self.player) {
            WIN_REWARD
        } else {
            let replies = &self.replies[next];
            if replies.is_empty() {
                0.0
            } else {
                replies
                    .iter()
                    .map(|&reply| values[reply])
                    .fold(f32::INFINITY, f32::min)
            }
        };
        STEP_REWARD + self.discount * continuation
    }
}
