use clap::Parser;
use rota::game::common::{GameColor, GamePosition, IGame};
use rota::rota::rota_game::{color_to_str, RotaGame};
use rota::solver::policy::PolicyPlayer;
use rota::solver::states::StateSpace;
use rota::solver::value_iteration::{PolicySolver, DEFAULT_DISCOUNT, DEFAULT_TOLERANCE};
use rota::utils;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value_t = DEFAULT_DISCOUNT)]
    discount: f32,
    #[clap(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f32,
    #[clap(long)]
    max_iterations: Option<u32>,
    #[clap(long, default_value_t = 200)]
    ply_cap: u32,
}

fn main() {
    utils::init_globals();
    let args = Args::parse();

    log::info!("Enumerating the state space...");
    let states = StateSpace::enumerate();

    let mut policies = Vec::new();
    for color in [GameColor::Player1, GameColor::Player2] {
        log::info!("Training the policy for {}...", color_to_str(Some(color)));
        let solver = PolicySolver::new_custom(
            &states,
            color,
            args.discount,
            args.tolerance,
            args.max_iterations,
        );
        policies.push(solver.train_policy());
    }

    let mut player1 = PolicyPlayer::new(&policies[0], &states);
    let mut player2 = PolicyPlayer::new(&policies[1], &states);

    let mut game = RotaGame::new();
    let (final_pos, winner) =
        game.play_until_over(&mut player1, &mut player2, Some(args.ply_cap));

    if !final_pos.is_over() {
        log::info!("No winner within {} plies", args.ply_cap);
    } else {
        log::info!("The winner is: {}", color_to_str(winner));
    }
    final_pos.print();
}
