use clap::Parser;
use rota::game::common::{GameColor, GamePosition, IGame};
use rota::rota::cmd_player::RotaPlayerCmd;
use rota::rota::rota_game::{color_to_str, RotaGame};
use rota::solver::policy::PolicyPlayer;
use rota::solver::states::StateSpace;
use rota::solver::value_iteration::{PolicySolver, DEFAULT_DISCOUNT, DEFAULT_TOLERANCE};
use rota::utils;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Side played by the human, 1 or 2
    #[clap(long, default_value_t = 2)]
    human_player: u32,
    #[clap(long, default_value_t = DEFAULT_DISCOUNT)]
    discount: f32,
    #[clap(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f32,
    #[clap(long)]
    max_iterations: Option<u32>,
}

fn main() {
    utils::init_globals();
    let args = Args::parse();

    let trained_color = match args.human_player {
        1 => GameColor::Player2,
        2 => GameColor::Player1,
        other => panic!("unknown player: {}", other),
    };

    log::info!("Enumerating the state space...");
    let states = StateSpace::enumerate();
    log::info!(
        "Training the policy for {}...",
        color_to_str(Some(trained_color))
    );
    let solver = PolicySolver::new_custom(
        &states,
        trained_color,
        args.discount,
        args.tolerance,
        args.max_iterations,
    );
    let policy = solver.train_policy();

    let mut policy_player = PolicyPlayer::new(&policy, &states);
    let mut human = RotaPlayerCmd::new();

    let mut game = RotaGame::new();
    let (final_pos, winner) = match trained_color {
        GameColor::Player1 => game.play_until_over(&mut policy_player, &mut human, None),
        GameColor::Player2 => game.play_until_over(&mut human, &mut policy_player, None),
    };
    println!("The winner is: {}, details below:", color_to_str(winner));
    final_pos.print();
}
