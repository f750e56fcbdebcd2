use clap::Parser;
use rota::game::common::GameColor;
use rota::rota::remote::RemoteSession;
use rota::solver::states::StateSpace;
use rota::solver::value_iteration::PolicySolver;
use rota::utils;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value = "https://rota.praetorian.com/rota/service/play.php")]
    base_url: String,
    #[clap(long)]
    email: String,
    /// Moves to reach in each game before asking the server for the next one
    #[clap(long, default_value_t = 30)]
    moves_per_game: u32,
}

fn main() {
    utils::init_globals();
    let args = Args::parse();

    log::info!("Enumerating the state space...");
    let states = StateSpace::enumerate();
    log::info!("Training the policy for both sides...");
    let policy1 = PolicySolver::new(&states, GameColor::Player1).train_policy();
    let policy2 = PolicySolver::new(&states, GameColor::Player2).train_policy();

    let mut session = RemoteSession::new(&args.base_url, &states, &policy1, &policy2);
    if !session.start_game(&args.email) {
        log::error!("Failed to start a session.");
        return;
    }
    while !session.is_done() {
        while session.moves() < args.moves_per_game {
            if !session.make_move() {
                log::error!("Failed to make a move, aborting.");
                return;
            }
        }
        if !session.next_game() {
            log::error!("Failed to advance to the next game, aborting.");
            return;
        }
    }
    log::info!("Session complete, games won: {}", session.games_won());
}
