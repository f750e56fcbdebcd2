pub mod cmd_player;
pub mod remote;
pub mod rota_game;
pub mod simple_players;

mod rota_test;
