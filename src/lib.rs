pub mod game;
pub mod rota;
pub mod solver;
pub mod utils;
