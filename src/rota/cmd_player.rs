use std::io;

use crate::game::common::{GamePlayer, GamePosition};
use crate::rota::rota_game::{RotaGame, RotaMove, RotaPosition};

pub struct RotaPlayerCmd {}

impl RotaPlayerCmd {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for RotaPlayerCmd {
    fn default() -> Self {
        Self::new()
    }
}

fn read_cell(prompt: &str) -> Option<usize> {
    println!("{}", prompt);
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read input");
    match line.trim().parse::<usize>() {
        Err(e) => {
            println!("invalid number: {}", e);
            None
        }
        Ok(cell) if cell < 9 => Some(cell),
        Ok(cell) => {
            println!("cell {} out of range, expected 0-8", cell);
            None
        }
    }
}

impl GamePlayer<RotaGame> for RotaPlayerCmd {
    fn next_move(&mut self, position: &RotaPosition) -> Option<RotaMove> {
        let legal_moves = position.get_legal_moves();
        if legal_moves.is_empty() {
            return None;
        }
        let placing = legal_moves
            .iter()
            .all(|m| matches!(m, RotaMove::Place(_)));

        println!("Current position:");
        position.print();

        loop {
            let move_ = if placing {
                let cell = match read_cell("Choose a cell to place on [0-8]:") {
                    None => continue,
                    Some(cell) => cell,
                };
                RotaMove::place(cell)
            } else {
                let from = match read_cell("Move from cell [0-8]:") {
                    None => continue,
                    Some(from) => from,
                };
                let to = match read_cell("Move to cell [0-8]:") {
                    None => continue,
                    Some(to) => to,
                };
                RotaMove::relocate(from, to)
            };

            if position.is_valid_move(move_) {
                return Some(move_);
            }
            println!("invalid move");
        }
    }
}
