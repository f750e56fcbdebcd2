use crate::game::common::GameColor;
use crate::rota::rota_game::{color_to_str, RotaBoard, RotaMove, BOARD_CELLS};
use crate::solver::policy::Policy;
use crate::solver::states::StateSpace;

/// Client for the remote ROTA game server. All communication is HTTP GET
/// requests against a single endpoint, with a session cookie issued on the
/// first request:
///
/// ```text
///     ?request=new&email=[email]   start a session, returns the board
///     ?request=place&location=[c]  place a piece, 1-based cell
///     ?request=move&from=[f]&to=[t] slide a piece, 1-based cells
///     ?request=next                advance to the next game; the response
///                                  carries a final hash once all games in
///                                  the challenge were won
/// ```
///
/// Responses are JSON with a `data` object holding `board` (9 characters,
/// '-'/'p'/'c' for empty/our piece/server piece) and a `moves` counter.
pub struct RemoteSession<'a> {
    base_url: String,
    client: reqwest::blocking::Client,
    states: &'a StateSpace,
    policies: [&'a Policy; 2],
    board: RotaBoard,
    player: GameColor,
    moves: u32,
    games_won: u32,
    done: bool,
}

impl<'a> RemoteSession<'a> {
    pub fn new(
        base_url: &str,
        states: &'a StateSpace,
        policy1: &'a Policy,
        policy2: &'a Policy,
    ) -> Self {
        assert_eq!(policy1.player(), GameColor::Player1);
        assert_eq!(policy2.player(), GameColor::Player2);
        Self {
            base_url: String::from(base_url),
            client: reqwest::blocking::Client::builder()
                .cookie_store(true)
                .build()
                .expect("failed to build http client"),
            states,
            policies: [policy1, policy2],
            board: RotaBoard::new(),
            player: GameColor::Player1,
            moves: 0,
            games_won: 0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    pub fn start_game(&mut self, email: &str) -> bool {
        log::info!("[Remote] starting session");
        let data = match self.request(&[("request", String::from("new")), ("email", String::from(email))]) {
            None => return false,
            Some(data) => data,
        };
        let board_str = match data["board"].as_str() {
            None => {
                eprintln!("[Remote] response without a board: {}", data);
                return false;
            }
            Some(s) => String::from(s),
        };
        log::info!("[Remote] started new game: {}", data);
        self.moves = 0;
        self.set_player(&board_str);
        self.set_board(&board_str);
        true
    }

    /// Play one move of the trained policy for our side and sync the board
    /// from the server response.
    pub fn make_move(&mut self) -> bool {
        let state = self.states.index_of(&self.board);
        let policy = match self.player {
            GameColor::Player1 => self.policies[0],
            GameColor::Player2 => self.policies[1],
        };
        let next_move = match policy.best_move(state) {
            None => {
                eprintln!(
                    "[Remote] policy of {} has no move for state {}",
                    color_to_str(Some(self.player)),
                    state
                );
                return false;
            }
            Some(m) => m,
        };

        /* The server addresses cells 1-based */
        let data = match next_move {
            RotaMove::Place(cell) => self.request(&[
                ("request", String::from("place")),
                ("location", (cell + 1).to_string()),
            ]),
            RotaMove::Relocate(from, to) => self.request(&[
                ("request", String::from("move")),
                ("from", (from + 1).to_string()),
                ("to", (to + 1).to_string()),
            ]),
        };
        let data = match data {
            None => return false,
            Some(data) => data,
        };
        log::info!("[Remote] {}: {}", next_move, data);

        match data["board"].as_str() {
            None => {
                eprintln!("[Remote] response without a board: {}", data);
                false
            }
            Some(s) => {
                let board_str = String::from(s);
                if let Some(moves) = data["moves"].as_u32() {
                    self.moves = moves;
                }
                self.set_board(&board_str);
                true
            }
        }
    }

    /// Advance to the next game. Marks the session done once the server
    /// responds with the final hash instead of a fresh board.
    pub fn next_game(&mut self) -> bool {
        let data = match self.request(&[("request", String::from("next"))]) {
            None => return false,
            Some(data) => data,
        };
        if data.has_key("hash") {
            log::info!("[Remote] done, hash: {}", data["hash"]);
            self.done = true;
            return true;
        }
        let board_str = match data["board"].as_str() {
            None => {
                eprintln!("[Remote] response without a board: {}", data);
                return false;
            }
            Some(s) => String::from(s),
        };
        log::info!("[Remote] started next game: {}", data);
        self.games_won += 1;
        self.moves = data["moves"].as_u32().unwrap_or(0);
        self.set_player(&board_str);
        self.set_board(&board_str);
        true
    }

    fn request(&self, params: &[(&str, String)]) -> Option<json::JsonValue> {
        let response = match self.client.get(&self.base_url).query(params).send() {
            Err(e) => {
                eprintln!("[Remote] request failed: {}", e);
                return None;
            }
            Ok(response) => response,
        };
        let text = match response.text() {
            Err(e) => {
                eprintln!("[Remote] failed to read response: {}", e);
                return None;
            }
            Ok(text) => text,
        };
        match json::parse(&text) {
            Err(e) => {
                eprintln!("[Remote] malformed response {:?}: {}", text, e);
                None
            }
            Ok(value) => Some(value["data"].clone()),
        }
    }

    /* The server places its pieces first when we join as the second player */
    fn set_player(&mut self, board_str: &str) {
        self.player = if board_str.contains('c') {
            GameColor::Player2
        } else {
            GameColor::Player1
        };
        log::info!("[Remote] playing as {}", color_to_str(Some(self.player)));
    }

    fn set_board(&mut self, board_str: &str) {
        assert_eq!(
            board_str.chars().count(),
            BOARD_CELLS,
            "unexpected board string length"
        );
        let mut cells = [0u8; BOARD_CELLS];
        for (idx, c) in board_str.chars().enumerate() {
            cells[idx] = match c {
                '-' => 0,
                'p' => GameColor::to_idx(Some(self.player)),
                'c' => GameColor::to_idx(Some(self.player.opposite())),
                _ => panic!("unknown board char: {:?}", c),
            };
        }
        self.board = RotaBoard::from_cells(&cells);
    }
}
