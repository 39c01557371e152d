//! A game session between two named players: the board, whose piece is
//! picked up, and the scoreboard the board reports to.
//!
//! Input arrives in two steps the way a pointer would deliver it: `select`
//! picks up a piece and `submit` drops it on a target. While a capture chain
//! runs the chaining piece stays selected.

mod leaderboard;
mod players;
mod scoreboard;

pub use leaderboard::LeaderBoard;
pub use players::Player;
pub use scoreboard::Scoreboard;

use crate::draughts_boards::draughts_board::{
    BoardSnapshot, DraughtsBoard, Field, LegalMove, MoveType, NotationResult, TurnState,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Game {
    board: DraughtsBoard,
    scoreboard: Scoreboard,
    selected: Option<Field>,
}

impl Game {
    pub fn new(light_name: &str, dark_name: &str) -> Self {
        Self::with_board(DraughtsBoard::initial(), light_name, dark_name)
    }

    pub fn from_position(light_name: &str, dark_name: &str, position: &str) -> NotationResult<Self> {
        Ok(Self::with_board(DraughtsBoard::from_position(position)?, light_name, dark_name))
    }

    fn with_board(board: DraughtsBoard, light_name: &str, dark_name: &str) -> Self {
        let mut scoreboard = Scoreboard::new(light_name, dark_name);
        let players = scoreboard.players().clone();
        scoreboard.attach(players, &board);
        Game {
            selected: board.capture_chain(),
            board,
            scoreboard,
        }
    }

    pub fn board(&self) -> &DraughtsBoard {
        &self.board
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn players(&self) -> &[Player; 2] {
        self.scoreboard.players()
    }

    pub fn leaderboard(&self) -> &LeaderBoard {
        self.scoreboard.leaderboard()
    }

    pub fn status(&self) -> &str {
        self.scoreboard.status()
    }

    pub fn selected(&self) -> Option<Field> {
        self.selected
    }

    /// Everything the player to move may play right now.
    pub fn hints(&self) -> Vec<LegalMove> {
        self.board.generate_legal_moves()
    }

    /// Picks up the piece on `field`. Fails when the field is empty or a
    /// piece is already held.
    pub fn select(&mut self, field: Field) -> bool {
        if self.selected.is_some() || self.board.piece_at(field).is_none() {
            return false;
        }
        self.selected = Some(field);
        true
    }

    /// Drops the held piece on `target`.
    pub fn submit(&mut self, target: Field) -> MoveType {
        let Some(from) = self.selected else {
            return MoveType::IllegalMove;
        };

        let move_type = self.board.classify_move(from, target);
        match move_type {
            MoveType::NormalMove(mv) => {
                self.board.apply_move(mv, &mut self.scoreboard);
                self.selected = None;
            }
            MoveType::CaptureMove(capture) => {
                self.selected = match self.board.apply_capture(capture, &mut self.scoreboard) {
                    TurnState::ChainContinues { piece } => Some(piece),
                    _ => None,
                };
            }
            MoveType::IllegalMove => {
                debug!(from = %from.as_algebraic(), to = %target.as_algebraic(), "illegal move");
                if !self.board.capture_chain_active() {
                    self.selected = None;
                }
            }
        }
        self.scoreboard.sync_move_counts(&self.board);
        move_type
    }

    /// `select` and `submit` in one go. During a capture chain `from` has to
    /// name the chaining piece.
    pub fn play(&mut self, from: Field, to: Field) -> MoveType {
        if !self.select(from) && self.selected != Some(from) {
            return MoveType::IllegalMove;
        }
        self.submit(to)
    }

    /// Starts over from the initial position. The leaderboard is kept.
    pub fn new_game(&mut self) {
        self.board = DraughtsBoard::initial();
        self.selected = None;
        self.scoreboard.reset_players();
        debug!("new game");
    }

    pub fn save(&self) -> (BoardSnapshot, [Player; 2]) {
        (self.board.snapshot(), self.scoreboard.players().clone())
    }

    /// Restores a saved game. Only the names are taken from `players`; move
    /// counts come from the snapshot.
    pub fn load(&mut self, snapshot: &BoardSnapshot, players: [Player; 2]) {
        self.board = DraughtsBoard::restore(snapshot);
        self.selected = self.board.capture_chain();
        self.scoreboard.attach(players, &self.board);
    }
}
