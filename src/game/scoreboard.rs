use super::{LeaderBoard, Player};
use crate::draughts_boards::draughts_board::{Color, DraughtsBoard, OutcomeReporter};
use tracing::info;

/// Keeps the players, the leaderboard and the status line in step with what
/// the board reports.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    players: [Player; 2],
    leaderboard: LeaderBoard,
    status: String,
}

impl Scoreboard {
    pub fn new(light_name: &str, dark_name: &str) -> Self {
        let mut scoreboard = Scoreboard {
            players: [Player::new(light_name, Color::Light), Player::new(dark_name, Color::Dark)],
            leaderboard: LeaderBoard::new(),
            status: String::new(),
        };
        scoreboard.show_turn(Color::Light, 1);
        scoreboard
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub(crate) fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub fn leaderboard(&self) -> &LeaderBoard {
        &self.leaderboard
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Fresh players with the same names. The leaderboard survives.
    pub fn reset_players(&mut self) {
        self.players = [
            Player::new(self.players[0].name(), Color::Light),
            Player::new(self.players[1].name(), Color::Dark),
        ];
        self.show_turn(Color::Light, 1);
    }

    /// Takes the names from `players` and everything else from `board`,
    /// which owns the move counts.
    pub(crate) fn attach(&mut self, players: [Player; 2], board: &DraughtsBoard) {
        self.players = players;
        self.sync_move_counts(board);
        let current = board.current_player();
        for player in self.players.iter_mut() {
            let is_current = player.color() == current;
            player.set_current(is_current);
        }

        match board.game_outcome().winner() {
            Some(winner) if board.is_game_won() => self.show_win(winner, board.move_count(winner)),
            _ => self.show_turn(current, board.move_count(current)),
        }
    }

    pub(crate) fn sync_move_counts(&mut self, board: &DraughtsBoard) {
        for player in self.players.iter_mut() {
            player.set_move_count(board.move_count(player.color()));
        }
    }

    fn show_turn(&mut self, color: Color, move_count: u32) {
        self.status = format!("{}'s Turn ({})", self.player(color).name(), move_count);
    }

    fn show_win(&mut self, color: Color, move_count: u32) {
        self.status = format!("GAME OVER\n{} WON with {} moves", self.player(color).name(), move_count);
    }
}

impl OutcomeReporter for Scoreboard {
    fn report_win(&mut self, color: Color, move_count: u32) {
        self.players[color.index()].set_move_count(move_count);
        let name = self.player(color).name().to_string();
        info!(player = %name, %color, move_count, "game won");
        self.leaderboard.add_player(&name, move_count);
        self.show_win(color, move_count);
    }

    fn report_turn_changed(&mut self, color: Color, move_count: u32) {
        for player in self.players.iter_mut() {
            let is_current = player.color() == color;
            player.set_current(is_current);
        }
        self.players[color.index()].set_move_count(move_count);
        info!(player = %self.player(color).name(), %color, move_count, "turn changed");
        self.show_turn(color, move_count);
    }
}
