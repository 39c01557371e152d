use super::zobrist_hash::ZOBRIST;
use super::{Capture, Color, DraughtsBoard, Field, GameOutcome, LegalMove, Piece, SimpleMove, Square};
use tracing::debug;

/// Receives the turn controller's notifications. Whatever the host shows or
/// stores about turns and wins lives behind this trait.
pub trait OutcomeReporter {
    fn report_win(&mut self, color: Color, move_count: u32);
    fn report_turn_changed(&mut self, color: Color, move_count: u32);
}

/// Reporter that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl OutcomeReporter for NullReporter {
    fn report_win(&mut self, _color: Color, _move_count: u32) {}
    fn report_turn_changed(&mut self, _color: Color, _move_count: u32) {}
}

/// Where the game stands after a move or capture was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    TurnEnded { next: Color },
    /// The piece on `piece` has another capture and must take it.
    ChainContinues { piece: Field },
    GameWon { winner: Color },
}

impl DraughtsBoard {
    pub fn apply<R: OutcomeReporter + ?Sized>(&mut self, mv: LegalMove, reporter: &mut R) -> TurnState {
        match mv {
            LegalMove::Simple(mv) => self.apply_move(mv, reporter),
            LegalMove::Capture(capture) => self.apply_capture(capture, reporter),
        }
    }

    pub fn apply_move<R: OutcomeReporter + ?Sized>(&mut self, mv: SimpleMove, reporter: &mut R) -> TurnState {
        let piece = self.vacate(mv.from);
        let piece = self.land(piece, mv.to);
        debug!(mv = %mv.as_algebraic(), color = %piece.color, "applied move");
        self.resolve_turn(reporter)
    }

    pub fn apply_capture<R: OutcomeReporter + ?Sized>(&mut self, capture: Capture, reporter: &mut R) -> TurnState {
        let piece = self.vacate(capture.from);

        let captures_before = self.legal_captures(&piece, self.current_player);
        if let Some(taken) = captures_before.iter().find(|c| c.to == capture.to) {
            self.remove(taken.captured);
        }

        let piece = self.land(piece, capture.to);
        debug!(capture = %capture.as_algebraic(), color = %piece.color, "applied capture");

        let captures_after = self.legal_captures(&piece, self.current_player);
        if captures_after.is_empty() {
            self.resolve_turn(reporter)
        } else {
            self.set_capture_chain(Some(piece.field));
            debug!(field = %piece.field.as_algebraic(), "capture chain continues");
            TurnState::ChainContinues { piece: piece.field }
        }
    }

    fn vacate(&mut self, field: Field) -> Piece {
        let square = &mut self.squares[field.row as usize][field.col as usize];
        let piece = match *square {
            Square::Occupied(piece) => piece,
            Square::Empty => unreachable!("classified move starts on empty field {}", field.as_algebraic()),
        };
        *square = Square::Empty;
        self.hash = ZOBRIST.update_piece(self.hash, &piece);
        piece
    }

    fn remove(&mut self, field: Field) {
        if let Square::Occupied(piece) = self.squares[field.row as usize][field.col as usize] {
            self.hash = ZOBRIST.update_piece(self.hash, &piece);
            self.squares[field.row as usize][field.col as usize] = Square::Empty;
        }
    }

    /// Puts `piece` on `to`, promoting a man that reached its terminal row.
    fn land(&mut self, piece: Piece, to: Field) -> Piece {
        let piece = if !piece.is_king() && to.row == piece.color.terminal_row() {
            debug!(field = %to.as_algebraic(), color = %piece.color, "promoted to king");
            Piece::king(piece.color, to)
        } else {
            Piece { field: to, ..piece }
        };
        self.squares[to.row as usize][to.col as usize] = Square::Occupied(piece);
        self.hash = ZOBRIST.update_piece(self.hash, &piece);
        piece
    }

    fn set_capture_chain(&mut self, capture_chain: Option<Field>) {
        self.hash = ZOBRIST.update_capture_chain(self.hash, self.capture_chain);
        self.capture_chain = capture_chain;
        self.hash = ZOBRIST.update_capture_chain(self.hash, self.capture_chain);
    }

    /// Ends the current turn: either the game is decided or the other player
    /// is up.
    fn resolve_turn<R: OutcomeReporter + ?Sized>(&mut self, reporter: &mut R) -> TurnState {
        self.set_capture_chain(None);
        match self.game_outcome() {
            GameOutcome::Won(winner) => {
                self.game_over = true;
                debug!(winner = %winner, "game won");
                reporter.report_win(winner, self.move_count(winner));
                TurnState::GameWon { winner }
            }
            GameOutcome::Ongoing => self.change_player(reporter),
        }
    }

    /// Counts the finished turn for the player who just moved and hands the
    /// move to the opponent.
    fn change_player<R: OutcomeReporter + ?Sized>(&mut self, reporter: &mut R) -> TurnState {
        self.move_counts[self.current_player.index()] += 1;
        self.current_player = self.current_player.opposite();
        self.hash = ZOBRIST.update_active_side(self.hash);
        reporter.report_turn_changed(self.current_player, self.move_count(self.current_player));
        TurnState::TurnEnded {
            next: self.current_player,
        }
    }
}
