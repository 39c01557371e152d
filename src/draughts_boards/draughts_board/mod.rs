pub mod error;
pub use error::{BoardError, BoardResult, NotationError, NotationResult};
pub mod notation;
pub mod zobrist_hash;
pub use zobrist_hash::ZobristHash;
pub use zobrist_hash::ZOBRIST;
pub mod model;
pub use model::{
    Capture, Color, Field, GameOutcome, LegalMove, MoveType, Piece, Rank, SimpleMove, Square, BOARD_SIZE,
};

mod draughts_board;
mod move_generation;
pub mod turn;
#[cfg(test)]
pub mod test_utils;
pub use draughts_board::{BoardSnapshot, DraughtsBoard};
pub use turn::{NullReporter, OutcomeReporter, TurnState};
