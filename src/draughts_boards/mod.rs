pub mod draughts_board;
pub mod perft;
