pub mod draughts_boards;
pub mod game;
pub mod ui;

pub use draughts_boards::draughts_board;
