//! Error types for board set-up and position notation.
//!
//! Playing the game itself has no error path: illegal moves are reported as
//! `MoveType::IllegalMove`. These errors only come from building a board by
//! hand or from parsing user supplied text.

use super::Field;
use thiserror::Error;

/// Errors raised while placing pieces on a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Field ({}, {}) is off the board", .0.row, .0.col)]
    OffBoard(Field),

    /// Pieces live on the dark cells only.
    #[error("Field {} is a light square", .0.as_algebraic())]
    LightSquare(Field),

    #[error("Field {} is already occupied", .0.as_algebraic())]
    Occupied(Field),
}

/// Errors raised while parsing a position string or a field name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid position string: must have 2 parts, found {0}")]
    WrongPartCount(usize),

    #[error("Invalid position string: expected 8 rows, found {0}")]
    WrongRowCount(usize),

    #[error("Invalid position string: row {row} has {columns} columns")]
    WrongColumnCount { row: usize, columns: usize },

    #[error("Invalid piece character in position string: {0}")]
    InvalidPiece(char),

    #[error("Invalid side to move: {0}")]
    InvalidSideToMove(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type BoardResult<T> = Result<T, BoardError>;
pub type NotationResult<T> = Result<T, NotationError>;
