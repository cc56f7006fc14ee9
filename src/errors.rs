//! Crate-wide error type.
//!
//! Covers the recoverable failures the public surface reports: malformed
//! coordinates, move text and FEN input, rejected moves, and moves attempted
//! after the game has ended. Engine invariant violations are not represented
//! here; those are fatal assertions.

use thiserror::Error;

use crate::move_generation::legal_move_generator::GameStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// The candidate move is not in the current legal move list.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A move was submitted after checkmate or stalemate.
    #[error("game is over ({0})")]
    GameOver(GameStatus),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
