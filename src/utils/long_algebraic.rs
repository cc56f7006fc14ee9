//! Coordinate move text such as `e2e4` or `a7a8n`.
//!
//! Parsing only builds a candidate move from board context; whether it is
//! legal is decided against the legal move list by the caller.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.start));
    out.push_str(&square_to_algebraic(mv.end));
    if let Some(kind) = mv.promotion_kind() {
        out.push(kind.symbol());
    }
    out
}

/// Splits move text into its squares and optional promotion piece.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(
            char_to_promotion(ch).ok_or_else(|| ChessError::InvalidMoveText(text.to_owned()))?,
        ),
        None => None,
    };

    Ok((start, end, promotion))
}

/// Candidate move for `text` in `game_state`. A missing promotion letter
/// on a promoting pawn move means Queen.
pub fn long_algebraic_to_move(game_state: &GameState, text: &str) -> ChessResult<Move> {
    let (start, end, promotion) = parse_long_algebraic(text)?;
    let mv = Move::from_board(start, end, promotion, game_state)
        .ok_or_else(|| ChessError::IllegalMove(format!("{text}: no piece on {start}")))?;

    if mv.moved_piece.color != game_state.side_to_move() {
        return Err(ChessError::IllegalMove(format!(
            "{text}: {start} holds a {} piece",
            mv.moved_piece.color
        )));
    }
    if promotion.is_some() && !mv.is_promotion() {
        return Err(ChessError::InvalidMoveText(format!(
            "{text}: only a pawn reaching the last rank may promote"
        )));
    }

    Ok(mv)
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match PieceKind::from_symbol(ch)? {
        kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            Some(kind)
        }
        _ => None,
    }
}
