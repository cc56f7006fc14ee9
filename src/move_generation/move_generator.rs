//! Pseudo-legal move generation and the generator seam.
//!
//! `generate_pseudo_legal_moves` is deliberately over-inclusive: it obeys
//! piece geometry and occupancy but does not check whether the mover's own
//! king is left attacked. The legality filter builds on top of it.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Produces the moves available to the side to move.
///
/// Takes the state mutably so that legality filtering can probe moves with
/// make/unmake; implementations must leave it exactly as they found it.
pub trait MoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> Vec<Move>;
}

pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        generate_pseudo_legal_moves(game_state)
    }
}

/// One pass over the 64 squares, dispatching on each own piece.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut out = Vec::with_capacity(64);

    for (from, piece) in game_state.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, &mut out),
            PieceKind::King => generate_king_moves(game_state, from, &mut out),
        }
    }

    out
}
