//! In-place make/unmake.
//!
//! `make_move` is unconditional: the caller has already validated the move.
//! `unmake_move` reverses the most recent move using only the fields stored
//! on it, including the before-snapshot `make_move` recorded.

use crate::game_state::chess_rules::{castle_geometry, castle_side_for, castle_side_of_rook_home};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

pub fn make_move(game_state: &mut GameState, mut mv: Move) {
    let mover = mv.moved_piece.color;
    debug_assert_eq!(
        game_state.piece_at(mv.start),
        Some(mv.moved_piece),
        "move {mv} does not match the board"
    );
    debug_assert_eq!(mover, game_state.side_to_move, "move {mv} played out of turn");

    mv.before = Some(UndoState {
        castling_rights: game_state.castling_rights,
        en_passant_target: game_state.en_passant_target,
        halfmove_clock: game_state.halfmove_clock,
    });

    game_state.set_piece(mv.start, None);
    let landed = match mv.promotion_kind() {
        Some(kind) => Piece::new(mover, kind),
        None => mv.moved_piece,
    };
    game_state.set_piece(mv.end, Some(landed));

    if mv.is_en_passant {
        game_state.set_piece(en_passant_victim_square(&mv), None);
    }

    if mv.moved_piece.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.end;
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_from);
        game_state.set_piece(rook_from, None);
        game_state.set_piece(rook_to, rook);
    }

    update_castling_rights(&mut game_state.castling_rights, &mv);

    game_state.en_passant_target = if mv.is_double_pawn_push() {
        Square::try_new(
            ((mv.start.row() + mv.end.row()) / 2) as i8,
            mv.start.col() as i8,
        )
    } else {
        None
    };

    if mv.moved_piece.kind == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.history.push(mv);
    game_state.side_to_move = mover.opposite();
    game_state.epoch = game_state.epoch.wrapping_add(1);
}

/// Reverses and returns the most recent move, or `None` when nothing has
/// been applied.
pub fn unmake_move(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.history.pop()?;
    let before = mv
        .before
        .expect("moves in the history always carry their before-snapshot");
    let mover = mv.moved_piece.color;

    game_state.side_to_move = mover;

    game_state.set_piece(mv.start, Some(mv.moved_piece));
    if mv.is_en_passant {
        game_state.set_piece(mv.end, None);
        game_state.set_piece(en_passant_victim_square(&mv), mv.captured_piece);
    } else {
        game_state.set_piece(mv.end, mv.captured_piece);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_to);
        game_state.set_piece(rook_to, None);
        game_state.set_piece(rook_from, rook);
    }

    if mv.moved_piece.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.start;
    }

    game_state.castling_rights = before.castling_rights;
    game_state.en_passant_target = before.en_passant_target;
    game_state.halfmove_clock = before.halfmove_clock;
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1);
    }

    game_state.epoch = game_state.epoch.wrapping_add(1);
    Some(mv)
}

/// Runs `probe` with the turn handed to the other side and no en-passant
/// target, then restores both. The board itself is not touched.
pub fn with_null_move<R>(game_state: &mut GameState, probe: impl FnOnce(&mut GameState) -> R) -> R {
    let side = game_state.side_to_move;
    let en_passant_target = game_state.en_passant_target.take();
    game_state.side_to_move = side.opposite();
    game_state.epoch = game_state.epoch.wrapping_add(1);

    let result = probe(game_state);

    game_state.side_to_move = side;
    game_state.en_passant_target = en_passant_target;
    game_state.epoch = game_state.epoch.wrapping_add(1);
    result
}

/// The captured pawn sits beside the mover's start, behind the destination.
#[inline]
fn en_passant_victim_square(mv: &Move) -> Square {
    Square::new(mv.start.row(), mv.end.col())
}

fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let geometry = castle_geometry(castle_side_for(mv.start.col(), mv.end.col()));
    let row = mv.start.row();
    (
        Square::new(row, geometry.rook_from_col),
        Square::new(row, geometry.rook_to_col),
    )
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &Move) {
    let mover = mv.moved_piece.color;

    match mv.moved_piece.kind {
        PieceKind::King => rights.revoke_all(mover),
        PieceKind::Rook => {
            if let Some(side) = castle_side_of_rook_home(mover, mv.start) {
                rights.revoke(mover, side);
            }
        }
        _ => {}
    }

    // Capturing a rook on its home square removes the owner's right.
    if let Some(Piece {
        color,
        kind: PieceKind::Rook,
    }) = mv.captured_piece
    {
        if let Some(side) = castle_side_of_rook_home(color, mv.end) {
            rights.revoke(color, side);
        }
    }
}
