//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::ray;

/// Whether a piece of `mover` may land on `target`: empty, or holding an
/// enemy piece other than the king. Kings are never captured; a position
/// where one could be is already illegal and the move is not generated.
#[inline]
pub fn can_land_on(game_state: &GameState, mover: Color, target: Square) -> bool {
    match game_state.piece_at(target) {
        None => true,
        Some(piece) => piece.color != mover && piece.kind != PieceKind::King,
    }
}

/// Single-step pieces (knight, king): keep every landable target.
#[inline]
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    let mover = game_state.side_to_move();
    for to in targets {
        if can_land_on(game_state, mover, to) {
            out.push(Move::new(from, to, game_state));
        }
    }
}

/// Sliding pieces: walk each ray until the edge, an own piece (excluded) or
/// an enemy piece (included as a capture).
pub fn push_slider_moves(
    game_state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let mover = game_state.side_to_move();
    for direction in directions {
        for to in ray(from, *direction) {
            match game_state.piece_at(to) {
                None => out.push(Move::new(from, to, game_state)),
                Some(_) => {
                    if can_land_on(game_state, mover, to) {
                        out.push(Move::new(from, to, game_state));
                    }
                    break;
                }
            }
        }
    }
}
