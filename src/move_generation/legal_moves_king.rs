use crate::game_state::chess_rules::{castle_geometry, rook_home, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_step_moves(game_state, from, king_targets(from), out);
    generate_castling_moves(game_state, from, out);
}

/// Castling needs the right, the rook on its home square, empty squares
/// between king and rook, and no attack on the king's start, transit or
/// destination square.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let enemy = side.opposite();
    let row = side.back_row();

    if king_from != Square::new(row, KING_HOME_COL) {
        return;
    }

    for castle_side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !game_state.castling_rights().allows(side, castle_side) {
            continue;
        }

        let geometry = castle_geometry(castle_side);
        if game_state.piece_at(rook_home(side, castle_side))
            != Some(Piece::new(side, PieceKind::Rook))
        {
            continue;
        }

        let path_blocked = geometry
            .empty_cols
            .iter()
            .any(|col| game_state.piece_at(Square::new(row, *col)).is_some());
        if path_blocked {
            continue;
        }

        let path_attacked = geometry
            .safe_cols
            .iter()
            .any(|col| is_square_attacked(game_state, Square::new(row, *col), enemy));
        if path_attacked {
            continue;
        }

        out.push(Move::castle(
            king_from,
            Square::new(row, geometry.king_to_col),
            game_state,
        ));
    }
}
