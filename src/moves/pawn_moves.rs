//! Pawn capture geometry.
//!
//! Pushes depend on occupancy and live in the generator; only the diagonal
//! capture pattern is fixed, and the Attack Oracle reads it in reverse.

use crate::game_state::chess_types::{Color, Square};

/// Squares a `color` pawn on `square` attacks.
#[inline]
pub fn pawn_attack_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}

/// Squares a `color` pawn would have to stand on to attack `square`.
#[inline]
pub fn pawn_attacker_origins(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = -color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}
