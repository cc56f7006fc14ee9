//! Canonical chess-rule constants.
//!
//! Stores the starting position and the fixed castling geometry shared by the
//! generator (which squares must be empty and unattacked) and by make/unmake
//! (where the rook travels).

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Promotion choices in the order the generator emits them.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const KING_HOME_COL: u8 = 4;

/// Column layout of one castling move; rows come from the mover's back row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub king_to_col: u8,
    pub rook_from_col: u8,
    pub rook_to_col: u8,
    /// Squares strictly between king and rook.
    pub empty_cols: &'static [u8],
    /// King start, transit and destination; none may be attacked.
    pub safe_cols: &'static [u8],
}

pub const fn castle_geometry(side: CastleSide) -> CastleGeometry {
    match side {
        CastleSide::KingSide => CastleGeometry {
            king_to_col: 6,
            rook_from_col: 7,
            rook_to_col: 5,
            empty_cols: &[5, 6],
            safe_cols: &[4, 5, 6],
        },
        CastleSide::QueenSide => CastleGeometry {
            king_to_col: 2,
            rook_from_col: 0,
            rook_to_col: 3,
            empty_cols: &[1, 2, 3],
            safe_cols: &[4, 3, 2],
        },
    }
}

/// Side of a castling king move, judged by the direction it travels.
#[inline]
pub const fn castle_side_for(king_from_col: u8, king_to_col: u8) -> CastleSide {
    if king_to_col > king_from_col {
        CastleSide::KingSide
    } else {
        CastleSide::QueenSide
    }
}

/// Home square of the rook that castles on `side`.
#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    Square::new(color.back_row(), castle_geometry(side).rook_from_col)
}

/// Which castling right, if any, is tied to a rook standing on `square`.
pub fn castle_side_of_rook_home(color: Color, square: Square) -> Option<CastleSide> {
    [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .find(|side| rook_home(color, *side) == square)
}
