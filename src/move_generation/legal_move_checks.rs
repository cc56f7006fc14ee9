//! Attack detection by direct geometry.
//!
//! Looks outward from the target square along each attack pattern instead of
//! generating the attacker's moves, so it never depends on move generation.

use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacker_origins;
use crate::moves::sliding_moves::{ray, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Square {
    game_state.king_square(color)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, king_square(game_state, color), color.opposite())
}

/// Whether any `attacker_color` piece attacks `square`, regardless of whose
/// turn it is. Pins are irrelevant here: a pinned piece still gives check.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        game_state.piece_at(sq) == Some(Piece::new(attacker_color, kind))
    };

    if pawn_attacker_origins(attacker_color, square).any(|sq| holds(sq, PieceKind::Pawn)) {
        return true;
    }

    if knight_targets(square).any(|sq| holds(sq, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|sq| holds(sq, PieceKind::King)) {
        return true;
    }

    let first_blocker = |direction: (i8, i8)| {
        ray(square, direction).find_map(|sq| game_state.piece_at(sq))
    };

    let rook_like = ORTHOGONAL_DIRECTIONS.iter().any(|direction| {
        matches!(
            first_blocker(*direction),
            Some(Piece { color, kind: PieceKind::Rook | PieceKind::Queen }) if color == attacker_color
        )
    });
    if rook_like {
        return true;
    }

    DIAGONAL_DIRECTIONS.iter().any(|direction| {
        matches!(
            first_blocker(*direction),
            Some(Piece { color, kind: PieceKind::Bishop | PieceKind::Queen }) if color == attacker_color
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attacked(fen: &str, square: &str, by: Color) -> bool {
        let game = GameState::from_fen(fen).expect("FEN");
        is_square_attacked(&game, square.parse().expect("square"), by)
    }

    #[test]
    fn pawn_attack_direction_follows_attacker_colour() {
        let fen = "4k3/8/8/8/4P3/8/8/4K3 b - - 0 1";
        assert!(attacked(fen, "d5", Color::White));
        assert!(attacked(fen, "f5", Color::White));
        assert!(!attacked(fen, "d3", Color::White));
        assert!(!attacked(fen, "e5", Color::White));
    }

    #[test]
    fn sliders_are_stopped_by_the_first_piece() {
        let fen = "4k3/8/8/8/R2p3q/8/8/4K3 w - - 0 1";
        assert!(attacked(fen, "d4", Color::White));
        assert!(!attacked(fen, "e4", Color::White));
        assert!(attacked(fen, "e4", Color::Black));
        assert!(attacked(fen, "e1", Color::Black));
    }

    #[test]
    fn bishop_does_not_attack_orthogonally() {
        let fen = "4k3/8/8/8/3b4/8/8/4K3 w - - 0 1";
        assert!(!attacked(fen, "d1", Color::Black));
        assert!(attacked(fen, "g1", Color::Black));
    }

    #[test]
    fn knights_and_kings_attack_by_offset() {
        let fen = "4k3/8/8/8/8/5n2/8/4K3 w - - 0 1";
        assert!(attacked(fen, "e1", Color::Black));
        assert!(attacked(fen, "d2", Color::White));
        assert!(!attacked(fen, "e3", Color::White));
    }

    #[test]
    fn king_in_check_uses_cached_square() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN");
        assert!(is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }
}
