//! Pre-recursion move ordering so alpha-beta sees likely refutations first.

use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::material_value;

const CAPTURE_WEIGHT: i32 = 10;
const PROMOTION_BONUS: i32 = 800;
const CASTLE_BONUS: i32 = 50;

/// Captures rank by victim minus attacker value, so even and winning trades
/// come before losing ones. Promotions and castling get flat bonuses.
pub fn move_order_score(mv: &Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured_piece {
        score += (material_value(victim.kind) - material_value(mv.moved_piece.kind)) * CAPTURE_WEIGHT;
    }
    if mv.is_promotion() {
        score += PROMOTION_BONUS;
    }
    if mv.is_castle {
        score += CASTLE_BONUS;
    }
    score
}

/// Highest score first; equal scores keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| -move_order_score(mv));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    fn find(moves: &[Move], text: &str) -> Move {
        moves
            .iter()
            .copied()
            .find(|mv| mv.to_string() == text)
            .unwrap_or_else(|| panic!("{text} should be legal"))
    }

    #[test]
    fn pawn_takes_queen_outranks_queen_takes_pawn() {
        let mut game = GameState::from_fen("4k3/8/8/3q4/4P3/8/8/3QK3 w - - 0 1").expect("FEN");
        let moves = generate_legal_moves(&mut game);
        let pawn_takes_queen = find(&moves, "e4d5");
        let queen_takes_queen = find(&moves, "d1d5");
        assert_eq!(move_order_score(&pawn_takes_queen), 80);
        assert_eq!(move_order_score(&queen_takes_queen), 0);

        let mut game = GameState::from_fen("4k3/8/8/8/4p3/8/8/4QK2 w - - 0 1").expect("FEN");
        let moves = generate_legal_moves(&mut game);
        assert_eq!(move_order_score(&find(&moves, "e1e4")), -80);
    }

    #[test]
    fn promotion_and_castle_bonuses() {
        let mut game = GameState::from_fen("4k3/P7/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN");
        let moves = generate_legal_moves(&mut game);
        assert_eq!(move_order_score(&find(&moves, "a7a8q")), 800);
        assert_eq!(move_order_score(&find(&moves, "e1c1")), 50);
        assert_eq!(move_order_score(&find(&moves, "a1b1")), 0);
    }

    #[test]
    fn ordering_is_descending_and_stable() {
        let mut game = GameState::from_fen("4k3/P7/8/3q4/4P3/8/8/R2QK3 w Q - 0 1").expect("FEN");
        let mut moves = generate_legal_moves(&mut game);
        let quiet_before: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| move_order_score(mv) == 0)
            .collect();

        order_moves(&mut moves);

        let scores: Vec<i32> = moves.iter().map(move_order_score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(moves[0].is_promotion());

        let quiet_after: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| move_order_score(mv) == 0)
            .collect();
        assert_eq!(quiet_before, quiet_after);
        assert_eq!(moves.iter().filter(|mv| mv.moved_piece.color == Color::Black).count(), 0);
    }
}
