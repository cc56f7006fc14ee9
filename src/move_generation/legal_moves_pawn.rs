use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::can_land_on;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::pawn_attack_targets;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let direction = side.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if game_state.piece_at(one_step).is_none() {
            push_with_promotions(Move::new(from, one_step, game_state), out);

            if from.row() == side.pawn_home_row() {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(Move::new(from, two_step, game_state));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for to in pawn_attack_targets(side, from) {
        match game_state.piece_at(to) {
            Some(_) => {
                if can_land_on(game_state, side, to) {
                    push_with_promotions(Move::new(from, to, game_state), out);
                }
            }
            None => {
                let victim = Square::new(from.row(), to.col());
                if game_state.en_passant_target() == Some(to)
                    && game_state.piece_at(victim) == Some(Piece::new(side.opposite(), PieceKind::Pawn))
                {
                    out.push(Move::en_passant(from, to, game_state));
                }
            }
        }
    }
}

/// A pawn reaching its last row yields one move per promotion kind.
fn push_with_promotions(mv: Move, out: &mut Vec<Move>) {
    if mv.is_promotion() {
        for kind in PROMOTION_KINDS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;

    fn pawn_moves(fen: &str, from: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from.parse().expect("square"), &mut out);
        out
    }

    #[test]
    fn home_row_pawn_pushes_one_or_two() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", "e2");
        let ends: Vec<String> = moves.iter().map(|mv| mv.end.to_string()).collect();
        assert_eq!(ends, vec!["e3", "e4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty());
    }

    #[test]
    fn promotion_expands_to_four_variants() {
        let moves = pawn_moves("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7");
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 4);
        assert!(moves.iter().all(|mv| mv.promotion.is_some()));
    }

    #[test]
    fn en_passant_capture_is_tagged() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5");
        let ep: Vec<&Move> = moves.iter().filter(|mv| mv.is_en_passant).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].end.to_string(), "d6");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn stale_target_without_enemy_pawn_yields_no_en_passant() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1").expect("FEN");
        game.en_passant_target = Some("d3".parse().expect("square"));
        let mut out = Vec::new();
        generate_pawn_moves(&game, "e2".parse().expect("square"), &mut out);
        assert!(out.iter().all(|mv| !mv.is_en_passant));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let moves = pawn_moves("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", "d7");
        let ends: Vec<String> = moves.iter().map(|mv| mv.end.to_string()).collect();
        assert_eq!(ends, vec!["d6", "d5"]);
    }
}
