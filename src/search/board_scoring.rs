//! Pluggable board evaluation interfaces and the standard evaluator.
//!
//! Scores are in hundredths of a pawn and always from White's point of view:
//! positive favours White whichever side is to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::with_null_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// One pawn.
pub const PAWN_SCORE: i32 = 100;

/// Score of a checkmated side, 9999 pawns.
pub const MATE_SCORE: i32 = 9999 * PAWN_SCORE;

/// Ten mobility moves are worth one pawn.
pub const MOBILITY_SCORE_PER_MOVE: i32 = PAWN_SCORE / 10;

pub trait BoardScorer {
    /// White-relative static score. May probe the position with make/unmake
    /// but must leave it unchanged.
    fn score(&self, game_state: &mut GameState) -> i32;
}

/// Material in whole pawns: K=0, Q=9, R=5, B=3, N=3, P=1.
#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Pawn bonus from White's side, in hundredths of a pawn, indexed
/// `[row][col]` with row 0 = rank 8. Black reads it mirrored top-to-bottom.
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [500, 500, 500, 500, 500, 500, 500, 500],
    [100, 100, 200, 300, 300, 200, 100, 100],
    [50, 50, 100, 250, 250, 100, 50, 50],
    [0, 0, 0, 200, 200, 0, 0, 0],
    [50, -50, -100, 0, 0, -100, -50, 50],
    [50, 100, 100, -200, -200, 100, 100, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

#[inline]
pub fn pawn_square_bonus(color: Color, square: Square) -> i32 {
    let row = match color {
        Color::White => square.row(),
        Color::Black => 7 - square.row(),
    };
    PAWN_TABLE[row as usize][square.col() as usize]
}

/// Material plus pawn placement, without mobility or terminal detection.
pub fn material_and_placement(game_state: &GameState) -> i32 {
    game_state
        .pieces()
        .map(|(square, piece)| {
            let mut value = material_value(piece.kind) * PAWN_SCORE;
            if piece.kind == PieceKind::Pawn {
                value += pawn_square_bonus(piece.color, square);
            }
            value * piece.color.sign()
        })
        .sum()
}

/// Material, pawn placement and mobility, with a terminal shortcut:
/// checkmate scores `MATE_SCORE` against the side to move, stalemate 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        let side = game_state.side_to_move();
        let own_moves = generate_legal_moves(game_state).len() as i32;

        if own_moves == 0 {
            return if is_king_in_check(game_state, side) {
                -MATE_SCORE * side.sign()
            } else {
                0
            };
        }

        let opponent_moves = with_null_move(game_state, |probe| generate_legal_moves(probe).len() as i32);
        let (white_moves, black_moves) = match side {
            Color::White => (own_moves, opponent_moves),
            Color::Black => (opponent_moves, own_moves),
        };

        material_and_placement(game_state) + (white_moves - black_moves) * MOBILITY_SCORE_PER_MOVE
    }
}

/// Material and placement only; cheap and free of move generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        material_and_placement(game_state)
    }
}
