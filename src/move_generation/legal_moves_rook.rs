use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_slider_moves(game_state, from, &ORTHOGONAL_DIRECTIONS, out);
}
