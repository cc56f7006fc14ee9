use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_slider_moves(game_state, from, &DIAGONAL_DIRECTIONS, out);
}
