//! Engine abstraction shared by the CLI and the game facade.
//!
//! Engines receive the live state mutably so they can search with in-place
//! make/unmake; they must hand it back unchanged.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::alpha_beta::SearchResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Present when the move came out of a tree search.
    pub search: Option<SearchResult>,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// `best_move` is `None` only when the side to move has no legal moves.
    fn choose_move(&mut self, game_state: &mut GameState) -> EngineOutput;
}
