//! Alpha-beta engine driven by a difficulty tier.
//!
//! The tier fixes the depth and time budget. Beginner additionally swaps
//! the searched move for a uniformly random legal move some of the time.
//! When search yields nothing the engine falls back to a random legal move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::difficulty::{Difficulty, DifficultyProfile};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::alpha_beta::search_best_move;
use crate::search::board_scoring::StandardScorer;

pub struct MinimaxEngine {
    profile: DifficultyProfile,
    scorer: StandardScorer,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_profile(difficulty.profile(), StdRng::from_os_rng())
    }

    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_profile(difficulty.profile(), StdRng::seed_from_u64(seed))
    }

    pub fn with_profile(profile: DifficultyProfile, rng: StdRng) -> Self {
        Self {
            profile,
            scorer: StandardScorer,
            rng,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    fn random_legal_move(&mut self, game_state: &mut GameState) -> Option<Move> {
        generate_legal_moves(game_state).choose(&mut self.rng).copied()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> EngineOutput {
        let search = search_best_move(game_state, &self.scorer, self.profile.search_config());
        let mut best_move = search.best_move;

        if best_move.is_some()
            && self.profile.blunder_probability > 0.0
            && self.rng.random_bool(self.profile.blunder_probability)
        {
            best_move = self.random_legal_move(game_state);
            if let Some(mv) = best_move {
                log::info!("blundering with random move {mv}");
            }
        }

        if best_move.is_none() {
            best_move = self.random_legal_move(game_state);
            if let Some(mv) = best_move {
                log::info!("search found no move, falling back to {mv}");
            }
        }

        EngineOutput {
            best_move,
            search: Some(search),
        }
    }
}

/// One-shot search at `difficulty`; `None` only when no legal move exists.
pub fn find_best_move(game_state: &mut GameState, difficulty: Difficulty) -> Option<Move> {
    MinimaxEngine::new(difficulty).choose_move(game_state).best_move
}
