//! Depth-limited minimax with alpha-beta pruning and a wall-clock budget.
//!
//! White maximizes and Black minimizes over the White-relative evaluator.
//! The budget is checked on entry to every node below the root. A node that
//! finds the deadline passed returns its static evaluation and marks the
//! search as timed out; every enclosing loop then stops scanning siblings,
//! so the overrun is bounded by a single evaluation.

use std::time::{Duration, Instant};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};
use crate::search::move_ordering::order_moves;

const INFINITY: i32 = 2 * MATE_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_budget: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            time_budget: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// White-relative, in hundredths of a pawn.
    pub best_score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub timed_out: bool,
    pub depth: u8,
}

struct Searcher<'a, S: BoardScorer> {
    scorer: &'a S,
    deadline: Option<Instant>,
    nodes: u64,
    timed_out: bool,
}

impl<S: BoardScorer> Searcher<'_, S> {
    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Static score with mate values pulled toward zero by distance from the
    /// root, so a nearer mate outranks a farther one.
    fn evaluate(&self, game_state: &mut GameState, ply: u8) -> i32 {
        let score = self.scorer.score(game_state);
        if score >= MATE_SCORE {
            score - i32::from(ply)
        } else if score <= -MATE_SCORE {
            score + i32::from(ply)
        } else {
            score
        }
    }

    fn minimax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        ply: u8,
    ) -> i32 {
        self.nodes += 1;

        if self.deadline_passed() {
            self.timed_out = true;
            return self.evaluate(game_state, ply);
        }
        if depth == 0 {
            return self.evaluate(game_state, ply);
        }

        let mut moves = generate_legal_moves(game_state);
        if moves.is_empty() {
            return self.evaluate(game_state, ply);
        }
        order_moves(&mut moves);

        let maximizing = game_state.side_to_move() == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            make_move(game_state, mv);
            let score = self.minimax(game_state, depth - 1, alpha, beta, ply.saturating_add(1));
            unmake_move(game_state);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha || self.timed_out {
                break;
            }
        }

        best
    }
}

/// Searches the side to move's best reply. `best_move` is `None` only when
/// the position has no legal moves or `max_depth` is zero. The state is
/// restored before returning.
pub fn search_best_move<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started = Instant::now();
    let mut searcher = Searcher {
        scorer,
        deadline: config.time_budget.map(|budget| started + budget),
        nodes: 1,
        timed_out: false,
    };

    let mut moves = generate_legal_moves(game_state);
    if moves.is_empty() || config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: searcher.evaluate(game_state, 0),
            nodes: searcher.nodes,
            elapsed: started.elapsed(),
            timed_out: false,
            depth: 0,
        };
    }
    order_moves(&mut moves);

    let maximizing = game_state.side_to_move() == Color::White;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_move = None;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        make_move(game_state, mv);
        let score = searcher.minimax(game_state, config.max_depth - 1, alpha, beta, 1);
        unmake_move(game_state);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }

        if searcher.timed_out {
            break;
        }
    }

    let result = SearchResult {
        best_move,
        best_score,
        nodes: searcher.nodes,
        elapsed: started.elapsed(),
        timed_out: searcher.timed_out,
        depth: config.max_depth,
    };

    log::debug!(
        "search depth {} best {} score {} nodes {} in {:?}{}",
        result.depth,
        result
            .best_move
            .map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
        result.best_score,
        result.nodes,
        result.elapsed,
        if result.timed_out { " (timed out)" } else { "" }
    );

    result
}
