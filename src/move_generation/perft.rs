//! Perft: exhaustive legal move-path counting for generator validation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::{generate_legal_moves, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Leaf counts with a per-leaf breakdown. Slower than `perft_nodes` since
/// every leaf's status is derived.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(generator, game_state, depth, &mut counts);
    counts
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_moves(game_state);
    for mv in moves {
        make_move(game_state, mv);
        if depth == 1 {
            tally_leaf(generator, game_state, &mv, counts);
        } else {
            perft_recurse(generator, game_state, depth - 1, counts);
        }
        unmake_move(game_state);
    }
}

fn tally_leaf<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    mv: &Move,
    counts: &mut PerftCounts,
) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }

    let in_check = is_king_in_check(game_state, game_state.side_to_move());
    if in_check {
        counts.checks += 1;
        let has_replies = !generator.generate_moves(game_state).is_empty();
        if GameStatus::classify(has_replies, in_check) == GameStatus::Checkmate {
            counts.checkmates += 1;
        }
    }
}

/// Leaf count only, bulk-counting the last ply.
pub fn perft_nodes(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        make_move(game_state, mv);
        nodes += perft_nodes(game_state, depth - 1);
        unmake_move(game_state);
    }
    nodes
}

/// Leaf count below each root move, in generation order.
pub fn divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    let depth = depth.max(1);
    let mut out = Vec::new();
    for mv in generate_legal_moves(game_state) {
        make_move(game_state, mv);
        out.push((mv, perft_nodes(game_state, depth - 1)));
        unmake_move(game_state);
    }
    out
}
