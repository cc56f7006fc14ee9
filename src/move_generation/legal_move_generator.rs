//! Legality filter and game status.
//!
//! Each pseudo-legal move is made, the mover's king is checked with the
//! attack oracle, and the move is unmade. `LegalMoveCache` memoises the
//! result per board epoch so repeated queries on an unchanged position are
//! free; any make/unmake moves the epoch on and invalidates it.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_pseudo_legal_moves, MoveGenerator};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        generate_legal_moves(game_state)
    }
}

/// Pseudo-legal moves that do not leave the mover's own king attacked.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let mover = game_state.side_to_move();
    let pseudo = generate_pseudo_legal_moves(game_state);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        make_move(game_state, mv);
        let exposes_king = is_king_in_check(game_state, mover);
        unmake_move(game_state);

        if !exposes_king {
            legal.push(mv);
        }
    }

    legal
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Derives the status from the legal-move count and whether the side to
    /// move is in check.
    pub const fn classify(has_legal_moves: bool, in_check: bool) -> Self {
        match (has_legal_moves, in_check) {
            (true, false) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Checkmate and stalemate end the game.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

pub fn game_status(game_state: &mut GameState) -> GameStatus {
    let has_legal_moves = !generate_legal_moves(game_state).is_empty();
    let in_check = is_king_in_check(game_state, game_state.side_to_move());
    GameStatus::classify(has_legal_moves, in_check)
}

/// Memo of the last legal-move list, keyed by (board epoch, side to move).
#[derive(Debug, Clone, Default)]
pub struct LegalMoveCache {
    key: Option<(u64, Color)>,
    moves: Vec<Move>,
}

impl LegalMoveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn legal_moves(&mut self, game_state: &mut GameState) -> &[Move] {
        let key = (game_state.epoch(), game_state.side_to_move());
        if self.key != Some(key) {
            self.moves = generate_legal_moves(game_state);
            // Probing moved the epoch on and back; re-read it after the fact.
            self.key = Some((game_state.epoch(), game_state.side_to_move()));
        }
        &self.moves
    }

    pub fn status(&mut self, game_state: &mut GameState) -> GameStatus {
        let has_legal_moves = !self.legal_moves(game_state).is_empty();
        let in_check = is_king_in_check(game_state, game_state.side_to_move());
        GameStatus::classify(has_legal_moves, in_check)
    }

    /// Drops the memo; needed when the state it was filled from is replaced
    /// wholesale rather than moved through make/unmake.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.moves.clear();
    }
}
