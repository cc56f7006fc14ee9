//! Session facade: one game with its redo log and legal-move cache.
//!
//! This is the surface a renderer or front end talks to. Moves only enter
//! the game through `apply_move`, which checks them against the legal move
//! list and refuses to touch the state on rejection. Undo pushes onto the
//! redo log; any newly applied move clears it.

use crate::engines::difficulty::Difficulty;
use crate::engines::engine_minimax::find_best_move;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::{GameStatus, LegalMoveCache};
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone, Default)]
pub struct ChessGame {
    state: GameState,
    redo: Vec<Move>,
    cache: LegalMoveCache,
}

impl ChessGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self {
            state: GameState::from_fen(fen)?,
            redo: Vec::new(),
            cache: LegalMoveCache::new(),
        })
    }

    /// Back to the standard starting position.
    pub fn reset(&mut self) {
        self.replace_state(GameState::new_game());
    }

    /// Replaces the position; the current game is kept if `fen` is invalid.
    pub fn load_fen(&mut self, fen: &str) -> ChessResult<()> {
        let state = GameState::from_fen(fen)?;
        self.replace_state(state);
        Ok(())
    }

    fn replace_state(&mut self, state: GameState) {
        self.state = state;
        self.redo.clear();
        self.cache.invalidate();
    }

    #[inline]
    pub fn current_board(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    pub fn legal_moves(&mut self) -> &[Move] {
        self.cache.legal_moves(&mut self.state)
    }

    pub fn legal_moves_from(&mut self, square: Square) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .filter(|mv| mv.start == square)
            .copied()
            .collect()
    }

    pub fn game_status(&mut self) -> GameStatus {
        self.cache.status(&mut self.state)
    }

    pub fn is_game_over(&mut self) -> bool {
        self.game_status().is_terminal()
    }

    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        is_square_attacked(&self.state, square, by)
    }

    /// Legal move for a raw square pair. For promotions the requested kind
    /// is matched, Queen when none is given.
    pub fn find_legal_move(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        let wanted = promotion.unwrap_or(PieceKind::Queen);
        self.legal_moves().iter().copied().find(|mv| {
            mv.start == start
                && mv.end == end
                && (!mv.is_promotion() || mv.promotion_kind() == Some(wanted))
        })
    }

    /// Applies `candidate` if it is legal and returns the applied move.
    ///
    /// Fails with `GameOver` once the game has ended and with `IllegalMove`
    /// when `candidate` is not in the legal move list. The game is left
    /// untouched on failure.
    pub fn apply_move(&mut self, candidate: Move) -> ChessResult<Move> {
        let status = self.game_status();
        if status.is_terminal() {
            return Err(ChessError::GameOver(status));
        }

        let mv = self
            .legal_moves()
            .iter()
            .copied()
            .find(|legal| *legal == candidate)
            .ok_or_else(|| ChessError::IllegalMove(candidate.to_string()))?;

        make_move(&mut self.state, mv);
        self.redo.clear();
        log::debug!("applied {} ({})", mv.notation(), self.state.to_fen());
        Ok(mv)
    }

    /// Parses coordinate text such as `e2e4` and applies it.
    pub fn apply_long_algebraic(&mut self, text: &str) -> ChessResult<Move> {
        let status = self.game_status();
        if status.is_terminal() {
            return Err(ChessError::GameOver(status));
        }
        let candidate = long_algebraic_to_move(&self.state, text)?;
        self.apply_move(candidate)
    }

    /// `None` when there is nothing to undo.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let mv = unmake_move(&mut self.state)?;
        self.redo.push(mv);
        log::debug!("undid {}", mv.notation());
        Some(mv)
    }

    /// Re-applies the most recently undone move; `None` when the redo log is
    /// empty.
    pub fn redo_move(&mut self) -> Option<Move> {
        let mv = self.redo.pop()?;
        make_move(&mut self.state, mv);
        log::debug!("redid {}", mv.notation());
        Some(mv)
    }

    /// Searches for the side to move at `difficulty`. The game is unchanged;
    /// the caller decides whether to apply the result.
    pub fn find_best_move(&mut self, difficulty: Difficulty) -> Option<Move> {
        find_best_move(&mut self.state, difficulty)
    }

    /// Asks `engine` for a move without applying it.
    pub fn ask_engine(&mut self, engine: &mut dyn Engine) -> EngineOutput {
        engine.choose_move(&mut self.state)
    }

    /// Applied moves, oldest first.
    pub fn move_log(&self) -> &[Move] {
        self.state.history()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn to_fen(&self) -> String {
        self.state.to_fen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;

    fn sq(text: &str) -> Square {
        text.parse().expect("square")
    }

    fn play(game: &mut ChessGame, moves: &[&str]) {
        for text in moves {
            game.apply_long_algebraic(text)
                .unwrap_or_else(|err| panic!("{text}: {err}"));
        }
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = ChessGame::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(game.game_status(), GameStatus::Checkmate);
        assert!(game.legal_moves().is_empty());
        assert!(game.is_game_over());

        let before = game.current_board().clone();
        assert_eq!(
            game.apply_long_algebraic("a2a3"),
            Err(ChessError::GameOver(GameStatus::Checkmate))
        );
        assert_eq!(game.current_board(), &before);
    }

    #[test]
    fn stalemate_rejects_further_moves() {
        let mut game = ChessGame::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN");
        assert_eq!(game.game_status(), GameStatus::Stalemate);
        let king_step = Move::new(sq("h8"), sq("h7"), game.current_board());
        assert_eq!(
            game.apply_move(king_step),
            Err(ChessError::GameOver(GameStatus::Stalemate))
        );
    }

    #[test]
    fn illegal_move_leaves_the_game_untouched() {
        let mut game = ChessGame::new();
        let before = game.current_board().clone();

        let rook_jump = Move::new(sq("a1"), sq("a5"), game.current_board());
        assert!(matches!(game.apply_move(rook_jump), Err(ChessError::IllegalMove(_))));
        assert!(matches!(
            game.apply_long_algebraic("e2e5"),
            Err(ChessError::IllegalMove(_))
        ));
        assert_eq!(game.current_board(), &before);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn undo_and_redo_walk_the_logs() {
        let mut game = ChessGame::new();
        assert_eq!(game.undo_last_move(), None);
        assert_eq!(game.redo_move(), None);

        play(&mut game, &["e2e4", "c7c5"]);
        let after_two = game.to_fen();

        let undone = game.undo_last_move().expect("a move was played");
        assert_eq!(undone.to_string(), "c7c5");
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.can_redo());

        let redone = game.redo_move().expect("a move was undone");
        assert_eq!(redone, undone);
        assert_eq!(game.to_fen(), after_two);
        assert_eq!(game.redo_move(), None);
    }

    #[test]
    fn applying_a_new_move_clears_redo() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "e7e5"]);
        game.undo_last_move();
        assert!(game.can_redo());

        play(&mut game, &["c7c5"]);
        assert!(!game.can_redo());
        assert_eq!(game.redo_move(), None);
        assert_eq!(game.move_log().len(), 2);
    }

    #[test]
    fn cached_moves_follow_undo() {
        let mut game = ChessGame::new();
        let opening = game.legal_moves().to_vec();
        play(&mut game, &["g1f3"]);
        assert!(game.legal_moves().iter().all(|mv| mv.moved_piece.color == Color::Black));
        game.undo_last_move();
        assert_eq!(game.legal_moves(), opening.as_slice());
    }

    #[test]
    fn find_legal_move_matches_click_pairs() {
        let mut game = ChessGame::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN");
        let queen = game.find_legal_move(sq("a7"), sq("a8"), None).expect("push promotes");
        assert_eq!(queen.promotion_kind(), Some(PieceKind::Queen));

        let rook = game
            .find_legal_move(sq("a7"), sq("b8"), Some(PieceKind::Rook))
            .expect("capture promotes");
        assert_eq!(rook.promotion_kind(), Some(PieceKind::Rook));
        assert!(rook.is_capture());

        assert_eq!(game.find_legal_move(sq("e1"), sq("e3"), None), None);
        assert_eq!(game.legal_moves_from(sq("a7")).len(), 8);

        let mut game = ChessGame::new();
        assert_eq!(game.legal_moves_from(sq("g1")).len(), 2);
        assert!(game.legal_moves_from(sq("e4")).is_empty());
    }

    #[test]
    fn apply_then_undo_restores_every_position() {
        let mut game = ChessGame::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN");
        let original = game.current_board().clone();
        let moves = game.legal_moves().to_vec();

        for mv in moves {
            game.apply_move(mv).expect("legal move applies");
            assert_eq!(game.undo_last_move(), Some(mv));
            assert_eq!(game.current_board(), &original, "{mv}");
        }
    }

    #[test]
    fn attack_query_and_engine_hook() {
        let mut game = ChessGame::new();
        assert!(game.is_square_attacked(sq("f3"), Color::White));
        assert!(!game.is_square_attacked(sq("e4"), Color::White));

        let mut engine = RandomEngine::with_seed(3);
        let mv = game.ask_engine(&mut engine).best_move.expect("a move exists");
        assert!(game.legal_moves().contains(&mv));
        game.apply_move(mv).expect("engine move is legal");
        assert_eq!(game.move_log().len(), 1);
    }

    #[test]
    fn load_fen_keeps_the_game_on_error() {
        let mut game = ChessGame::new();
        play(&mut game, &["d2d4"]);
        let before = game.to_fen();
        assert!(game.load_fen("not a fen").is_err());
        assert_eq!(game.to_fen(), before);

        game.load_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN");
        assert!(game.move_log().is_empty());
        assert_eq!(game.legal_moves().len(), 15);

        game.reset();
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn listing_moves_never_changes_the_position() {
        for fen in [
            "4k3/8/8/8/8/8/3PP3/4K3 w - d3 0 1",
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
        ] {
            assert!(matches!(ChessGame::from_fen(fen), Err(ChessError::InvalidFen(_))), "{fen}");
        }

        let mut game = ChessGame::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN");
        let before = game.to_fen();
        let en_passant = game
            .legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.is_en_passant)
            .expect("e5d6 is legal");
        assert_eq!(game.to_fen(), before);

        game.apply_move(en_passant).expect("legal move applies");
        assert_eq!(game.current_board().piece_at(sq("d5")), None);
        game.undo_last_move();
        assert_eq!(game.to_fen(), before);
    }
}
