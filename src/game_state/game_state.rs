//! Core incremental board state representation.
//!
//! `GameState` is the central model for the engine: the 8x8 grid, side to
//! move, cached king squares, castling rights, en-passant target, clocks and
//! the LIFO log of applied moves. All mutation goes through
//! `make_move`/`unmake_move` in `move_generation::legal_move_apply`.

use std::fmt;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Clone)]
pub struct GameState {
    pub(crate) board: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    /// Indexed by `Color::index`. Updated incrementally, never by scanning.
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    pub(crate) history: Vec<Move>,
    /// Bumped by every make/unmake; keys the legal-move memo.
    pub(crate) epoch: u64,
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Empty grid with the given kings; used by the FEN parser.
    pub(crate) fn with_kings(white_king: Square, black_king: Square) -> Self {
        let mut board = [[None; 8]; 8];
        board[white_king.row() as usize][white_king.col() as usize] =
            Some(Piece::new(Color::White, PieceKind::King));
        board[black_king.row() as usize][black_king.col() as usize] =
            Some(Piece::new(Color::Black, PieceKind::King));

        Self {
            board,
            side_to_move: Color::White,
            king_squares: [white_king, black_king],
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
            epoch: 0,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant this ply.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Moves applied so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of plies applied since this state was created.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Occupied squares with their pieces, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Two states are equal when every observable field matches; the memo epoch
/// is bookkeeping and does not take part.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.king_squares == other.king_squares
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.history == other.history
    }
}

impl Eq for GameState {}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.to_fen())?;
        write!(f, "{}", render_game_state(self))
    }
}
