//! The move record.
//!
//! A `Move` is fixed at construction: the moved and captured pieces are read
//! off the board when it is built and never re-read. The only field written
//! later is the before-snapshot, which `make_move` fills in so that
//! `unmake_move` can reverse the move from the record alone.

use std::fmt;

use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub moved_piece: Piece,
    /// For en passant this is the opposing pawn, which is not on `end`.
    pub captured_piece: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub promotion: Option<PieceKind>,
    pub(crate) before: Option<UndoState>,
}

impl Move {
    /// Plain move or capture from `start` to `end` in the current position.
    /// Generators only call this for occupied start squares; an empty one is
    /// a generator bug and panics. Outside callers go through `from_board`.
    pub(crate) fn new(start: Square, end: Square, game_state: &GameState) -> Self {
        let moved_piece = game_state
            .piece_at(start)
            .unwrap_or_else(|| panic!("no piece on move start square {start}"));
        Self {
            start,
            end,
            moved_piece,
            captured_piece: game_state.piece_at(end),
            is_en_passant: false,
            is_castle: false,
            promotion: None,
            before: None,
        }
    }

    /// En-passant capture; the captured pawn is synthesised.
    pub(crate) fn en_passant(start: Square, end: Square, game_state: &GameState) -> Self {
        let mut mv = Self::new(start, end, game_state);
        mv.captured_piece = Some(Piece::new(
            mv.moved_piece.color.opposite(),
            PieceKind::Pawn,
        ));
        mv.is_en_passant = true;
        mv
    }

    /// King move of two files that also relocates the rook.
    pub(crate) fn castle(start: Square, end: Square, game_state: &GameState) -> Self {
        let mut mv = Self::new(start, end, game_state);
        mv.is_castle = true;
        mv
    }

    #[inline]
    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    /// Builds a candidate from a raw square pair, inferring the en-passant and
    /// castle tags from board context. Returns `None` when `start` is empty.
    ///
    /// The result is only a candidate: callers check it against the legal
    /// move list before applying it.
    pub fn from_board(
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
        game_state: &GameState,
    ) -> Option<Self> {
        let piece = game_state.piece_at(start)?;
        let mv = match piece.kind {
            PieceKind::Pawn
                if start.col() != end.col()
                    && game_state.piece_at(end).is_none()
                    && game_state.en_passant_target() == Some(end) =>
            {
                Self::en_passant(start, end, game_state)
            }
            PieceKind::King
                if start.row() == end.row()
                    && start.col() == KING_HOME_COL
                    && start.col().abs_diff(end.col()) == 2 =>
            {
                Self::castle(start, end, game_state)
            }
            _ => Self::new(start, end, game_state),
        };

        let reaches_last_row = piece.kind == PieceKind::Pawn
            && end.row() == piece.color.promotion_row();
        Some(if reaches_last_row {
            mv.with_promotion(promotion.unwrap_or(PieceKind::Queen))
        } else {
            mv
        })
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// True when a pawn reaches its last row with this move.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.moved_piece.kind == PieceKind::Pawn
            && self.end.row() == self.moved_piece.color.promotion_row()
    }

    /// Kind the pawn becomes; Queen unless another choice was recorded.
    #[inline]
    pub fn promotion_kind(&self) -> Option<PieceKind> {
        if self.is_promotion() {
            Some(self.promotion.unwrap_or(PieceKind::Queen))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moved_piece.kind == PieceKind::Pawn && self.start.row().abs_diff(self.end.row()) == 2
    }

    /// Board state captured when the move was applied, if it has been.
    #[inline]
    pub fn before(&self) -> Option<&UndoState> {
        self.before.as_ref()
    }

    /// Display form: `O-O`/`O-O-O` for castling, coordinates otherwise.
    pub fn notation(&self) -> String {
        if self.is_castle {
            if self.end.col() > self.start.col() {
                "O-O".to_owned()
            } else {
                "O-O-O".to_owned()
            }
        } else {
            move_to_long_algebraic(self)
        }
    }
}

/// Identity is the square pair, the pieces involved and the promotion
/// choice. The before-snapshot is not part of it.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.moved_piece == other.moved_piece
            && self.captured_piece == other.captured_piece
            && self.promotion_kind() == other.promotion_kind()
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}
