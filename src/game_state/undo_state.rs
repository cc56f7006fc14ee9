use crate::game_state::chess_types::*;

/// Irreversible board fields as they stood immediately before a move.
///
/// Recorded into the move by `make_move`; `unmake_move` restores these
/// verbatim instead of recomputing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
}
