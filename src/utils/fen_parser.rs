//! FEN-to-GameState parser.
//!
//! Builds a complete state from a Forsyth-Edwards Notation string: board,
//! side to move, castling rights, en-passant target and both clocks. The
//! two clock fields may be omitted and default to `0 1`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let placements = parse_board(board_part)?;
    let white_king = single_king(&placements, Color::White)?;
    let black_king = single_king(&placements, Color::Black)?;

    let mut game_state = GameState::with_kings(white_king, black_king);
    for (square, piece) in placements {
        game_state.set_piece(square, Some(piece));
    }

    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    if let Some(target) = game_state.en_passant_target {
        check_en_passant_target(&game_state, target)?;
    }
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad halfmove clock '{halfmove_part}'")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad fullmove number '{fullmove_part}'")))?
        .max(1);

    Ok(game_state)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

/// Pieces in board order. FEN lists rank 8 first, which is grid row 0.
fn parse_board(board_part: &str) -> ChessResult<Vec<(Square, Piece)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut placements = Vec::with_capacity(32);
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("bad empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(invalid(&format!("rank '{rank_str}' has more than 8 files")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("bad piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid(&format!("rank '{rank_str}' has more than 8 files")));
            }

            let square = Square::new(row as u8, col);
            if piece.kind == PieceKind::Pawn && (row == 0 || row == 7) {
                return Err(invalid(&format!("pawn on back rank at {square}")));
            }
            placements.push((square, piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank '{rank_str}' does not cover 8 files")));
        }
    }

    Ok(placements)
}

fn single_king(placements: &[(Square, Piece)], color: Color) -> ChessResult<Square> {
    let king = Piece::new(color, PieceKind::King);
    let mut squares = placements
        .iter()
        .filter(|(_, piece)| *piece == king)
        .map(|(square, _)| *square);

    match (squares.next(), squares.next()) {
        (Some(square), None) => Ok(square),
        (None, _) => Err(invalid(&format!("no {color} king"))),
        (Some(_), Some(_)) => Err(invalid(&format!("more than one {color} king"))),
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("bad side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(&format!("bad castling character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("bad en-passant square '{en_passant_part}'")))?;
    Ok(Some(square))
}

/// The target must be the empty square an enemy pawn just skipped: on the
/// row behind that pawn's double push, with the pawn still in front of it.
fn check_en_passant_target(game_state: &GameState, target: Square) -> ChessResult<()> {
    let pusher = game_state.side_to_move().opposite();
    let skipped_row = pusher.pawn_home_row() as i8 + pusher.pawn_direction();
    if target.row() as i8 != skipped_row {
        return Err(invalid(&format!(
            "en-passant square {target} does not fit {} to move",
            game_state.side_to_move()
        )));
    }
    if game_state.piece_at(target).is_some() {
        return Err(invalid(&format!("en-passant square {target} is occupied")));
    }

    let pushed_pawn = target
        .offset(pusher.pawn_direction(), 0)
        .and_then(|square| game_state.piece_at(square));
    if pushed_pawn != Some(Piece::new(pusher, PieceKind::Pawn)) {
        return Err(invalid(&format!(
            "no {pusher} pawn in front of en-passant square {target}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move(), Color::White);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.castling_rights(), CastlingRights::ALL);
        assert_eq!(game_state.king_square(Color::Black), "e8".parse().expect("square"));
        assert_eq!(
            game_state.piece_at("d1".parse().expect("square")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn clocks_may_be_omitted() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b -  -").expect("FEN should parse");
        assert_eq!(game_state.side_to_move(), Color::Black);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.fullmove_number(), 1);
    }

    #[test]
    fn reads_rights_target_and_clocks() {
        let game_state = parse_fen("4k2r/8/8/3pP3/8/8/8/R3K3 w Qk d6 3 17").expect("FEN should parse");
        let rights = game_state.castling_rights();
        assert!(rights.white_queen_side && rights.black_king_side);
        assert!(!rights.white_king_side && !rights.black_queen_side);
        assert_eq!(game_state.en_passant_target(), Some("d6".parse().expect("square")));
        assert_eq!(game_state.halfmove_clock(), 3);
        assert_eq!(game_state.fullmove_number(), 17);
    }

    #[test]
    fn rejects_malformed_input() {
        let bad = [
            "",
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4KK2 w - - 0 1",
            "4k3/8/8/8/8/8/8 w - - 0 1",
            "4k3/9/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w X - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - zero 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "P3k3/8/8/8/8/8/8/4K3 w - - 0 1",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }

    #[test]
    fn en_passant_target_must_match_the_board() {
        let bad = [
            // own pawns on d2 and e2, no black pawn on d4
            "4k3/8/8/8/8/8/3PP3/4K3 w - d3 0 1",
            // white to move but no black pawn on d5
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
            // rank 3 target with White to move
            "4k3/8/8/8/3P4/8/8/4K3 w - d3 0 1",
            // target square occupied
            "4k3/8/3n4/3pP3/8/8/8/4K3 w - d6 0 1",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }

        let black_to_move = parse_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_eq!(black_to_move.en_passant_target(), Some("e3".parse().expect("square")));
    }
}
