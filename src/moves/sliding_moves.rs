//! Ray geometry for rooks, bishops and queens.

use crate::game_state::chess_types::Square;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Squares from `origin` (exclusive) to the board edge along one direction.
/// Blockers are the caller's concern.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Square,
    direction: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let next = self.current.offset(self.direction.0, self.direction.1)?;
        self.current = next;
        Some(next)
    }
}

#[inline]
pub fn ray(origin: Square, direction: (i8, i8)) -> Ray {
    Ray {
        current: origin,
        direction,
    }
}
