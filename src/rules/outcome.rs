use crate::chess::piece::Color;
use crate::core::position::Position;

use super::attacks::is_in_check;
use super::legal::has_legal_move;

/// How a game ends when the side to move has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { loser: Color },
    Stalemate,
}

/// `None` while the side to move still has a legal move.
pub fn outcome(pos: &Position) -> Option<Outcome> {
    let side = pos.side_to_move();
    if has_legal_move(pos, side) {
        return None;
    }
    if is_in_check(pos, side) {
        Some(Outcome::Checkmate { loser: side })
    } else {
        Some(Outcome::Stalemate)
    }
}

pub fn is_checkmate(pos: &Position) -> bool {
    matches!(outcome(pos), Some(Outcome::Checkmate { .. }))
}

pub fn is_stalemate(pos: &Position) -> bool {
    matches!(outcome(pos), Some(Outcome::Stalemate))
}
