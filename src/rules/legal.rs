use log::{debug, trace};

use crate::chess::moves::Move;
use crate::chess::piece::Color;
use crate::core::position::Position;

use super::attacks::is_in_check;
use super::movegen::pseudo_moves;

/// Pseudo-legal moves of `color` that do not leave its own king attacked.
///
/// Each candidate is tried on its own scratch copy of `pos`; `pos` itself is never touched.
pub fn legal_moves(pos: &Position, color: Color) -> Vec<Move> {
    let pseudo = pseudo_moves(pos, color);
    let total = pseudo.len();

    let legal: Vec<Move> = pseudo
        .into_iter()
        .filter(|&mv| {
            let ok = !leaves_king_in_check(pos, mv, color);
            if !ok {
                trace!("discarding {mv:?}: {color:?} king left in check");
            }
            ok
        })
        .collect();

    if legal.len() != total {
        debug!(
            "{color:?}: {} of {total} pseudo-legal moves leave the king in check",
            total - legal.len()
        );
    }
    legal
}

/// True iff playing `mv` on a copy of `pos` leaves `color` in check.
pub fn leaves_king_in_check(pos: &Position, mv: Move, color: Color) -> bool {
    let mut scratch = pos.clone();
    scratch.apply_move(mv);
    is_in_check(&scratch, color)
}

/// True iff `color` has at least one legal move.
pub fn has_legal_move(pos: &Position, color: Color) -> bool {
    pseudo_moves(pos, color)
        .into_iter()
        .any(|mv| !leaves_king_in_check(pos, mv, color))
}
