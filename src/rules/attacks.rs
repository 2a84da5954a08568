use crate::chess::piece::{Color, Piece, PieceKind, BISHOP_DIRS, KNIGHT_DELTAS, ROOK_DIRS};
use crate::core::coord::{Delta, KING_STEPS};
use crate::core::position::Position;
use crate::core::square::Square;

/// True iff some piece of `by` could capture onto `target` in one pseudo-move.
///
/// Scans outward from the target, one piece family at a time. Whose turn it is does not matter.
pub fn is_attacked(pos: &Position, target: Square, by: Color) -> bool {
    pawn_attacks(pos, target, by)
        || any_at_offsets(pos, target, &KNIGHT_DELTAS, Piece::new(by, PieceKind::Knight))
        || ray_attacks(pos, target, &BISHOP_DIRS, by, PieceKind::Bishop)
        || ray_attacks(pos, target, &ROOK_DIRS, by, PieceKind::Rook)
        || any_at_offsets(pos, target, &KING_STEPS, Piece::new(by, PieceKind::King))
}

/// Same as [`is_attacked`] on raw coordinates; off-board targets are never attacked.
pub fn is_attacked_at(pos: &Position, row: i32, col: i32, by: Color) -> bool {
    Square::new(row, col).is_some_and(|sq| is_attacked(pos, sq, by))
}

/// True iff `color` has a king and it is attacked. A missing king is never in check.
pub fn is_in_check(pos: &Position, color: Color) -> bool {
    match pos.find_king(color) {
        Some(k) => is_attacked(pos, k, color.opposite()),
        None => false,
    }
}

fn pawn_attacks(pos: &Position, target: Square, by: Color) -> bool {
    // A pawn of `by` captures forward, so it sits one row behind the target in its own
    // direction of travel.
    let behind = -by.forward();
    let pawn = Piece::new(by, PieceKind::Pawn);
    [-1, 1].into_iter().any(|dcol| {
        target
            .offset(Delta::new(behind, dcol))
            .is_some_and(|sq| pos.piece_at(sq) == Some(pawn))
    })
}

fn any_at_offsets(pos: &Position, target: Square, deltas: &[Delta], want: Piece) -> bool {
    deltas.iter().any(|&d| {
        target
            .offset(d)
            .is_some_and(|sq| pos.piece_at(sq) == Some(want))
    })
}

/// Walk each ray until the first occupant. `slider` or a queen of `by` there attacks; anything
/// else blocks the ray.
fn ray_attacks(pos: &Position, target: Square, dirs: &[Delta], by: Color, slider: PieceKind) -> bool {
    for &dir in dirs {
        let mut cur = target.offset(dir);
        while let Some(sq) = cur {
            if let Some(p) = pos.piece_at(sq) {
                if p.color == by && (p.kind == slider || p.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = sq.offset(dir);
        }
    }
    false
}
