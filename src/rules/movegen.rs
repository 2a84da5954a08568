use crate::chess::moves::Move;
use crate::chess::piece::{Color, PieceKind, KNIGHT_DELTAS};
use crate::core::coord::{Delta, KING_STEPS};
use crate::core::position::Position;
use crate::core::square::Square;

/// Every geometrically valid move for `color`, ignoring whether it leaves its own king in check.
///
/// Order: squares row-major, then the piece's direction/offset order. Pawns reaching the last
/// rank always carry a queen promotion; there is no castling and no en-passant.
pub fn pseudo_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    for (from, piece) in pos.iter_pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_moves(pos, from, color, &mut out),
            PieceKind::Knight => step_moves(pos, from, color, &KNIGHT_DELTAS, &mut out),
            PieceKind::King => step_moves(pos, from, color, &KING_STEPS, &mut out),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliding_moves(pos, from, color, piece.kind.slide_dirs(), &mut out)
            }
        }
    }
    out
}

fn sliding_moves(pos: &Position, from: Square, color: Color, dirs: &[Delta], out: &mut Vec<Move>) {
    for &dir in dirs {
        let mut cur = from.offset(dir);
        while let Some(to) = cur {
            if pos.is_empty(to) {
                out.push(Move::new(from, to));
            } else {
                if pos.is_opponent_piece(to, color) {
                    out.push(Move::new(from, to));
                }
                break;
            }
            cur = to.offset(dir);
        }
    }
}

fn step_moves(pos: &Position, from: Square, color: Color, deltas: &[Delta], out: &mut Vec<Move>) {
    for &d in deltas {
        let Some(to) = from.offset(d) else {
            continue;
        };
        if !pos.is_own_piece(to, color) {
            out.push(Move::new(from, to));
        }
    }
}

fn pawn_moves(pos: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward = color.forward();

    if let Some(one) = from.offset(Delta::new(forward, 0)).filter(|&sq| pos.is_empty(sq)) {
        out.push(promote_if_last_rank(Move::new(from, one), color));

        if from.row() == color.pawn_start_row() {
            if let Some(two) = one.offset(Delta::new(forward, 0)).filter(|&sq| pos.is_empty(sq)) {
                out.push(Move::new(from, two));
            }
        }
    }

    for dcol in [-1, 1] {
        let Some(to) = from.offset(Delta::new(forward, dcol)) else {
            continue;
        };
        if pos.is_opponent_piece(to, color) {
            out.push(promote_if_last_rank(Move::new(from, to), color));
        }
    }
}

#[inline]
fn promote_if_last_rank(mv: Move, color: Color) -> Move {
    if mv.to.row() == color.promotion_row() {
        mv.with_promotion(PieceKind::Queen)
    } else {
        mv
    }
}
