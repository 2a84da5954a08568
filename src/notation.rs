//! Coordinate notation: `e2e4`, `e7-e8q`.

use crate::chess::moves::Move;
use crate::chess::piece::PieceKind;
use crate::core::square::{Square, BOARD_SIZE};
use crate::error::{ChessError, Result};

/// Parse a move request.
///
/// Case, spaces and dashes are ignored, as is any character other than a letter or digit. A fifth
/// character among `q r b n` asks for that promotion piece; anything else there is dropped.
pub fn parse_move(input: &str) -> Result<Move> {
    let t: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let err = |reason| ChessError::ParseMove {
        input: input.to_string(),
        reason,
    };

    if t.len() < 4 {
        return Err(err("expected at least 4 characters"));
    }
    let from = parse_square(t[0], t[1]).ok_or_else(|| err("bad source square"))?;
    let to = parse_square(t[2], t[3]).ok_or_else(|| err("bad destination square"))?;

    let mut mv = Move::new(from, to);
    if let Some(&c) = t.get(4) {
        if let Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) =
            PieceKind::from_letter(c)
        {
            mv = mv.with_promotion(kind);
        }
    }
    Ok(mv)
}

/// `a1`..`h8` to a square; `None` for anything else.
pub fn parse_square(file: char, rank: char) -> Option<Square> {
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    let col = file as i32 - 'a' as i32;
    let row = BOARD_SIZE as i32 - 1 - (rank as i32 - '1' as i32);
    Square::new(row, col)
}

pub fn square_name(sq: Square) -> String {
    let file = (b'a' + sq.col() as u8) as char;
    let rank = (b'1' + (BOARD_SIZE - 1 - sq.row()) as u8) as char;
    format!("{file}{rank}")
}

/// `e2e4`, with a lower-case promotion letter appended when set.
pub fn move_name(mv: &Move) -> String {
    let mut s = square_name(mv.from) + &square_name(mv.to);
    if let Some(kind) = mv.promotion {
        s.push(kind.letter());
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        let mut c = name.chars();
        parse_square(c.next().unwrap(), c.next().unwrap()).unwrap()
    }

    #[test]
    fn squares_map_rank_eight_to_row_zero() {
        assert_eq!(sq("a8"), Square::new(0, 0).unwrap());
        assert_eq!(sq("h1"), Square::new(7, 7).unwrap());
        assert_eq!(sq("e2"), Square::new(6, 4).unwrap());
        assert_eq!(square_name(Square::new(6, 4).unwrap()), "e2");
    }

    #[test]
    fn dashes_spaces_and_case_are_ignored() {
        let mv = parse_move(" E7 - e8Q ").unwrap();
        assert_eq!(mv.from, sq("e7"));
        assert_eq!(mv.to, sq("e8"));
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(move_name(&mv), "e7e8q");
    }

    #[test]
    fn unknown_promotion_letter_is_dropped() {
        let mv = parse_move("e7e8k").unwrap();
        assert_eq!(mv.promotion, None);
        let mv = parse_move("e7e8n").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(parse_move("e2e").is_err());
        assert!(parse_move("i2e4").is_err());
        assert!(parse_move("e9e4").is_err());
        assert!(parse_move("hello").is_err());
    }
}
