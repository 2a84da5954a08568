use crate::core::coord::Delta;
use crate::error::{ChessError, Result};

pub const BOARD_SIZE: usize = 8;

/// True iff both coordinates lie in `[0, 8)`.
#[inline]
pub fn on_board(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// An on-board square, `row` 0 = rank 8 and `col` 0 = file a.
///
/// The only ways to build one check the range, so holding a `Square` means indexing the grid
/// with it cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Checked constructor; `None` if either coordinate is off the board.
    #[inline]
    pub fn new(row: i32, col: i32) -> Option<Square> {
        if on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Like [`Square::new`] but reports the rejected coordinates.
    pub fn try_new(row: i32, col: i32) -> Result<Square> {
        Square::new(row, col).ok_or(ChessError::OffBoard { row, col })
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The square reached by stepping `d`, if it is still on the board.
    #[inline]
    pub fn offset(self, d: Delta) -> Option<Square> {
        Square::new(self.row as i32 + d.row, self.col as i32 + d.col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_board_rejects_each_edge() {
        assert!(on_board(0, 0));
        assert!(on_board(7, 7));
        assert!(!on_board(-1, 0));
        assert!(!on_board(0, -1));
        assert!(!on_board(8, 0));
        assert!(!on_board(0, 8));
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let sq = Square::new(0, 7).unwrap();
        assert_eq!(sq.offset(Delta::new(-1, 0)), None);
        assert_eq!(sq.offset(Delta::new(0, 1)), None);
        assert_eq!(sq.offset(Delta::new(1, -1)), Square::new(1, 6));
    }

    #[test]
    fn try_new_reports_coordinates() {
        let err = Square::try_new(3, 9).unwrap_err();
        assert!(matches!(err, ChessError::OffBoard { row: 3, col: 9 }));
    }

    #[test]
    fn all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[1], Square::new(0, 1).unwrap());
        assert_eq!(squares[8], Square::new(1, 0).unwrap());
    }
}
