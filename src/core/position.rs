use crate::chess::moves::Move;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::square::{Square, BOARD_SIZE};
use crate::error::{ChessError, Result};

/// The standard initial array, row 0 (rank 8) first.
pub const START_ROWS: [&str; BOARD_SIZE] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// An 8×8 grid of cells plus the side to move.
///
/// `Position` is a plain value: cloning it gives an independent board, which is what the
/// legality filter relies on for its scratch copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// A board with no pieces.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            side_to_move,
        }
    }

    /// The standard starting array, White to move.
    pub fn starting() -> Self {
        let mut pos = Self::empty(Color::White);
        pos.reset();
        pos
    }

    /// Restore the starting array and hand the move to White.
    pub fn reset(&mut self) {
        for (row, line) in START_ROWS.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                self.cells[row][col] = Piece::from_char(c);
            }
        }
        self.side_to_move = Color::White;
    }

    /// Build a position from 8 rows of 8 characters (`.` for empty, `PNBRQK`/`pnbrqk` for
    /// pieces), row 0 being rank 8.
    pub fn from_rows(rows: &[&str], side_to_move: Color) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(ChessError::InvalidLayout {
                row: rows.len(),
                reason: format!("expected {BOARD_SIZE} rows, got {}", rows.len()),
            });
        }
        let mut pos = Self::empty(side_to_move);
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(ChessError::InvalidLayout {
                    row,
                    reason: format!("expected {BOARD_SIZE} cells, got {}", chars.len()),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                pos.cells[row][col] = match c {
                    '.' => None,
                    _ => Some(Piece::from_char(c).ok_or_else(|| ChessError::InvalidLayout {
                        row,
                        reason: format!("unknown piece letter {c:?}"),
                    })?),
                };
            }
        }
        Ok(pos)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()]
    }

    /// Grid lookup by raw coordinates; off-board coordinates read as empty.
    pub fn piece_at_coords(&self, row: i32, col: i32) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.piece_at(sq))
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row()][sq.col()] = piece;
    }

    /// Rows of cells, row 0 first, for rendering.
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub fn is_own_piece(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color == color)
    }

    #[inline]
    pub fn is_opponent_piece(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color != color)
    }

    /// Occupied squares in row-major order.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// First king of `color` in row-major order; `None` if the board has none.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let want = Piece::new(color, PieceKind::King);
        self.iter_pieces()
            .find(|&(_, p)| p == want)
            .map(|(sq, _)| sq)
    }

    /// Move the piece on `mv.from` to `mv.to`, replace it by `mv.promotion` of the same color if
    /// set, and hand the move to the other side.
    ///
    /// Nothing here checks legality. An empty source square just clears the destination.
    pub fn apply_move(&mut self, mv: Move) {
        let moving = self.piece_at(mv.from);
        self.set_piece(mv.from, None);
        let placed = match (moving, mv.promotion) {
            (Some(p), Some(kind)) => Some(Piece::new(p.color, kind)),
            (p, _) => p,
        };
        self.set_piece(mv.to, placed);
        self.side_to_move = self.side_to_move.opposite();
    }
}
