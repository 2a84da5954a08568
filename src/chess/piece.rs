use crate::core::coord::Delta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward pawn move.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row pawns of this color start on (and may double-push from).
    #[inline]
    pub fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Delta] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    /// Lower-case letter used by coordinate notation and board output.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Board letter: upper-case for White, lower-case for Black.
    pub fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }
}

pub const BISHOP_DIRS: [Delta; 4] = [
    Delta { row: -1, col: -1 },
    Delta { row: -1, col: 1 },
    Delta { row: 1, col: -1 },
    Delta { row: 1, col: 1 },
];

pub const ROOK_DIRS: [Delta; 4] = [
    Delta { row: -1, col: 0 },
    Delta { row: 1, col: 0 },
    Delta { row: 0, col: -1 },
    Delta { row: 0, col: 1 },
];

/// Bishop directions followed by rook directions.
pub const QUEEN_DIRS: [Delta; 8] = [
    Delta { row: -1, col: -1 },
    Delta { row: -1, col: 1 },
    Delta { row: 1, col: -1 },
    Delta { row: 1, col: 1 },
    Delta { row: -1, col: 0 },
    Delta { row: 1, col: 0 },
    Delta { row: 0, col: -1 },
    Delta { row: 0, col: 1 },
];

pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta { row: -2, col: -1 },
    Delta { row: -2, col: 1 },
    Delta { row: -1, col: -2 },
    Delta { row: -1, col: 2 },
    Delta { row: 1, col: -2 },
    Delta { row: 1, col: 2 },
    Delta { row: 2, col: -1 },
    Delta { row: 2, col: 1 },
];
