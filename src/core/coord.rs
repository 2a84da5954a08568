/// A signed `(row, col)` step on the board grid.
///
/// Rows grow toward White's back rank (row 0 is rank 8), columns grow toward the h-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub row: i32,
    pub col: i32,
}

impl Delta {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// The 8 king steps, row-major.
pub const KING_STEPS: [Delta; 8] = [
    Delta { row: -1, col: -1 },
    Delta { row: -1, col: 0 },
    Delta { row: -1, col: 1 },
    Delta { row: 0, col: -1 },
    Delta { row: 0, col: 1 },
    Delta { row: 1, col: -1 },
    Delta { row: 1, col: 0 },
    Delta { row: 1, col: 1 },
];
