//! Chess vocabulary: colors, piece kinds and moves.

pub mod moves;
pub mod piece;
