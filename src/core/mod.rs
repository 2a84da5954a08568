//! Board primitives with no rules attached.
//!
//! - [`coord`]: signed row/column steps and the king step set.
//! - [`square`]: range-checked board squares and `on_board`.
//! - [`position`]: the 8×8 grid, side to move, and the move applier.

pub mod coord;
pub mod position;
pub mod square;
