use log::debug;

use crate::chess::moves::Move;
use crate::chess::piece::Color;
use crate::core::position::Position;
use crate::error::{ChessError, Result};
use crate::rules::attacks::is_in_check;
use crate::rules::legal::legal_moves;
use crate::rules::movegen::pseudo_moves;
use crate::rules::outcome::{outcome, Outcome};

/// The live game: one position plus the operations a front end needs.
#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Position,
}

impl Game {
    /// A game at the standard starting array, White to move.
    pub fn new() -> Self {
        Self {
            position: Position::starting(),
        }
    }

    pub fn from_position(position: Position) -> Self {
        Self { position }
    }

    pub fn reset(&mut self) {
        self.position.reset();
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        legal_moves(&self.position, color)
    }

    pub fn pseudo_moves(&self, color: Color) -> Vec<Move> {
        pseudo_moves(&self.position, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.position, color)
    }

    /// Apply `mv` to the live position. The caller vouches that `mv` is legal.
    pub fn apply_move(&mut self, mv: Move) {
        self.position.apply_move(mv);
    }

    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.position)
    }

    /// Play the legal move with the same squares as `request`.
    ///
    /// A promotion named in `request` replaces the generated one, but only when the matched move
    /// already promotes; otherwise it is ignored. Returns the move actually applied.
    pub fn play(&mut self, request: Move) -> Result<Move> {
        let side = self.side_to_move();
        let mut mv = self
            .legal_moves(side)
            .into_iter()
            .find(|m| m.same_squares(&request))
            .ok_or(ChessError::IllegalMove { mv: request })?;

        if mv.promotion.is_some() {
            if let Some(kind) = request.promotion {
                mv.promotion = Some(kind);
            }
        }
        debug!("{side:?} plays {mv:?}");
        self.apply_move(mv);
        Ok(mv)
    }
}
