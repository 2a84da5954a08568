//! Chess rules over a [`Position`](crate::core::position::Position).
//!
//! - [`attacks`]: the attack oracle and check detection.
//! - [`movegen`]: pseudo-legal move generation per piece kind.
//! - [`legal`]: filters out moves that leave the mover in check.
//! - [`outcome`]: checkmate vs stalemate once no legal move is left.

pub mod attacks;
pub mod legal;
pub mod movegen;
pub mod outcome;
