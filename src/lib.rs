//! A legality oracle for standard chess without castling or en-passant.
//!
//! Pawns promote automatically (to a queen unless the caller asks otherwise). The crate generates
//! pseudo-legal moves, filters out those that leave the mover in check, applies moves and tells
//! checkmate from stalemate. A small line-oriented session sits on top for interactive play.

pub mod chess;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod notation;
pub mod rules;
pub mod session;
