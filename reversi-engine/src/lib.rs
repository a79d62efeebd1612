//! `reversi-engine` is a small, fully-checked Reversi rule engine for front-ends.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the 8x8 grid and implements the capture rules. It takes the
//!    moving [`Player`] as an argument and leaves turn-keeping to the caller.
//!  - [`Game`] is a session: it owns a [`Board`], enforces turn order, and keeps
//!    one ply of history for [`Game::undo`]. A front-end should hold one of these.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
