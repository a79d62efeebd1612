//! A terminal front-end for `reversi-engine`.
//!
//! Everything here is plumbing around a [`reversi_engine::Game`]: turning input
//! into engine calls and engine state back into text.

mod command;
mod controller;
mod geometry;
pub mod render;

pub use command::{Command, ParseCommandError};
pub use controller::{Controller, Response};
pub use geometry::Geometry;
