//! The line-based input language of the terminal front-end.

use derive_more::{Display, Error};
use reversi_engine::Location;
use std::str::FromStr;

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Move at a location given in board notation ("d3").
    Place(Location),
    /// Move at the cell under a pixel coordinate.
    Click { x: f64, y: f64 },
    Undo,
    /// List the legal moves for the player to move.
    Moves,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseCommandError {
    #[display(fmt = "empty command")]
    Empty,
    #[display(fmt = "expected `click X Y` with numeric pixel coordinates")]
    BadClick,
    #[display(fmt = "unknown command `{}` (try `help`)", input)]
    Unknown { input: String },
}

impl Command {
    pub const HELP: &'static str = "\
commands:
  <cell>        move at a cell, e.g. d3
  click X Y     move at the cell under pixel (X, Y)
  undo          take back the last move
  moves         list legal moves
  help          show this message
  quit          leave the game";
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseCommandError::Unknown {
            input: s.trim().to_string(),
        };

        let mut words = s.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "undo" | "u" => Command::Undo,
            "moves" | "m" => Command::Moves,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "click" | "c" => {
                let mut coord = || -> Result<f64, ParseCommandError> {
                    words
                        .next()
                        .and_then(|w| w.parse().ok())
                        .ok_or(ParseCommandError::BadClick)
                };
                let x = coord()?;
                let y = coord()?;
                Command::Click { x, y }
            }
            _ => Command::Place(head.parse().map_err(|_| unknown())?),
        };

        if words.next().is_some() {
            return Err(unknown());
        }
        Ok(command)
    }
}
