//! Owns the game session and turns user commands into engine calls.

use crate::command::Command;
use crate::geometry::Geometry;
use crate::render;
use reversi_engine::{Game, Location};
use std::fmt;
use tracing::{debug, info, instrument};

/// What the front-end should show in reply to a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// The game changed; contains the redrawn frame.
    Updated(String),
    /// The command was refused; contains the reason.
    Rejected(String),
    /// Informational text that does not change the game.
    Info(String),
    Quit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Updated(text) | Response::Info(text) => f.write_str(text),
            Response::Rejected(reason) => write!(f, "! {}", reason),
            Response::Quit => Ok(()),
        }
    }
}

/// A single game session driven by text commands.
pub struct Controller {
    game: Game,
    geometry: Geometry,
}

impl Controller {
    pub fn new(game: Game, geometry: Geometry) -> Self {
        Self { game, geometry }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The current board and turn label.
    pub fn frame(&self) -> String {
        render::frame(&self.game)
    }

    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Response {
        match command {
            Command::Place(loc) => self.place(loc),
            Command::Click { x, y } => match self.geometry.cell_at(x, y) {
                Some(loc) => self.place(loc),
                None => Response::Rejected(format!(
                    "({}, {}) is outside the {}px board",
                    x,
                    y,
                    self.geometry.side_length()
                )),
            },
            Command::Undo => match self.game.undo() {
                Ok(()) => {
                    info!(turn = %self.game.current_turn(), "move taken back");
                    Response::Updated(self.frame())
                }
                Err(err) => Response::Rejected(err.to_string()),
            },
            Command::Moves => {
                let moves = self.game.legal_moves();
                if moves.is_empty() {
                    Response::Info(format!(
                        "{} has no legal moves",
                        self.game.current_turn()
                    ))
                } else {
                    Response::Info(format!("legal moves: {}", moves))
                }
            }
            Command::Help => Response::Info(Command::HELP.to_string()),
            Command::Quit => Response::Quit,
        }
    }

    fn place(&mut self, loc: Location) -> Response {
        let mover = self.game.current_turn();
        match self.game.play(loc) {
            Ok(flipped) => {
                info!(%mover, %loc, flipped = flipped.len(), "move played");
                Response::Updated(self.frame())
            }
            Err(err) => {
                debug!(%err, "illegal move");
                Response::Rejected(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_engine::{Board, Cell, Player};

    fn controller() -> Controller {
        Controller::new(Game::new(), Geometry::default())
    }

    fn command(s: &str) -> Command {
        s.parse().unwrap()
    }

    #[test]
    fn move_redraws_with_new_label() {
        let mut controller = controller();
        match controller.handle(command("d3")) {
            Response::Updated(frame) => assert!(frame.starts_with("White's turn")),
            other => panic!("unexpected response: {:?}", other),
        }
        assert_eq!(controller.game().current_turn(), Player::White);
    }

    #[test]
    fn click_maps_to_cell() {
        let mut controller = controller();
        // Row 2, column 3 on a 560px board.
        let response = controller.handle(Command::Click { x: 250.0, y: 180.0 });
        assert!(matches!(response, Response::Updated(_)));
        assert_eq!(
            controller.game().board().get(Location::from_coords(2, 3).unwrap()),
            Cell::Black
        );
    }

    #[test]
    fn click_outside_board_is_rejected() {
        let mut controller = controller();
        let response = controller.handle(Command::Click { x: 600.0, y: 10.0 });
        assert!(matches!(response, Response::Rejected(_)));
        assert_eq!(controller.game(), &Game::new());
    }

    #[test]
    fn illegal_move_is_reported() {
        let mut controller = controller();
        assert_eq!(
            controller.handle(command("e4")),
            Response::Rejected("E4 is already occupied".to_string())
        );
        assert_eq!(
            controller.handle(command("a1")),
            Response::Rejected("A1 does not capture any stones".to_string())
        );
        assert_eq!(controller.game().current_turn(), Player::Black);
    }

    #[test]
    fn undo_round_trip() {
        let mut controller = controller();
        controller.handle(command("d3"));
        assert!(matches!(
            controller.handle(Command::Undo),
            Response::Updated(_)
        ));
        assert_eq!(controller.game().board(), &Board::new());
        assert_eq!(
            controller.handle(Command::Undo),
            Response::Rejected("there is no move to undo".to_string())
        );
    }

    #[test]
    fn lists_moves() {
        let mut controller = controller();
        assert_eq!(
            controller.handle(Command::Moves),
            Response::Info("legal moves: [D3, C4, F5, E6]".to_string())
        );
    }

    #[test]
    fn quit_is_passed_through() {
        assert_eq!(controller().handle(Command::Quit), Response::Quit);
    }
}
