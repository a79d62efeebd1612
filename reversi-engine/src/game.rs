//! Implements session-level Reversi logic: turns and one-ply undo.
//!
//! [`Game`] is the interface a front-end should hold on to. It owns the
//! [`Board`], tracks whose turn it is, and remembers the position before the
//! last move so it can be taken back.

use crate::board::Board;
use crate::location::{Location, LocationList};
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, instrument};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// When [`Game`] saves the position used by [`Game::undo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotTiming {
    /// Save before every move attempt on an empty cell, even one that turns
    /// out to capture nothing. A rejected attempt therefore replaces the
    /// position saved by the last accepted move.
    EveryAttempt,
    /// Save only when a move is accepted.
    AcceptedOnly,
}

impl Default for SnapshotTiming {
    fn default() -> Self {
        Self::EveryAttempt
    }
}

/// Configurable behavior of a [`Game`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub snapshot: SnapshotTiming,
}

/// A saved position: the board and the player to move on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display(fmt = "{} is already occupied", location)]
    Occupied { location: Location },
    #[display(fmt = "{} does not capture any stones", location)]
    NoCapture { location: Location },
    #[display(fmt = "({}, {}) is off the board", row, col)]
    OutOfBounds { row: usize, col: usize },
    #[display(fmt = "there is no move to undo")]
    NothingToUndo,
}

/// The complete state of a Reversi session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Player,
    history: Option<Snapshot>,
    rules: Rules,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game from the standard opening with default [`Rules`].
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    #[instrument]
    pub fn with_rules(rules: Rules) -> Self {
        Self::from_position(Board::new(), Player::default(), rules)
    }

    /// Start a game from an arbitrary position, with nothing to undo.
    pub fn from_position(board: Board, turn: Player, rules: Rules) -> Self {
        Self {
            board,
            turn,
            history: None,
            rules,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who moves next.
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// The position [`Game::undo`] would restore, if any.
    #[inline]
    pub fn history(&self) -> Option<&Snapshot> {
        self.history.as_ref()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.is_some()
    }

    /// Get the legal moves for the player to move.
    pub fn legal_moves(&self) -> LocationList {
        self.board.legal_moves(self.turn)
    }

    /// Move for the current player at `loc`. On success the turn passes to the
    /// opponent and the flipped stones are returned.
    ///
    /// A rejected move leaves the board and turn unchanged. Under
    /// [`SnapshotTiming::EveryAttempt`] an attempt on an empty cell still
    /// replaces the undo snapshot before legality is known.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, loc: Location) -> Result<LocationList, GameError> {
        if !self.board.get(loc).is_empty() {
            debug!("rejected: cell occupied");
            return Err(GameError::Occupied { location: loc });
        }

        let before = Snapshot {
            board: self.board,
            turn: self.turn,
        };
        if self.rules.snapshot == SnapshotTiming::EveryAttempt {
            self.history = Some(before);
        }

        let flipped = self.board.capture(loc, self.turn);
        if flipped.is_empty() {
            debug!("rejected: nothing captured");
            return Err(GameError::NoCapture { location: loc });
        }

        self.history = Some(before);
        self.turn = !self.turn;
        debug!(flipped = flipped.len(), next = %self.turn, "move accepted");
        Ok(flipped)
    }

    /// Move for the current player at `loc`, reporting only whether the move
    /// was accepted.
    #[inline]
    pub fn attempt_move(&mut self, loc: Location) -> bool {
        self.play(loc).is_ok()
    }

    /// Like [`Game::play`], for raw coordinates that may be off the board.
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<LocationList, GameError> {
        let loc = Location::from_coords(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        self.play(loc)
    }

    /// Restore the saved position, consuming it. Only one ply is kept, so a
    /// second undo in a row fails with [`GameError::NothingToUndo`].
    ///
    /// Under [`SnapshotTiming::EveryAttempt`] the turn is toggled rather than
    /// restored, so undo after a rejected attempt keeps the board but hands the
    /// move back to the other player. Under [`SnapshotTiming::AcceptedOnly`]
    /// the saved turn is restored.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.take().ok_or(GameError::NothingToUndo)?;
        self.board = snapshot.board;
        self.turn = match self.rules.snapshot {
            SnapshotTiming::EveryAttempt => !self.turn,
            SnapshotTiming::AcceptedOnly => snapshot.turn,
        };
        debug!(turn = %self.turn, "restored previous position");
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.turn)
    }
}
