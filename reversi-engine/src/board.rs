//! The Reversi grid and the capture rules that act on it.
//!
//! [`Board`] knows nothing about whose turn it is: every operation takes the
//! moving [`Player`] explicitly, and the caller is responsible for advancing
//! the turn. [`Game`](crate::Game) wraps this in a safe session interface.

use crate::game::Player;
use crate::location::{Direction, Location, LocationList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Cell {
    /// The player whose stone occupies this cell, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
        }
    }
}

/// An 8x8 grid of [`Cell`]s.
///
/// `Board` is a plain `Copy` value: copying it copies all 64 cells, so a saved
/// board can never observe later changes to the board it was copied from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: two stones per player crossed in the center.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// A board with no stones on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    /// Overwrite a single cell, bypassing the rules. Intended for setting up positions.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Borrow the grid as rows of cells, top row first.
    pub fn rows(&self) -> &[[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        &self.cells
    }

    /// Iterate every location and its contents in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        (0..NUM_SPACES as u8)
            .filter_map(Location::from_index)
            .map(move |loc| (loc, self.get(loc)))
    }

    /// Count the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }

    /// The opponent stones `player` would capture along one direction from `origin`:
    /// a run of opponent stones closed off by one of `player`'s own.
    fn captures_along(&self, origin: Location, player: Player, dir: Direction) -> LocationList {
        let mut line = LocationList::default();

        for loc in origin.ray(dir) {
            match self.get(loc).owner() {
                Some(owner) if owner == player => return line,
                Some(_) => line.insert(loc),
                None => break,
            }
        }

        // Ran into an empty cell or the edge before closing the bracket.
        LocationList::default()
    }

    /// All stones that would be flipped if `player` moved at `loc`.
    /// Empty if `loc` is occupied or the move captures nothing.
    pub fn flips(&self, loc: Location, player: Player) -> LocationList {
        let mut flipped = LocationList::default();
        if !self.get(loc).is_empty() {
            return flipped;
        }

        for &dir in Direction::ALL.iter() {
            flipped.extend_from(self.captures_along(loc, player, dir));
        }
        flipped
    }

    /// Returns whether `player` may move at `loc`.
    #[inline]
    pub fn is_legal(&self, loc: Location, player: Player) -> bool {
        !self.flips(loc, player).is_empty()
    }

    /// Get the set of legal moves for `player`.
    pub fn legal_moves(&self, player: Player) -> LocationList {
        self.cells()
            .filter(|&(loc, cell)| cell.is_empty() && self.is_legal(loc, player))
            .map(|(loc, _)| loc)
            .collect()
    }

    /// Move for `player` at `loc`, flipping every bracketed run of opponent stones.
    /// Returns the flipped stones; if that is empty the move was illegal and the
    /// board is unchanged.
    pub fn capture(&mut self, loc: Location, player: Player) -> LocationList {
        let flipped = self.flips(loc, player);
        if flipped.is_empty() {
            return flipped;
        }

        let stone = Cell::from(player);
        self.set(loc, stone);
        for captured in flipped {
            self.set(captured, stone);
        }
        flipped
    }

    /// Move for `player` at `loc`. Returns false, leaving the board untouched,
    /// if the cell is occupied or nothing would be captured.
    #[inline]
    pub fn place(&mut self, loc: Location, player: Player) -> bool {
        !self.capture(loc, player).is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(|(_, cell)| cell.symbol()), f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },
    #[display(fmt = "unexpected character {:?} in board string", found)]
    InvalidCharacter { found: char },
}

/// Parse a board from 64 cell characters in row-major order, ignoring whitespace.
/// Empty cells are `.` or `-`; black stones `#`, `X` or `B`; white stones `O` or `W`.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut found = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch.to_ascii_uppercase() {
                '.' | '-' => Cell::Empty,
                '#' | 'X' | 'B' => Cell::Black,
                'O' | 'W' => Cell::White,
                _ => return Err(ParseBoardError::InvalidCharacter { found: ch }),
            };

            let loc = Location::from_index(found as u8);
            found += 1;
            if let Some(loc) = loc {
                board.set(loc, cell);
            }
        }

        if found != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.get(loc("D4")), Cell::White);
        assert_eq!(board.get(loc("E4")), Cell::Black);
        assert_eq!(board.get(loc("D5")), Cell::Black);
        assert_eq!(board.get(loc("E5")), Cell::White);
        assert_eq!(board.count(Cell::Empty), NUM_SPACES - 4);
    }

    #[test]
    fn starting_moves() {
        let moves = Board::new().legal_moves(Player::Black);
        assert_eq!(moves.to_string(), "[D3, C4, F5, E6]");

        let moves = Board::new().legal_moves(Player::White);
        assert_eq!(moves.to_string(), "[E3, F4, C5, D6]");
    }

    #[test]
    fn place_flips_bracketed_stone() {
        let mut board = Board::new();
        assert!(board.place(loc("D3"), Player::Black));
        assert_eq!(board.get(loc("D3")), Cell::Black);
        assert_eq!(board.get(loc("D4")), Cell::Black);
        assert_eq!(board.count(Cell::Black), 4);
        assert_eq!(board.count(Cell::White), 1);
    }

    #[test]
    fn place_rejects_without_capture() {
        let mut board = Board::new();
        let before = board;
        assert!(!board.place(loc("A1"), Player::Black));
        assert!(!board.place(loc("E3"), Player::Black));
        assert_eq!(board, before);
    }

    #[test]
    fn place_rejects_occupied() {
        let mut board = Board::new();
        let before = board;
        assert!(!board.place(loc("D4"), Player::Black));
        assert!(!board.place(loc("E4"), Player::Black));
        assert_eq!(board, before);
    }

    #[test]
    fn captures_in_several_directions_at_once() {
        let mut board: Board = "
            ........
            .#.#.#..
            ..OOO...
            .#O.O#..
            ..OOO...
            .#.#.#..
            ........
            ........"
            .parse()
            .unwrap();

        let flipped = board.capture(loc("D4"), Player::Black);
        assert_eq!(flipped.len(), 8);
        assert_eq!(board.count(Cell::White), 0);
        assert_eq!(board.get(loc("D4")), Cell::Black);
    }

    #[test]
    fn gap_breaks_the_bracket() {
        let mut board: Board = "
            #.O.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let before = board;

        assert!(!board.place(loc("D1"), Player::Black));
        assert_eq!(board, before);

        board.set(loc("B1"), Cell::White);
        assert!(board.place(loc("D1"), Player::Black));
        assert_eq!(board.count(Cell::Black), 4);
    }

    #[test]
    fn open_line_to_the_edge_is_not_a_capture() {
        let mut board: Board = "
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            .OOOOOO."
            .parse()
            .unwrap();

        assert!(!board.place(loc("A8"), Player::Black));
        assert!(!board.place(loc("H8"), Player::Black));
        board.set(loc("H8"), Cell::Black);
        assert_eq!(board.capture(loc("A8"), Player::Black).len(), 6);
        assert_eq!(board.count(Cell::Black), 8);
    }

    #[test]
    fn corners_never_scan_off_the_board() {
        let mut board = Board::new();
        for name in &["A1", "H1", "A8", "H8", "A4", "H5", "D1", "E8"] {
            assert!(!board.place(loc(name), Player::Black));
            assert!(!board.place(loc(name), Player::White));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "...".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 3 })
        );
        assert_eq!(
            "?".repeat(64).parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { found: '?' })
        );
        assert_eq!(
            ".".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 65 })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let board = Board::new();
        let printed = board.to_string();
        let cells: String = printed
            .lines()
            .skip(1)
            .flat_map(|line| line.split_whitespace().skip(1))
            .collect();
        assert_eq!(cells.parse::<Board>(), Ok(board));
    }
}
