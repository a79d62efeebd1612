//! Code for working with [`Location`]s on the Reversi board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A location on the Reversi board, stored as a row-major index.
/// Always in range: every constructor checks its input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Into)]
pub struct Location(u8);

/// A set of locations on the board, which can be iterated in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct LocationList(u64);

/// A unit step between neighbouring cells, as (row delta, column delta).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const NORTH: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(-1, 1);
    pub const EAST: Self = Self::new(0, 1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH: Self = Self::new(1, 0);
    pub const SOUTH_WEST: Self = Self::new(1, -1);
    pub const WEST: Self = Self::new(0, -1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// All eight compass directions, clockwise from north.
    /// Captures are scanned in this order.
    pub const ALL: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

impl Location {
    /// Convert from a row-major square index (0 is A1, 63 is H8).
    /// Returns None if the index is off the board.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SPACES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Convert from row and column coordinates.
    /// Returns None if the coordinates are not on the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self((row * EDGE_LENGTH + col) as u8))
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// The neighbouring location one step in `dir`, or None off the edge.
    pub fn offset(self, dir: Direction) -> Option<Self> {
        let row = self.row() as isize + dir.d_row as isize;
        let col = self.col() as isize + dir.d_col as isize;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Iterate the locations in a straight line from here towards the edge.
    /// Does not include `self`, so it yields at most 7 locations.
    pub fn ray(self, dir: Direction) -> Ray {
        Ray {
            next: self.offset(dir),
            dir,
        }
    }

    #[inline]
    fn mask(self) -> u64 {
        1 << self.0
    }
}

/// Convert this [`Location`] into string notation ("D3" is row 2, column 3).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("D3", "h8").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

/// A straight line of locations, see [`Location::ray`].
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    next: Option<Location>,
    dir: Direction,
}

impl Iterator for Ray {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let current = self.next?;
        self.next = current.offset(self.dir);
        Some(current)
    }
}

impl LocationList {
    /// Returns whether this list has no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & loc.mask() != 0
    }

    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= loc.mask();
    }

    /// Add every location in `other` to this list.
    #[inline]
    pub fn extend_from(&mut self, other: LocationList) {
        self.0 |= other.0;
    }
}

impl std::iter::FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::default();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationList {}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
