//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Format 64 characters into a grid labelled with columns A-H and rows 1-8.
/// `pieces` must yield exactly 64 items.
pub fn format_grid<T: IntoIterator<Item = char>>(pieces: T, f: &mut Formatter) -> fmt::Result {
    let mut pieces = pieces.into_iter();
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{} ", pieces.next().ok_or(fmt::Error)?)?;
        }
    }

    match pieces.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
