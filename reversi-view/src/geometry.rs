//! Mapping between pixel coordinates on a drawn board and board locations.

use reversi_engine::{Location, EDGE_LENGTH};

/// The on-screen size of a square board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    side_length: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIDE_LENGTH)
    }
}

impl Geometry {
    pub const DEFAULT_SIDE_LENGTH: f64 = 560.0;

    pub fn new(side_length: f64) -> Self {
        Self { side_length }
    }

    #[inline]
    pub fn side_length(self) -> f64 {
        self.side_length
    }

    /// Width and height of one cell in pixels.
    #[inline]
    pub fn cell_size(self) -> f64 {
        self.side_length / EDGE_LENGTH as f64
    }

    /// The cell under pixel `(x, y)`, measured from the top-left corner.
    /// Returns None for points outside the board.
    pub fn cell_at(self, x: f64, y: f64) -> Option<Location> {
        let inside = |v: f64| v >= 0.0 && v < self.side_length;
        if !(inside(x) && inside(y)) {
            return None;
        }

        let row = (y / self.cell_size()).floor() as usize;
        let col = (x / self.cell_size()).floor() as usize;
        Location::from_coords(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_pixels_to_cells() {
        let geometry = Geometry::default();
        assert_eq!(geometry.cell_size(), 70.0);
        assert_eq!(geometry.cell_at(0.0, 0.0), Location::from_coords(0, 0));
        assert_eq!(geometry.cell_at(69.9, 0.0), Location::from_coords(0, 0));
        assert_eq!(geometry.cell_at(70.0, 0.0), Location::from_coords(0, 1));
        // x picks the column, y picks the row.
        assert_eq!(geometry.cell_at(245.0, 150.0), Location::from_coords(2, 3));
        assert_eq!(geometry.cell_at(559.0, 559.0), Location::from_coords(7, 7));
    }

    #[test]
    fn rejects_points_off_the_board() {
        let geometry = Geometry::new(400.0);
        assert_eq!(geometry.cell_at(400.0, 10.0), None);
        assert_eq!(geometry.cell_at(10.0, -0.5), None);
        assert_eq!(geometry.cell_at(f64::NAN, 10.0), None);
    }
}
