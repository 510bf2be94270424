//! Display coordinates for board positions.
//!
//! Coordinates are 1-based `(row, column)` pairs shown next to history
//! entries. They are presentation metadata only and play no part in win
//! detection or move legality.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-based (row, column) pair for a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

/// Lookup table mapping linear cell index 0..8 to display coordinates.
const COORDINATES: [Coordinate; 9] = [
    Coordinate { row: 1, col: 1 },
    Coordinate { row: 1, col: 2 },
    Coordinate { row: 1, col: 3 },
    Coordinate { row: 2, col: 1 },
    Coordinate { row: 2, col: 2 },
    Coordinate { row: 2, col: 3 },
    Coordinate { row: 3, col: 1 },
    Coordinate { row: 3, col: 2 },
    Coordinate { row: 3, col: 3 },
];

impl Coordinate {
    /// Placeholder carried by the initial history entry, which no move
    /// produced. Displays as `(0, 0)`.
    pub const PLACEHOLDER: Coordinate = Coordinate { row: 0, col: 0 };

    /// Create a coordinate, validating it lies on the 3x3 board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] if either component
    /// is outside 1..=3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if (1..=3).contains(&row) && (1..=3).contains(&col) {
            Ok(Coordinate { row, col })
        } else {
            Err(crate::Error::InvalidCoordinate { row, col })
        }
    }

    /// 1-based row, or 0 for the placeholder.
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based column, or 0 for the placeholder.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed lookup from linear cell index to display coordinate.
///
/// # Examples
///
/// ```
/// use noughts::tictactoe::coordinate_of;
///
/// assert_eq!(coordinate_of(0).to_string(), "(1, 1)");
/// assert_eq!(coordinate_of(4).to_string(), "(2, 2)");
/// ```
pub fn coordinate_of(pos: usize) -> Coordinate {
    COORDINATES[pos]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center() {
        assert_eq!(coordinate_of(0), Coordinate::new(1, 1).unwrap());
        assert_eq!(coordinate_of(4), Coordinate::new(2, 2).unwrap());
        assert_eq!(coordinate_of(8), Coordinate::new(3, 3).unwrap());
    }

    #[test]
    fn test_table_is_row_major() {
        for pos in 0..9 {
            let coord = coordinate_of(pos);
            assert_eq!(coord.row(), pos / 3 + 1);
            assert_eq!(coord.col(), pos % 3 + 1);
        }
    }

    #[test]
    fn test_validation() {
        assert!(Coordinate::new(1, 3).is_ok());
        assert!(Coordinate::new(0, 1).is_err());
        assert!(Coordinate::new(1, 4).is_err());
    }

    #[test]
    fn test_placeholder_display() {
        assert_eq!(Coordinate::PLACEHOLDER.to_string(), "(0, 0)");
    }
}
