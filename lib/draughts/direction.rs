use crate::draughts::Color;

/// One of the four diagonal directions on the board.
///
/// North points towards row `0`, west points towards column `0`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// Returns an iterator over all [`Direction`]s.
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        use Direction::*;
        [NorthWest, NorthEast, SouthWest, SouthEast].into_iter()
    }

    /// The direction pointed to by a pair of row and column deltas, if diagonal.
    #[inline]
    pub fn from_delta(rows: i8, columns: i8) -> Option<Self> {
        use Direction::*;
        if rows == 0 || rows.unsigned_abs() != columns.unsigned_abs() {
            return None;
        }

        match (rows.signum(), columns.signum()) {
            (-1, -1) => Some(NorthWest),
            (-1, 1) => Some(NorthEast),
            (1, -1) => Some(SouthWest),
            _ => Some(SouthEast),
        }
    }

    /// The row and column deltas of a single step in this direction.
    #[inline]
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Whether this direction advances towards the opponent of [`Color`].
    #[inline]
    pub fn is_forward(&self, c: Color) -> bool {
        self.delta().0 == c.forward()
    }
}
