use crate::draughts::Direction;
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::str::FromStr;

/// A cell of the board, addressed by row and column.
///
/// Row `0` is the top of the board as printed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", row, column)]
pub struct Coordinate {
    #[cfg_attr(test, strategy(0..Coordinate::DIMENSION))]
    row: i8,
    #[cfg_attr(test, strategy(0..Coordinate::DIMENSION))]
    column: i8,
}

impl Coordinate {
    /// The number of rows and columns of the board.
    pub const DIMENSION: i8 = 8;

    /// Constructs [`Coordinate`] from a pair of row and column.
    ///
    /// # Panics
    ///
    /// Panics if either is outside of the board.
    #[inline]
    pub fn new(row: i8, column: i8) -> Self {
        Self::try_new(row, column)
            .unwrap_or_else(|| panic!("coordinate `({row}, {column})` is outside of the board"))
    }

    /// Constructs [`Coordinate`] from a pair of row and column, if inside the board.
    #[inline]
    pub fn try_new(row: i8, column: i8) -> Option<Self> {
        let range = 0..Self::DIMENSION;
        if range.contains(&row) && range.contains(&column) {
            Some(Coordinate { row, column })
        } else {
            None
        }
    }

    /// Returns an iterator over all coordinates, row by row.
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::DIMENSION)
            .flat_map(|row| (0..Self::DIMENSION).map(move |column| Coordinate { row, column }))
    }

    /// This coordinate's row.
    #[inline]
    pub fn row(&self) -> i8 {
        self.row
    }

    /// This coordinate's column.
    #[inline]
    pub fn column(&self) -> i8 {
        self.column
    }

    /// This coordinate's index in the range (0..64).
    #[inline]
    pub fn index(&self) -> usize {
        (self.row * Self::DIMENSION + self.column) as usize
    }

    /// Whether this is a dark cell, the only ones pieces ever stand on in the starting layout.
    #[inline]
    pub fn is_dark(&self) -> bool {
        (self.row + self.column) % 2 == 1
    }

    /// Whether this coordinate lies on the top row.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.row == 0
    }

    /// Whether this coordinate lies on the bottom row.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.row == Self::DIMENSION - 1
    }

    /// Whether `other` lies on one of the diagonals that cross this coordinate.
    #[inline]
    pub fn is_on_diagonal(&self, other: Coordinate) -> bool {
        self.direction(other).is_some()
    }

    /// The number of diagonal steps to `other`, if on the same diagonal.
    #[inline]
    pub fn diagonal_distance(&self, other: Coordinate) -> Option<i8> {
        self.direction(other).map(|_| (other.row - self.row).abs())
    }

    /// The [`Direction`] from this coordinate towards `other`, if on the same diagonal.
    #[inline]
    pub fn direction(&self, other: Coordinate) -> Option<Direction> {
        Direction::from_delta(other.row - self.row, other.column - self.column)
    }

    /// The coordinate a number of steps away in a [`Direction`], if inside the board.
    #[inline]
    pub fn shift(&self, d: Direction, steps: i8) -> Option<Self> {
        let (r, c) = d.delta();
        let row = r.checked_mul(steps)?.checked_add(self.row)?;
        let column = c.checked_mul(steps)?.checked_add(self.column)?;
        Self::try_new(row, column)
    }

    /// The ordered coordinates strictly between this one and `other`.
    ///
    /// Empty if they are adjacent or not on the same diagonal.
    pub fn between_diagonal(&self, other: Coordinate) -> ArrayVec<Self, 6> {
        match (self.direction(other), self.diagonal_distance(other)) {
            (Some(d), Some(n)) => (1..n).filter_map(|i| self.shift(d, i)).collect(),
            _ => ArrayVec::new(),
        }
    }

    /// The coordinates reachable by moving `level` steps in each [`Direction`].
    pub fn diagonals_at(&self, level: i8) -> ArrayVec<Self, 4> {
        Direction::iter()
            .filter_map(|d| self.shift(d, level))
            .collect()
    }

    /// The coordinate right after `other` on the ray that starts here and crosses `other`.
    ///
    /// [`None`] if not on the same diagonal or if the ray leaves the board.
    #[inline]
    pub fn next_along(&self, other: Coordinate) -> Option<Self> {
        other.shift(self.direction(other)?, 1)
    }
}

/// The reason why parsing [`Coordinate`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse coordinate; {}")]
pub enum ParseCoordinateError {
    #[display(fmt = "expected two digits")]
    InvalidLength,
    #[display(fmt = "invalid row")]
    InvalidRow,
    #[display(fmt = "invalid column")]
    InvalidColumn,
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseCoordinateError::*;

        let mut digits = s.chars().map(|c| c.to_digit(10));

        let (row, column) = match (digits.next(), digits.next(), digits.next()) {
            (Some(r), Some(c), None) => (r, c),
            _ => return Err(InvalidLength),
        };

        let valid = |d: Option<u32>| d.filter(|&d| d < Self::DIMENSION as u32);
        let row = valid(row).ok_or(InvalidRow)?;
        let column = valid(column).ok_or(InvalidColumn)?;

        Ok(Coordinate::new(row as i8, column as i8))
    }
}
