use crate::draughts::{Coordinate, ParseCoordinateError};
use derive_more::{Deref, Display, Error, From};
use std::{fmt, str::FromStr};

/// A move request, the ordered [`Coordinate`]s a piece hops through.
///
/// The first coordinate is where the piece stands, every other one is the
/// landing cell of a hop.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deref)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Move(
    #[cfg_attr(test, strategy(proptest::collection::vec(proptest::arbitrary::any::<Coordinate>(), 2..6)))]
    Vec<Coordinate>,
);

impl Move {
    /// The minimum number of coordinates in a move.
    pub const MIN_COORDINATES: usize = 2;

    /// Where the piece stands.
    #[inline]
    pub fn whence(&self) -> Coordinate {
        self.0[0]
    }

    /// Where the piece lands after the last hop.
    #[inline]
    pub fn whither(&self) -> Coordinate {
        self.0[self.0.len() - 1]
    }

    /// The number of hops.
    #[inline]
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }

            fmt::Display::fmt(c, f)?;
        }

        Ok(())
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse move; {}")]
pub enum ParseMoveError {
    #[display(fmt = "expected at least two coordinates separated by `.`")]
    #[from(ignore)]
    TooFewCoordinates,
    #[display(fmt = "invalid coordinate")]
    InvalidCoordinate(ParseCoordinateError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coordinates = s
            .split('.')
            .map(|c| c.trim().parse())
            .collect::<Result<Vec<_>, _>>()?;

        if coordinates.len() < Self::MIN_COORDINATES {
            return Err(ParseMoveError::TooFewCoordinates);
        }

        Ok(Move(coordinates))
    }
}
