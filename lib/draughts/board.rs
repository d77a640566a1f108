use crate::draughts::{Color, Coordinate, Kind, Piece};
use arrayvec::ArrayVec;
use derive_more::{DebugCustom, Display, Error};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The draughts board, a fixed grid of cells that hold at most one [`Piece`] each.
///
/// This type does not validate whether the layout it holds is reachable
/// according to the rules of the game.
#[derive(DebugCustom, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board({:#})", self)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

/// The empty board.
impl Default for Board {
    #[inline]
    fn default() -> Self {
        Board { cells: [None; 64] }
    }
}

// We provide a custom implementation of Arbitrary rather than deriving,
// proptest has no strategy for arrays this large.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, option::weighted, prelude::*};

        vec(weighted(0.25, any::<Piece>()), 64)
            .prop_map(|v| {
                let mut board = Board::default();
                board.cells.iter_mut().zip(v).for_each(|(c, p)| *c = p);
                board
            })
            .boxed()
    }
}

impl Board {
    /// The standard starting layout.
    pub fn initial() -> Self {
        let mut board = Board::default();

        for c in Coordinate::iter() {
            if let Some(color) = Color::initial(c) {
                board.put(c, Piece(color, Kind::Man));
            }
        }

        board
    }

    /// The [`Piece`] on a [`Coordinate`], if any.
    #[inline]
    pub fn piece(&self, c: Coordinate) -> Option<Piece> {
        self.cells[c.index()]
    }

    /// The [`Color`] of the piece on a [`Coordinate`], if any.
    #[inline]
    pub fn color(&self, c: Coordinate) -> Option<Color> {
        self.piece(c).map(|p| p.color())
    }

    /// Whether there is no piece on a [`Coordinate`].
    #[inline]
    pub fn is_empty(&self, c: Coordinate) -> bool {
        self.piece(c).is_none()
    }

    /// Places a [`Piece`] on a [`Coordinate`], replacing whatever was there.
    #[inline]
    pub fn put(&mut self, c: Coordinate, p: Piece) {
        self.cells[c.index()] = Some(p);
    }

    /// Takes the [`Piece`] away from a [`Coordinate`].
    ///
    /// # Panics
    ///
    /// Panics if the cell is empty.
    #[inline]
    pub fn remove(&mut self, c: Coordinate) -> Piece {
        match self.cells[c.index()].take() {
            Some(p) => p,
            None => panic!("expected a piece on `{c}`"),
        }
    }

    /// Moves the [`Piece`] on `whence` to `whither`.
    ///
    /// # Panics
    ///
    /// Panics if `whence` is empty.
    #[inline]
    pub fn relocate(&mut self, whence: Coordinate, whither: Coordinate) {
        let p = self.remove(whence);
        self.put(whither, p);
    }

    /// An iterator over all pieces on the board.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Coordinate)> + '_ {
        Coordinate::iter().filter_map(|c| Some((self.piece(c)?, c)))
    }

    /// [`Coordinate`]s occupied by a [`Color`].
    #[inline]
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter()
            .filter(move |(p, _)| p.color() == color)
            .map(|(_, c)| c)
    }

    /// The pieces strictly between two coordinates, in order.
    ///
    /// Empty if the coordinates are not on the same diagonal.
    pub fn between(&self, whence: Coordinate, whither: Coordinate) -> ArrayVec<Piece, 6> {
        whence
            .between_diagonal(whither)
            .into_iter()
            .filter_map(|c| self.piece(c))
            .collect()
    }

    /// [`Coordinate`]s occupied by pieces of a [`Color`] that have a capture available.
    pub fn capturers(&self, color: Color) -> Vec<Coordinate> {
        self.iter()
            .filter(|(p, c)| p.color() == color && p.can_capture(self, *c))
            .map(|(_, c)| c)
            .collect()
    }
}

/// Retrieves the [`Piece`] at a given [`Coordinate`], if any.
impl Index<Coordinate> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, c: Coordinate) -> &Self::Output {
        &self.cells[c.index()]
    }
}

impl fmt::Display for Board {
    /// Prints the board with row and column headers, row `0` at the top.
    ///
    /// The alternate form prints the compact layout instead, rows separated by `/`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..Coordinate::DIMENSION)
            .map(|r| (r, (0..Coordinate::DIMENSION).map(move |c| Coordinate::new(r, c))));

        if f.alternate() {
            for (r, row) in rows {
                if r > 0 {
                    f.write_char('/')?;
                }

                for c in row {
                    f.write_char(self.piece(c).map_or(' ', |p| p.code()))?;
                }
            }

            return Ok(());
        }

        let header = |f: &mut fmt::Formatter<'_>| {
            f.write_str("  ")?;
            for c in 0..Coordinate::DIMENSION {
                write!(f, "{c}")?;
            }

            writeln!(f)
        };

        header(f)?;
        for (r, row) in rows {
            write!(f, " {r}")?;
            for c in row {
                f.write_char(self.piece(c).map_or(' ', |p| p.code()))?;
            }

            writeln!(f, "{r}")?;
        }

        header(f)
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse board; {}")]
pub enum ParseBoardError {
    #[display(fmt = "expected 8 rows separated by `/`")]
    InvalidRowCount,
    #[display(fmt = "expected 8 cells in row {}", _0)]
    InvalidRowLength(#[error(not(source))] usize),
    #[display(fmt = "invalid piece code `{}`", _0)]
    InvalidPiece(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseBoardError::*;

        let rows: Vec<_> = s.split('/').collect();
        if rows.len() != Coordinate::DIMENSION as usize {
            return Err(InvalidRowCount);
        }

        let mut board = Board::default();
        for (r, row) in rows.into_iter().enumerate() {
            if row.chars().count() != Coordinate::DIMENSION as usize {
                return Err(InvalidRowLength(r));
            }

            for (c, code) in row.chars().enumerate() {
                let coordinate = Coordinate::new(r as i8, c as i8);
                match code {
                    ' ' => {}
                    code => board.put(coordinate, Piece::from_code(code).ok_or(InvalidPiece(code))?),
                }
            }
        }

        Ok(board)
    }
}

/// Serializes the board in its compact layout.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format!("{self:#}"))
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}
