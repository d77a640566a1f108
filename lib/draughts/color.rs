use crate::draughts::Coordinate;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;

/// The color of a draughts [`Piece`][`crate::draughts::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The number of rows filled with men of each color in the starting layout.
    pub const STARTING_ROWS: i8 = 3;

    /// The [`Color`] of the man standing on a [`Coordinate`] in the starting layout, if any.
    ///
    /// Men stand on the dark cells, black on the top rows and white on the bottom rows.
    #[inline]
    pub fn initial(c: Coordinate) -> Option<Self> {
        if !c.is_dark() {
            None
        } else if c.row() < Self::STARTING_ROWS {
            Some(Color::Black)
        } else if c.row() >= Coordinate::DIMENSION - Self::STARTING_ROWS {
            Some(Color::White)
        } else {
            None
        }
    }

    /// The row delta of a step towards the opponent's starting edge.
    #[inline]
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[proptest]
    fn opposite_colors_advance_in_opposite_directions(c: Color) {
        assert_eq!(c.forward(), -(!c).forward());
    }

    #[proptest]
    fn only_dark_cells_hold_pieces_initially(c: Coordinate) {
        assert!(c.is_dark() || Color::initial(c).is_none());
    }

    #[test]
    fn each_color_starts_with_twelve_men() {
        for c in [Color::White, Color::Black] {
            let men = Coordinate::iter().filter(|&x| Color::initial(x) == Some(c));
            assert_eq!(men.count(), 12);
        }
    }

    #[test]
    fn white_starts_at_the_bottom() {
        assert_eq!(Color::initial(Coordinate::new(7, 0)), Some(Color::White));
        assert_eq!(Color::initial(Coordinate::new(0, 1)), Some(Color::Black));
        assert_eq!(Color::initial(Coordinate::new(4, 1)), None);
    }
}
