use crate::draughts::Color;
use derive_more::Display;

/// Tracks the side to move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} to move", _0)]
pub struct Turn(Color);

impl Default for Turn {
    #[inline]
    fn default() -> Self {
        Turn(Color::White)
    }
}

impl Turn {
    /// Constructs [`Turn`] with a given side to move.
    #[inline]
    pub fn new(c: Color) -> Self {
        Turn(c)
    }

    /// The side to move.
    #[inline]
    pub fn color(&self) -> Color {
        self.0
    }

    /// The side waiting for its turn.
    #[inline]
    pub fn opposite(&self) -> Color {
        !self.0
    }

    /// Passes the turn to the opponent.
    #[inline]
    pub fn change(&mut self) {
        self.0 = !self.0;
    }
}
