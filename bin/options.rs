use derive_more::{Display, Error, From};
use lib::draughts::{Board, Color, Game};
use lib::util::Random;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The reason why parsing match options failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse match options")]
pub struct ParseOptionsError(ron::de::SpannedError);

/// Configuration for a match of draughts.
#[derive(Debug, Display, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
pub struct Options {
    /// Seeds the forced capture penalty, otherwise drawn from system entropy.
    pub seed: Option<u64>,

    /// The starting layout, otherwise the standard one.
    pub layout: Option<Board>,

    /// The side that moves first.
    pub turn: Color,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            seed: None,
            layout: None,
            turn: Color::White,
        }
    }
}

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Options {
    /// Sets up a [`Game`] according to these options.
    pub fn game(&self) -> Game {
        let random = self.seed.map_or_else(Random::default, Random::seeded);
        let board = self.layout.clone().unwrap_or_else(Board::initial);
        Game::with_board(board, self.turn, random)
    }
}
