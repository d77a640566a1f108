use crate::options::Options;
use anyhow::Error as Anyhow;
use clap::Parser;
use tracing::instrument;

/// Prints the board a match would start from.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Show {
    /// Match options in ron notation, e.g. `(turn: black)`.
    #[clap(short, long, default_value_t)]
    options: Options,

    /// Print the compact layout instead of the full board.
    #[clap(short, long)]
    compact: bool,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = self.options.game();

        if self.compact {
            println!("{:#}", game.board());
        } else {
            println!("{}", game);
        }

        Ok(())
    }
}
