use crate::{io::Io, options::Options};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::draughts::{Game, Move, ParseMoveError};
use std::io::{stdin, stdout, ErrorKind, Read, Write};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Plays a match of draughts between two players sharing the terminal.
///
/// Moves are read from the standard input, one per line, as coordinates
/// separated by dots, e.g. `52.43`. Entering `cancel` forfeits the match.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Match options in ron notation, e.g. `(seed: Some(7), turn: black)`.
    #[clap(short, long, default_value_t)]
    options: Options,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout(), stdin());
        Session::new(self.options.game()).run(&mut io)
    }
}

/// A line of input from the player.
#[derive(Debug, Clone, Eq, PartialEq)]
enum Command {
    /// Play a move.
    Play(Move),
    /// Forfeit the match.
    Cancel,
    /// Nothing was entered.
    Wait,
}

impl FromStr for Command {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Command::Wait),
            "cancel" => Ok(Command::Cancel),
            s => Ok(Command::Play(s.parse()?)),
        }
    }
}

struct Session {
    game: Game,
}

impl Session {
    fn new(game: Game) -> Self {
        Session { game }
    }

    fn run<W: Write, R: Read>(&mut self, io: &mut Io<W, R>) -> Result<(), Anyhow> {
        loop {
            io.send(&self.game)?;
            io.flush()?;

            let turn = self.game.turn();
            if self.game.is_blocked() {
                info!(winner = %(!turn), "{turn} is blocked");
                io.send(format_args!("{turn} is blocked, {} wins", !turn))?;
                break;
            }

            match io.recv() {
                Ok(Command::Wait) => continue,

                Ok(Command::Cancel) => {
                    self.game.cancel();
                    info!(winner = %(!turn), "{turn} forfeits");
                    io.send(&self.game)?;
                    io.send(format_args!("{turn} forfeits, {} wins", !turn))?;
                    break;
                }

                Ok(Command::Play(m)) => self.play(io, &m)?,

                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("{}", e);
                    io.send(format_args!("invalid move; {e}"))?;
                }

                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(io.flush()?)
    }

    #[instrument(level = "debug", skip(self, io), err,
        fields(whence = %m.whence(), whither = %m.whither(), hops = m.hops()))]
    fn play<W: Write, R: Read>(&mut self, io: &mut Io<W, R>, m: &Move) -> Result<(), Anyhow> {
        if let Err(e) = self.game.play(m) {
            warn!("{}", e);
            io.send(format_args!("illegal move `{m}`; {e}"))?;
        }

        Ok(())
    }
}
