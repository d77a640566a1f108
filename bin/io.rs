use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use std::str::FromStr;
use tracing::instrument;

/// A line oriented io interface that speaks in parsed messages.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a line and parse it as a `T`.
    ///
    /// Lines that fail to parse are reported as [`ErrorKind::InvalidData`],
    /// the end of the input as [`ErrorKind::UnexpectedEof`].
    #[instrument(level = "trace", skip(self), err)]
    pub fn recv<T>(&mut self) -> io::Result<T>
    where
        T: FromStr,
        T::Err: Error + Send + Sync + 'static,
    {
        let line = self.reader.next().ok_or(ErrorKind::UnexpectedEof)??;
        line.parse().map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
    }

    /// Send a message followed by a line break.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
