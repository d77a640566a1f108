use crate::draughts::{Board, Color, Coordinate, IllegalMove, Kind, Piece, Turn};
use crate::util::Random;
use std::fmt;
use tracing::{debug, field::display, field::Empty, instrument, Span};

/// A change to the [`Board`] that can be undone.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Undo {
    Relocation(Coordinate, Coordinate),
    Capture(Coordinate, Piece),
}

/// Holds the state of a match of draughts.
///
/// Every [`Game::play`] either commits in full or leaves the board untouched.
#[derive(Debug)]
pub struct Game {
    board: Board,
    turn: Turn,
    random: Random,
}

/// A match from the starting layout with randomness seeded by system entropy.
impl Default for Game {
    fn default() -> Self {
        Game::new(Random::default())
    }
}

impl Game {
    /// Constructs a [`Game`] in the starting layout, white to move.
    pub fn new(random: Random) -> Self {
        Game::with_board(Board::initial(), Color::White, random)
    }

    /// Constructs a [`Game`] from an arbitrary [`Board`] and side to move.
    pub fn with_board(board: Board, turn: Color, random: Random) -> Self {
        Game {
            board,
            turn: Turn::new(turn),
            random,
        }
    }

    /// Restores the starting layout, white to move.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.turn = Turn::default();
    }

    /// The current [`Board`].
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Piece`] on a [`Coordinate`], if any.
    #[inline]
    pub fn piece(&self, c: Coordinate) -> Option<Piece> {
        self.board.piece(c)
    }

    /// The [`Color`] of the piece on a [`Coordinate`], if any.
    #[inline]
    pub fn color(&self, c: Coordinate) -> Option<Color> {
        self.board.color(c)
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn.color()
    }

    /// The number of rows and columns of the board.
    #[inline]
    pub fn dimension(&self) -> i8 {
        Coordinate::DIMENSION
    }

    /// Plays a move through the given coordinates if legal, otherwise returns the reason why not.
    ///
    /// A move that captures nothing while other pieces of the same side could
    /// have captured costs the mover one of those pieces, picked at random.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two coordinates are given.
    #[instrument(level = "debug", skip(self), err,
        fields(turn = %self.turn.color(), captures = Empty, penalty = Empty))]
    pub fn play(&mut self, coordinates: &[Coordinate]) -> Result<(), IllegalMove> {
        assert!(coordinates.len() >= 2, "a move needs at least two coordinates");

        let mut undo = Vec::with_capacity(2 * coordinates.len());
        let captures = match self.apply(coordinates, &mut undo) {
            Ok(captures) => captures,
            Err(e) => {
                self.rollback(undo);
                return Err(e);
            }
        };

        Span::current().record("captures", captures);
        debug!(captures, "committed");

        let whither = coordinates[coordinates.len() - 1];
        self.promote(whither);

        if captures == 0 {
            if let Some(c) = self.penalize(whither) {
                Span::current().record("penalty", display(c));
            }
        }

        self.turn.change();
        Ok(())
    }

    /// Whether the side to move has no legal hop left.
    pub fn is_blocked(&self) -> bool {
        self.board.by_color(self.turn.color()).all(|whence| {
            (1..=Kind::MAN_REACH)
                .flat_map(|level| whence.diagonals_at(level))
                .all(|whither| self.check_hop(whence, whither).is_err())
        })
    }

    /// Forfeits the match for the side to move, removing all of its pieces.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn.color()))]
    pub fn cancel(&mut self) {
        let forfeited: Vec<_> = self.board.by_color(self.turn.color()).collect();
        for c in forfeited {
            self.board.remove(c);
        }

        self.turn.change();
    }

    /// Validates a single hop of the side to move.
    fn check_hop(&self, whence: Coordinate, whither: Coordinate) -> Result<(), IllegalMove> {
        let piece = self.board[whence].ok_or(IllegalMove::EmptyOrigin)?;

        if piece.color() == self.turn.opposite() {
            return Err(IllegalMove::OppositePiece);
        }

        if !self.board.is_empty(whither) {
            return Err(IllegalMove::NotEmptyTarget);
        }

        piece.check_hop(&self.board.between(whence, whither), whence, whither)
    }

    /// Applies hops until one fails, recording every change made along the way.
    ///
    /// Returns the number of pieces captured.
    fn apply(
        &mut self,
        coordinates: &[Coordinate],
        undo: &mut Vec<Undo>,
    ) -> Result<usize, IllegalMove> {
        let mut captures = 0;

        for hop in coordinates.windows(2) {
            let (whence, whither) = (hop[0], hop[1]);
            self.check_hop(whence, whither)?;

            let captured = whence
                .between_diagonal(whither)
                .into_iter()
                .find(|&c| !self.board.is_empty(c));

            if let Some(c) = captured {
                undo.push(Undo::Capture(c, self.board.remove(c)));
                captures += 1;
            }

            self.board.relocate(whence, whither);
            undo.push(Undo::Relocation(whence, whither));
            debug!(%whence, %whither, captured = captured.map(display), "applied hop");
        }

        if coordinates.len() > 2 && captures + 1 < coordinates.len() {
            return Err(IllegalMove::TooMuchJumps);
        }

        Ok(captures)
    }

    /// Reverts every recorded change, most recent first.
    fn rollback(&mut self, undo: Vec<Undo>) {
        for u in undo.into_iter().rev() {
            match u {
                Undo::Relocation(whence, whither) => {
                    self.board.relocate(whither, whence);
                    debug!(%whence, %whither, "rolled back hop");
                }

                Undo::Capture(c, p) => {
                    self.board.put(c, p);
                    debug!(coordinate = %c, piece = ?p, "restored capture");
                }
            }
        }
    }

    /// Promotes the man on `c` if it reached its limit.
    fn promote(&mut self, c: Coordinate) {
        if let Some(p @ Piece(_, Kind::Man)) = self.board[c] {
            if p.is_limit(c) {
                self.board.put(c, p.promote());
                debug!(coordinate = %c, "promotion");
            }
        }
    }

    /// Removes a random piece of the side to move that could have captured.
    ///
    /// The piece that just moved to `whither` is never removed.
    fn penalize(&mut self, whither: Coordinate) -> Option<Coordinate> {
        let mut candidates = self.board.capturers(self.turn.color());
        candidates.retain(|&c| c != whither);

        if candidates.is_empty() {
            return None;
        }

        let c = candidates[self.random.index(candidates.len())];
        self.board.remove(c);
        debug!(coordinate = %c, "forced capture penalty");
        Some(c)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.board, self.turn)
    }
}
