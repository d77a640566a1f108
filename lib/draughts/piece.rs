use crate::draughts::{Board, Color, Coordinate, Direction, IllegalMove};

/// Denotes the kind of a draughts [`Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Kind {
    /// Moves a single step forward and captures by jumping an adjacent piece.
    Man,
    /// Flies any distance along a clear diagonal, in every direction.
    King,
}

impl Kind {
    /// The farthest a man may land from where it stands.
    pub const MAN_REACH: i8 = 2;

    /// Validates a diagonal hop given the number of opposing pieces it jumps over.
    fn check_diagonal(
        &self,
        color: Color,
        captures: usize,
        whence: Coordinate,
        whither: Coordinate,
    ) -> Result<(), IllegalMove> {
        match self {
            Kind::Man => {
                let distance = (whither.row() - whence.row()) * color.forward();
                if distance <= 0 {
                    Err(IllegalMove::NotAdvanced)
                } else if distance > Self::MAN_REACH {
                    Err(IllegalMove::TooMuchAdvanced)
                } else if distance == Self::MAN_REACH && captures != 1 {
                    Err(IllegalMove::WithoutEating)
                } else {
                    Ok(())
                }
            }

            Kind::King if captures > 1 => Err(IllegalMove::TooMuchEatings),
            Kind::King => Ok(()),
        }
    }
}

/// A draughts [piece][`Kind`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Kind);

impl Piece {
    /// This piece's [`Color`].
    #[inline]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Kind`].
    #[inline]
    pub fn kind(&self) -> Kind {
        self.1
    }

    /// The single character code of this piece.
    ///
    /// Lowercase for men, uppercase for kings, `b` for white and `n` for black.
    #[inline]
    pub fn code(&self) -> char {
        match (self.color(), self.kind()) {
            (Color::White, Kind::Man) => 'b',
            (Color::Black, Kind::Man) => 'n',
            (Color::White, Kind::King) => 'B',
            (Color::Black, Kind::King) => 'N',
        }
    }

    /// The piece denoted by a single character code, if any.
    #[inline]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(Piece(Color::White, Kind::Man)),
            'n' => Some(Piece(Color::Black, Kind::Man)),
            'B' => Some(Piece(Color::White, Kind::King)),
            'N' => Some(Piece(Color::Black, Kind::King)),
            _ => None,
        }
    }

    /// Whether this piece reached the row that promotes it, the opponent's starting edge.
    #[inline]
    pub fn is_limit(&self, c: Coordinate) -> bool {
        match self.color() {
            Color::White => c.is_first(),
            Color::Black => c.is_last(),
        }
    }

    /// This piece promoted to a king.
    #[inline]
    pub fn promote(&self) -> Self {
        Piece(self.color(), Kind::King)
    }

    /// Validates a single hop from `whence` to `whither`, given the pieces in between.
    ///
    /// Only the movement of the piece is validated, the occupancy of `whither` is not.
    pub fn check_hop(
        &self,
        between: &[Piece],
        whence: Coordinate,
        whither: Coordinate,
    ) -> Result<(), IllegalMove> {
        if !whence.is_on_diagonal(whither) {
            return Err(IllegalMove::NotDiagonal);
        }

        if between.iter().any(|p| p.color() == self.color()) {
            return Err(IllegalMove::ColleagueEating);
        }

        let captures = between.len();
        self.kind().check_diagonal(self.color(), captures, whence, whither)
    }

    /// Whether this piece, standing on `whence`, has any capture available on the [`Board`].
    ///
    /// Each [`Direction`] is scanned outwards until it proves unusable, that is
    /// once it reaches the edge, a piece of the same color or an opposing piece
    /// with no empty cell right behind it.
    pub fn can_capture(&self, board: &Board, whence: Coordinate) -> bool {
        let reach = match self.kind() {
            Kind::Man => 1,
            Kind::King => Coordinate::DIMENSION - 1,
        };

        Direction::iter()
            .filter(|d| self.kind() == Kind::King || d.is_forward(self.color()))
            .any(|d| {
                for c in (1..=reach).map_while(|level| whence.shift(d, level)) {
                    match board[c] {
                        None => continue,
                        Some(p) if p.color() == self.color() => return false,
                        Some(_) => return whence.next_along(c).is_some_and(|n| board.is_empty(n)),
                    }
                }

                false
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn hop(p: Piece, b: &Board, whence: Coordinate, whither: Coordinate) -> Result<(), IllegalMove> {
        p.check_hop(&b.between(whence, whither), whence, whither)
    }

    #[proptest]
    fn piece_has_a_color(c: Color, k: Kind) {
        assert_eq!(Piece(c, k).color(), c);
    }

    #[proptest]
    fn piece_has_a_kind(c: Color, k: Kind) {
        assert_eq!(Piece(c, k).kind(), k);
    }

    #[proptest]
    fn piece_can_be_recovered_from_its_code(p: Piece) {
        assert_eq!(Piece::from_code(p.code()), Some(p));
    }

    #[proptest]
    fn promoted_piece_is_a_king_of_the_same_color(p: Piece) {
        assert_eq!(p.promote(), Piece(p.color(), Kind::King));
    }

    #[proptest]
    fn hop_must_be_diagonal(
        p: Piece,
        a: Coordinate,
        #[filter(!#a.is_on_diagonal(#b))] b: Coordinate,
    ) {
        assert_eq!(p.check_hop(&[], a, b), Err(IllegalMove::NotDiagonal));
    }

    #[proptest]
    fn hop_cannot_jump_over_pieces_of_the_same_color(p: Piece, k: Kind) {
        let (a, b) = match p.color() {
            Color::White => (Coordinate::new(5, 2), Coordinate::new(3, 4)),
            Color::Black => (Coordinate::new(2, 3), Coordinate::new(4, 5)),
        };

        let colleague = Piece(p.color(), k);
        assert_eq!(p.check_hop(&[colleague], a, b), Err(IllegalMove::ColleagueEating));
    }

    #[test]
    fn man_moves_one_step_forward() {
        let board = Board::default();
        let white = Piece(Color::White, Kind::Man);
        let black = Piece(Color::Black, Kind::Man);
        let c = Coordinate::new(4, 3);

        assert_eq!(hop(white, &board, c, Coordinate::new(3, 2)), Ok(()));
        assert_eq!(hop(white, &board, c, Coordinate::new(3, 4)), Ok(()));
        assert_eq!(hop(black, &board, c, Coordinate::new(5, 2)), Ok(()));
        assert_eq!(hop(black, &board, c, Coordinate::new(5, 4)), Ok(()));
    }

    #[test]
    fn man_cannot_move_backwards() {
        let board = Board::default();
        let white = Piece(Color::White, Kind::Man);
        let black = Piece(Color::Black, Kind::Man);
        let c = Coordinate::new(4, 3);

        assert_eq!(hop(white, &board, c, Coordinate::new(5, 2)), Err(IllegalMove::NotAdvanced));
        assert_eq!(hop(black, &board, c, Coordinate::new(3, 4)), Err(IllegalMove::NotAdvanced));
    }

    #[test]
    fn man_cannot_move_more_than_two_steps() {
        let board = Board::default();
        let white = Piece(Color::White, Kind::Man);
        let whence = Coordinate::new(5, 0);

        assert_eq!(
            hop(white, &board, whence, Coordinate::new(2, 3)),
            Err(IllegalMove::TooMuchAdvanced)
        );
    }

    #[test]
    fn man_cannot_capture_backwards() {
        let mut board = Board::default();
        let white = Piece(Color::White, Kind::Man);
        let black = Piece(Color::Black, Kind::Man);

        board.put(Coordinate::new(3, 2), black);
        assert_eq!(
            hop(white, &board, Coordinate::new(2, 3), Coordinate::new(4, 1)),
            Err(IllegalMove::NotAdvanced)
        );

        board.put(Coordinate::new(4, 3), white);
        assert_eq!(
            hop(black, &board, Coordinate::new(5, 4), Coordinate::new(3, 2)),
            Err(IllegalMove::NotAdvanced)
        );
    }

    #[test]
    fn man_moves_two_steps_only_by_capturing() {
        let mut board = Board::default();
        let white = Piece(Color::White, Kind::Man);
        let (whence, whither) = (Coordinate::new(4, 1), Coordinate::new(2, 3));

        assert_eq!(hop(white, &board, whence, whither), Err(IllegalMove::WithoutEating));

        board.put(Coordinate::new(3, 2), Piece(Color::Black, Kind::Man));
        assert_eq!(hop(white, &board, whence, whither), Ok(()));
    }

    #[test]
    fn king_flies_in_every_direction() {
        let board = Board::default();
        let king = Piece(Color::Black, Kind::King);
        let whence = Coordinate::new(3, 3);

        for d in Direction::iter() {
            for whither in (1..8).map_while(|n| whence.shift(d, n)) {
                assert_eq!(hop(king, &board, whence, whither), Ok(()));
            }
        }
    }

    #[test]
    fn king_captures_a_single_piece_per_hop() {
        let mut board = Board::default();
        let king = Piece(Color::White, Kind::King);
        let (whence, whither) = (Coordinate::new(7, 0), Coordinate::new(2, 5));

        board.put(Coordinate::new(5, 2), Piece(Color::Black, Kind::Man));
        assert_eq!(hop(king, &board, whence, whither), Ok(()));

        board.put(Coordinate::new(4, 3), Piece(Color::Black, Kind::King));
        assert_eq!(hop(king, &board, whence, whither), Err(IllegalMove::TooMuchEatings));
    }

    #[test]
    fn man_can_capture_forward_only() {
        let mut board = Board::default();
        let man = Piece(Color::White, Kind::Man);
        let whence = Coordinate::new(4, 3);
        board.put(whence, man);

        board.put(Coordinate::new(5, 4), Piece(Color::Black, Kind::Man));
        assert!(!man.can_capture(&board, whence));

        board.put(Coordinate::new(3, 2), Piece(Color::Black, Kind::Man));
        assert!(man.can_capture(&board, whence));

        board.put(Coordinate::new(2, 1), Piece(Color::Black, Kind::Man));
        assert!(!man.can_capture(&board, whence));
    }

    #[test]
    fn man_cannot_capture_across_the_edge() {
        let mut board = Board::default();
        let man = Piece(Color::White, Kind::Man);
        let whence = Coordinate::new(3, 6);
        board.put(whence, man);
        board.put(Coordinate::new(2, 7), Piece(Color::Black, Kind::Man));

        assert!(!man.can_capture(&board, whence));
    }

    #[test]
    fn king_can_capture_from_afar() {
        let mut board = Board::default();
        let king = Piece(Color::White, Kind::King);
        let whence = Coordinate::new(0, 1);
        board.put(whence, king);
        board.put(Coordinate::new(4, 5), Piece(Color::Black, Kind::Man));

        assert!(king.can_capture(&board, whence));

        board.put(Coordinate::new(5, 6), Piece(Color::Black, Kind::Man));
        assert!(!king.can_capture(&board, whence));
    }

    #[test]
    fn king_cannot_capture_behind_its_colleagues() {
        let mut board = Board::default();
        let king = Piece(Color::Black, Kind::King);
        let whence = Coordinate::new(0, 1);
        board.put(whence, king);
        board.put(Coordinate::new(2, 3), Piece(Color::Black, Kind::Man));
        board.put(Coordinate::new(3, 4), Piece(Color::White, Kind::Man));

        assert!(!king.can_capture(&board, whence));
    }

    #[proptest]
    fn lonely_piece_cannot_capture(p: Piece, c: Coordinate) {
        let mut board = Board::default();
        board.put(c, p);
        assert!(!p.can_capture(&board, c));
    }
}
