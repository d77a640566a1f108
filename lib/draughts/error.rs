use derive_more::{Display, Error};

/// The reason why a move request was rejected.
///
/// Exactly one reason is reported per request, the first one found in hop order.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum IllegalMove {
    #[display(fmt = "there is no piece to move")]
    EmptyOrigin,
    #[display(fmt = "the piece belongs to the opponent")]
    OppositePiece,
    #[display(fmt = "the target cell is not empty")]
    NotEmptyTarget,
    #[display(fmt = "the movement is not diagonal")]
    NotDiagonal,
    #[display(fmt = "a piece cannot jump over pieces of its own color")]
    ColleagueEating,
    #[display(fmt = "men cannot move backwards")]
    NotAdvanced,
    #[display(fmt = "men cannot move more than two cells")]
    TooMuchAdvanced,
    #[display(fmt = "men can only move two cells by capturing")]
    WithoutEating,
    #[display(fmt = "a single hop cannot capture more than one piece")]
    TooMuchEatings,
    #[display(fmt = "every intermediate hop must capture a piece")]
    TooMuchJumps,
}
