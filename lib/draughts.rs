mod board;
mod color;
mod coordinate;
mod direction;
mod error;
mod game;
mod r#move;
mod piece;
mod turn;

pub use board::*;
pub use color::*;
pub use coordinate::*;
pub use direction::*;
pub use error::*;
pub use game::*;
pub use r#move::*;
pub use piece::*;
pub use turn::*;
