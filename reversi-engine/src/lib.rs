pub mod board;
pub mod cell;
pub mod engine;
pub mod error;
pub mod outcome;

/// Board coordinate as (row, col), 0-indexed from the top-left corner.
pub type Point = (u8, u8);

pub use board::{Board, SIZE};
pub use cell::{Cell, Disc};
pub use engine::{Engine, GameState, Stage};
pub use error::ReversiError;
pub use outcome::Outcome;
