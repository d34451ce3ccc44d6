use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReversiError {
    OutOfTurn,
    Occupied,
    NoCapture,
    NotOnBoard,
    GameOver,
}

impl fmt::Display for ReversiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReversiError::OutOfTurn => write!(f, "out of turn"),
            ReversiError::Occupied => write!(f, "occupied"),
            ReversiError::NoCapture => write!(f, "no capture"),
            ReversiError::NotOnBoard => write!(f, "not on board"),
            ReversiError::GameOver => write!(f, "game over"),
        }
    }
}

impl std::error::Error for ReversiError {}
