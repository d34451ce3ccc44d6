use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cell::Disc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    DarkWins,
    LightWins,
    Draw,
}

impl Outcome {
    /// Evaluate a board. The game ends only on a full board; the winner is
    /// whoever holds the strict majority of the 64 cells.
    pub fn of(board: &Board) -> Self {
        if !board.is_full() {
            return Outcome::Ongoing;
        }
        match board.count(Disc::Dark).cmp(&board.count(Disc::Light)) {
            Ordering::Greater => Outcome::DarkWins,
            Ordering::Less => Outcome::LightWins,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::DarkWins => write!(f, "dark_wins"),
            Outcome::LightWins => write!(f, "light_wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(Outcome::Ongoing),
            "dark_wins" => Ok(Outcome::DarkWins),
            "light_wins" => Ok(Outcome::LightWins),
            "draw" => Ok(Outcome::Draw),
            _ => Err(format!("unknown outcome: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    /// Full board with the first `dark` cells Dark (row-major) and the rest Light.
    fn full_board(dark: usize) -> Board {
        let rows: Vec<Vec<Cell>> = (0..8)
            .map(|row| {
                (0..8)
                    .map(|col| {
                        if row * 8 + col < dark {
                            Cell::Dark
                        } else {
                            Cell::Light
                        }
                    })
                    .collect()
            })
            .collect();
        Board::new(rows)
    }

    #[test]
    fn ongoing_below_full() {
        let board = Board::initial();
        assert_eq!(Outcome::of(&board), Outcome::Ongoing);
        assert!(!Outcome::of(&board).is_decided());
    }

    #[test]
    fn ongoing_one_short_of_full() {
        let mut rows = vec![vec![Cell::Dark; 8]; 8];
        rows[7][7] = Cell::Empty;
        assert_eq!(Outcome::of(&Board::new(rows)), Outcome::Ongoing);
    }

    #[test]
    fn dark_majority_wins() {
        assert_eq!(Outcome::of(&full_board(40)), Outcome::DarkWins);
        assert_eq!(Outcome::of(&full_board(33)), Outcome::DarkWins);
    }

    #[test]
    fn light_majority_wins() {
        assert_eq!(Outcome::of(&full_board(24)), Outcome::LightWins);
        assert_eq!(Outcome::of(&full_board(31)), Outcome::LightWins);
    }

    #[test]
    fn equal_split_draws() {
        assert_eq!(Outcome::of(&full_board(32)), Outcome::Draw);
    }

    #[test]
    fn decided_outcomes() {
        assert!(Outcome::DarkWins.is_decided());
        assert!(Outcome::LightWins.is_decided());
        assert!(Outcome::Draw.is_decided());
    }

    #[test]
    fn display_round_trip() {
        for outcome in [
            Outcome::Ongoing,
            Outcome::DarkWins,
            Outcome::LightWins,
            Outcome::Draw,
        ] {
            assert_eq!(outcome.to_string().parse::<Outcome>(), Ok(outcome));
        }
    }

    #[test]
    fn json_shape() {
        assert_eq!(
            serde_json::to_value(Outcome::DarkWins).unwrap(),
            serde_json::json!("dark_wins")
        );
    }
}
