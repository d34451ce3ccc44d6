use serde_repr::{Deserialize_repr, Serialize_repr};

/// One cell of the 8x8 grid. The i8 values are the board's wire encoding:
/// empty 0, Dark 1, Light -1; anything else is rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Cell {
    Empty = 0,
    Dark = 1,
    Light = -1,
}

impl Cell {
    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The disc occupying this cell, if any.
    pub fn disc(self) -> Option<Disc> {
        match self {
            Cell::Dark => Some(Disc::Dark),
            Cell::Light => Some(Disc::Light),
            Cell::Empty => None,
        }
    }
}

/// A playable disc color: Dark is the human side, Light the automated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Dark,
    Light,
}

impl Disc {
    pub fn opp(self) -> Self {
        match self {
            Disc::Dark => Disc::Light,
            Disc::Light => Disc::Dark,
        }
    }

    /// The cell value this disc's pieces occupy.
    pub fn cell(self) -> Cell {
        match self {
            Disc::Dark => Cell::Dark,
            Disc::Light => Cell::Light,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Disc::Dark => "D",
            Disc::Light => "L",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_encoding() {
        assert_eq!(Cell::Empty.to_int(), 0);
        assert_eq!(Cell::Dark.to_int(), 1);
        assert_eq!(Cell::Light.to_int(), -1);
    }

    #[test]
    fn emptiness() {
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Dark.is_empty());
        assert!(!Cell::Light.is_empty());
    }

    #[test]
    fn occupying_disc() {
        assert_eq!(Cell::Dark.disc(), Some(Disc::Dark));
        assert_eq!(Cell::Light.disc(), Some(Disc::Light));
        assert_eq!(Cell::Empty.disc(), None);
    }

    #[test]
    fn disc_cell_round_trip() {
        for disc in [Disc::Dark, Disc::Light] {
            assert_eq!(disc.cell().disc(), Some(disc));
        }
    }

    #[test]
    fn opponent() {
        assert_eq!(Disc::Dark.opp(), Disc::Light);
        assert_eq!(Disc::Light.opp(), Disc::Dark);
    }

    #[test]
    fn letters() {
        assert_eq!(Disc::Dark.letter(), "D");
        assert_eq!(Disc::Light.letter(), "L");
    }

    #[test]
    fn serializes_as_ints() {
        let row = vec![Cell::Empty, Cell::Dark, Cell::Light];
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!([0, 1, -1]));

        let back: Vec<Cell> = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn rejects_unknown_encoding() {
        // The fixed board encoding has exactly three values; 5 is not a disc.
        assert!(serde_json::from_value::<Cell>(serde_json::json!(5)).is_err());
    }
}
