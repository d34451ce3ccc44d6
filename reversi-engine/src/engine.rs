use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::cell::{Cell, Disc};
use crate::error::ReversiError;
use crate::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    DarkToMove,
    LightToMove,
    Over,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::DarkToMove | Stage::LightToMove)
    }

    /// The disc expected to move in this stage, if any.
    pub fn mover(&self) -> Option<Disc> {
        match self {
            Stage::DarkToMove => Some(Disc::Dark),
            Stage::LightToMove => Some(Disc::Light),
            Stage::Over => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::DarkToMove => write!(f, "dark_to_move"),
            Stage::LightToMove => write!(f, "light_to_move"),
            Stage::Over => write!(f, "over"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark_to_move" => Ok(Stage::DarkToMove),
            "light_to_move" => Ok(Stage::LightToMove),
            "over" => Ok(Stage::Over),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// Snapshot of the engine for a rendering host.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Cell>,
    pub stage: Stage,
    pub outcome: Outcome,
}

/// Turn controller owning the single board.
///
/// Dark is the externally-driven (human) side, Light the automated one.
/// The stage only reaches `Over` through the end evaluator, after a
/// successful move fills the board.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    stage: Stage,
    outcome: Outcome,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            board: Board::initial(),
            stage: Stage::DarkToMove,
            outcome: Outcome::Ongoing,
        }
    }

    /// Discard the current game and return to the starting position.
    pub fn reset(&mut self) {
        *self = Engine::new();
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.stage == Stage::Over
    }

    // -- Game actions --

    /// Play `disc` at `point`, alternating the stage on success. Runs the
    /// end evaluator after every applied move.
    pub fn try_play(&mut self, disc: Disc, point: Point) -> Result<Stage, ReversiError> {
        if !self.stage.is_play() {
            return Err(ReversiError::GameOver);
        }
        if self.stage.mover() != Some(disc) {
            return Err(ReversiError::OutOfTurn);
        }

        self.board = self.board.play(point, disc)?;
        self.finish_turn(disc);
        Ok(self.stage)
    }

    /// Forward a host click as the human (Dark) move. Illegal, occupied,
    /// out-of-range, and out-of-turn clicks are silently rejected.
    pub fn handle_click(&mut self, point: Point) -> bool {
        self.try_play(Disc::Dark, point).is_ok()
    }

    /// One automated tick: scan cells in row-major order and play the first
    /// legal Light move. Returns the cell played, or `None` (state unchanged)
    /// when it is not Light's turn or Light has no legal move. There is no
    /// pass rule: a tick with no legal move leaves the stage at
    /// `LightToMove`, to be retried on the next tick.
    pub fn play_auto(&mut self) -> Option<Point> {
        if self.stage != Stage::LightToMove {
            return None;
        }

        let point = self.board.legal_moves(Disc::Light).into_iter().next()?;
        self.board = self.board.play(point, Disc::Light).ok()?;
        self.finish_turn(Disc::Light);
        Some(point)
    }

    fn finish_turn(&mut self, disc: Disc) {
        self.outcome = Outcome::of(&self.board);
        self.stage = if self.outcome.is_decided() {
            Stage::Over
        } else {
            match disc.opp() {
                Disc::Dark => Stage::DarkToMove,
                Disc::Light => Stage::LightToMove,
            }
        };
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.board.cells().to_vec(),
            stage: self.stage,
            outcome: self.outcome,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
