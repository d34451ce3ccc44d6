use arrayvec::ArrayVec;

use crate::Point;
use crate::cell::{Cell, Disc};
use crate::error::ReversiError;

/// Board edge length.
pub const SIZE: u8 = 8;

const CELLS: usize = SIZE as usize * SIZE as usize;

/// A directional walk visits at most SIZE - 1 cells before leaving the board.
const MAX_RUN: usize = SIZE as usize - 1;

/// The 8 unit direction vectors as (row, col) offsets.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The Reversi board stored as a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Test-support constructor from an 8x8 cell matrix.
    #[cfg(test)]
    pub(crate) fn new(rows: Vec<Vec<Cell>>) -> Self {
        assert!(
            rows.len() == SIZE as usize && rows.iter().all(|row| row.len() == SIZE as usize),
            "malformed board matrix"
        );

        let mut cells = [Cell::Empty; CELLS];
        for (i, v) in rows.into_iter().flatten().enumerate() {
            cells[i] = v;
        }
        Board { cells }
    }

    /// Create a board with the canonical starting layout:
    /// Light on (3,3) and (4,4), Dark on (3,4) and (4,3).
    pub fn initial() -> Self {
        let mut board = Board {
            cells: [Cell::Empty; CELLS],
        };
        board.set_cell((3, 3), Cell::Light);
        board.set_cell((4, 4), Cell::Light);
        board.set_cell((3, 4), Cell::Dark);
        board.set_cell((4, 3), Cell::Dark);
        board
    }

    // -- Accessors --

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The disc on `point`, or `None` for an empty or out-of-range cell.
    pub fn disc_at(&self, point: Point) -> Option<Disc> {
        if self.on_board(point) {
            self.at(point).disc()
        } else {
            None
        }
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < SIZE && col < SIZE
    }

    pub fn count(&self, disc: Disc) -> u32 {
        self.cells.iter().filter(|&&c| c == disc.cell()).count() as u32
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> u32 {
        self.cells.iter().filter(|&&c| !c.is_empty()).count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.occupied() as usize == CELLS
    }

    // -- Move legality and captures --

    /// A move is legal iff the cell is on the board, empty, and at least one
    /// direction holds a run of opponent discs bounded by one of `disc`'s own.
    pub fn is_legal_move(&self, point: Point, disc: Disc) -> bool {
        self.on_board(point)
            && self.at(point).is_empty()
            && DIRECTIONS
                .iter()
                .any(|&dir| !self.run_in_direction(point, dir, disc).is_empty())
    }

    /// Every cell captured by placing `disc` on the empty cell `point`,
    /// folded over the 8 direction vectors.
    pub fn captures(&self, point: Point, disc: Disc) -> Vec<Point> {
        DIRECTIONS
            .iter()
            .flat_map(|&dir| self.run_in_direction(point, dir, disc))
            .collect()
    }

    /// All legal moves for `disc` in row-major order, (0,0) through (7,7).
    pub fn legal_moves(&self, disc: Disc) -> Vec<Point> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.is_legal_move((row, col), disc) {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Place a disc on the board. Returns a new Board with the move applied
    /// and every captured run flipped, or an error leaving `self` untouched.
    pub fn play(&self, point: Point, disc: Disc) -> Result<Board, ReversiError> {
        if !self.on_board(point) {
            return Err(ReversiError::NotOnBoard);
        }
        if !self.at(point).is_empty() {
            return Err(ReversiError::Occupied);
        }

        let flips = self.captures(point, disc);
        if flips.is_empty() {
            return Err(ReversiError::NoCapture);
        }

        let mut board = self.clone();
        for p in flips {
            board.set_cell(p, disc.cell());
        }
        board.set_cell(point, disc.cell());
        Ok(board)
    }

    /// Walk outward from `point` while cells hold the opponent's discs.
    /// Returns the traversed run when it terminates, in bounds, on one of
    /// `disc`'s own; otherwise empty. An adjacent own disc yields a
    /// zero-length run, which is not a capture.
    fn run_in_direction(
        &self,
        (row, col): Point,
        (dr, dc): (i8, i8),
        disc: Disc,
    ) -> ArrayVec<Point, MAX_RUN> {
        let mut run = ArrayVec::new();
        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;

        loop {
            if !(0..SIZE as i8).contains(&r) || !(0..SIZE as i8).contains(&c) {
                return ArrayVec::new();
            }
            let cell = self.at((r as u8, c as u8));
            if cell.is_empty() {
                return ArrayVec::new();
            }
            if cell == disc.cell() {
                return run;
            }
            run.push((r as u8, c as u8));
            r += dr;
            c += dc;
        }
    }

    // -- Internal helpers --

    /// Cell value at an in-bounds point; callers check `on_board` first.
    #[inline]
    fn at(&self, (row, col): Point) -> Cell {
        self.cells[Self::idx(row, col)]
    }

    #[inline]
    fn idx(row: u8, col: u8) -> usize {
        row as usize * SIZE as usize + col as usize
    }

    fn set_cell(&mut self, point: Point, cell: Cell) {
        if self.on_board(point) {
            self.cells[Self::idx(point.0, point.1)] = cell;
        }
    }
}
