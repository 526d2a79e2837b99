use super::types::{BOARD_SIZE, Mark, Position};

/// The 3x3 grid, indexed row-major as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position) == Mark::Empty
    }

    /// Puts `mark` on an empty cell. Callers must pair it with [`Board::clear`]
    /// when exploring, and must only pass empty cells.
    pub fn place(&mut self, position: Position, mark: Mark) {
        debug_assert!(
            self.is_empty_at(position),
            "cell ({}, {}) is already marked",
            position.row,
            position.col
        );
        self.cells[position.row][position.col] = mark;
    }

    pub fn clear(&mut self, position: Position) {
        self.cells[position.row][position.col] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn marks_placed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}
