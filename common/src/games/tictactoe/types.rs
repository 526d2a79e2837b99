use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// Score of a position won by the bot (`O`).
pub const WIN_SCORE: i32 = 1;
/// Score of a drawn position, or of one cut off by the depth limit.
pub const DRAW_SCORE: i32 = 0;
/// Score of a position won by the human (`X`).
pub const LOSS_SCORE: i32 = -1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

/// The human player's mark. The search minimizes on its turns.
pub const HUMAN_MARK: Mark = Mark::X;
/// The bot's mark. The search maximizes on its turns.
pub const BOT_MARK: Mark = Mark::O;

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Bot,
    Random,
}

/// How far a beta/alpha cutoff reaches inside one node's move loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruningMode {
    /// A cutoff skips the remaining columns of the current row only; the
    /// next row is still explored with the tightened window.
    #[default]
    Row,
    /// A cutoff ends the node.
    Full,
}
