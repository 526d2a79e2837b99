use thiserror::Error;

use super::types::Mark;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Position ({row}, {col}) is out of bounds (rows and columns are 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("Game is already over")]
    GameOver,

    #[error("It is {current:?}'s turn, not the bot's")]
    NotBotTurn { current: Mark },

    #[error("No empty cell left for the bot")]
    NoMoveAvailable,
}
