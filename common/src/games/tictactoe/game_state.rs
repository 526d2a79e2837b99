use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{SearchOutcome, calculate_minimax_move};
use super::error::MoveError;
use super::minimax::MinimaxSearch;
use super::types::{BOT_MARK, FirstPlayerMode, GameStatus, HUMAN_MARK, Mark, Position};
use super::validate::validate_move;
use super::win_detector::{WinningLine, check_win_with_line, win};

/// One human-versus-bot session. The human plays `X`, the bot plays `O`.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        debug_assert!(first_mark != Mark::Empty);
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn with_first_player(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let first_mark = match first_player_mode {
            FirstPlayerMode::Human => HUMAN_MARK,
            FirstPlayerMode::Bot => BOT_MARK,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    HUMAN_MARK
                } else {
                    BOT_MARK
                }
            }
        };
        Self::new(first_mark)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == BOT_MARK
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let position = validate_move(&self.board, row, col)?;
        self.board.place(position, self.current_mark);
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Runs the search on the session board and commits the bot's move.
    pub fn bot_move(&mut self, search: &MinimaxSearch) -> Result<SearchOutcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.current_mark != BOT_MARK {
            return Err(MoveError::NotBotTurn {
                current: self.current_mark,
            });
        }

        let outcome = calculate_minimax_move(&mut self.board, search);
        let position = outcome.best_move.ok_or(MoveError::NoMoveAvailable)?;
        self.place_mark(position.row, position.col)?;
        Ok(outcome)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::XWon => check_win_with_line(&self.board, Mark::X),
            GameStatus::OWon => check_win_with_line(&self.board, Mark::O),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    fn check_game_over(&mut self) {
        self.status = if win(&self.board, Mark::X) {
            GameStatus::XWon
        } else if win(&self.board, Mark::O) {
            GameStatus::OWon
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
    }
}
