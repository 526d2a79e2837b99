mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{SearchOutcome, best_move, calculate_minimax_move};
pub use error::MoveError;
pub use game_state::TicTacToeGameState;
pub use minimax::{MinimaxSearch, SearchStats, evaluate};
pub use settings::{DEFAULT_MAX_DEPTH, MAX_SEARCH_DEPTH, TicTacToeSettings};
pub use types::{
    BOARD_SIZE, BOT_MARK, DRAW_SCORE, FirstPlayerMode, GameStatus, HUMAN_MARK, LOSS_SCORE, Mark,
    Position, PruningMode, WIN_SCORE,
};
pub use validate::validate_move;
pub use win_detector::{WINNING_LINES, WinningLine, check_win, check_win_with_line, win};
