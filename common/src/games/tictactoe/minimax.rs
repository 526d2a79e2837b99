//! Depth-limited minimax with alpha-beta pruning.
//!
//! The bot (`O`) maximizes, the human (`X`) minimizes. Every node places a
//! mark on the shared board, recurses and clears the cell again, so the board
//! is unchanged once a call returns.

use super::board::Board;
use super::types::{
    BOARD_SIZE, BOT_MARK, DRAW_SCORE, HUMAN_MARK, LOSS_SCORE, Position, PruningMode, WIN_SCORE,
};
use super::win_detector::win;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of positions evaluated.
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxSearch {
    pub max_depth: usize,
    pub pruning: PruningMode,
}

impl MinimaxSearch {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            pruning: PruningMode::Row,
        }
    }

    pub fn with_pruning(mut self, pruning: PruningMode) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn evaluate(
        &self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        // X is checked first, so a board where both marks own a line is a loss.
        if win(board, HUMAN_MARK) {
            return LOSS_SCORE;
        }
        if win(board, BOT_MARK) {
            return WIN_SCORE;
        }
        if board.is_full() || depth == self.max_depth {
            return DRAW_SCORE;
        }

        if maximizing {
            self.maximize(board, depth, alpha, beta, stats)
        } else {
            self.minimize(board, depth, alpha, beta, stats)
        }
    }

    fn maximize(
        &self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        let mut max_eval = i32::MIN;
        'rows: for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                if !board.is_empty_at(position) {
                    continue;
                }

                board.place(position, BOT_MARK);
                let eval = self.evaluate(board, depth + 1, false, alpha, beta, stats);
                board.clear(position);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    match self.pruning {
                        PruningMode::Row => break,
                        PruningMode::Full => break 'rows,
                    }
                }
            }
        }
        max_eval
    }

    fn minimize(
        &self,
        board: &mut Board,
        depth: usize,
        alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        let mut min_eval = i32::MAX;
        'rows: for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                if !board.is_empty_at(position) {
                    continue;
                }

                board.place(position, HUMAN_MARK);
                let eval = self.evaluate(board, depth + 1, true, alpha, beta, stats);
                board.clear(position);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    match self.pruning {
                        PruningMode::Row => break,
                        PruningMode::Full => break 'rows,
                    }
                }
            }
        }
        min_eval
    }
}

/// Scores `board` from the bot's point of view: `-1` if X has a line, `1` if
/// O has one, otherwise `0` for a full board or once `depth` reaches
/// `max_depth`, otherwise the minimax value of the subtree.
pub fn evaluate(
    board: &mut Board,
    depth: usize,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    max_depth: usize,
) -> i32 {
    MinimaxSearch::new(max_depth).evaluate(
        board,
        depth,
        maximizing,
        alpha,
        beta,
        &mut SearchStats::default(),
    )
}
