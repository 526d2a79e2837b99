use super::board::{Board, get_available_moves};
use super::minimax::{MinimaxSearch, SearchStats};
use super::types::{BOT_MARK, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<Position>,
    /// Proven score of `best_move`; `None` when the board had no empty cell.
    pub score: Option<i32>,
    pub nodes: u64,
}

/// Picks the bot's move by scoring every empty cell in row-major order.
///
/// Each candidate gets the full `(i32::MIN, i32::MAX)` window and the root
/// loop is never cut short, so on equal scores the first cell found wins.
/// The board is restored before returning; committing the move is up to
/// the caller.
pub fn calculate_minimax_move(board: &mut Board, search: &MinimaxSearch) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in get_available_moves(board) {
        board.place(position, BOT_MARK);
        let score = search.evaluate(board, 0, false, i32::MIN, i32::MAX, &mut stats);
        board.clear(position);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    let outcome = SearchOutcome {
        best_move,
        score: best_move.map(|_| best_score),
        nodes: stats.nodes,
    };

    match outcome.best_move {
        Some(position) => crate::log_debug!(
            "Bot picked ({}, {}) score {} after {} nodes (depth {}, {:?} pruning)",
            position.row,
            position.col,
            best_score,
            outcome.nodes,
            search.max_depth,
            search.pruning
        ),
        None => crate::log_debug!("Bot has no move: board is full"),
    }

    outcome
}

/// Best move for the bot with the default row-granular pruning, or `None`
/// if the board has no empty cell.
pub fn best_move(board: &mut Board, max_depth: usize) -> Option<Position> {
    calculate_minimax_move(board, &MinimaxSearch::new(max_depth)).best_move
}
