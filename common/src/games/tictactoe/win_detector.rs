use super::board::Board;
use super::types::{Mark, Position};

/// The eight lines of three: rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

/// True iff some row, column or diagonal consists entirely of `mark`.
pub fn win(board: &Board, mark: Mark) -> bool {
    find_line(board, mark).is_some()
}

/// Returns the first completed line of `mark`, in [`WINNING_LINES`] order.
pub fn check_win_with_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    find_line(board, mark).map(|line| {
        let (start_row, start_col) = line[0];
        let (end_row, end_col) = line[2];
        WinningLine::new(
            mark,
            Position::new(start_row, start_col),
            Position::new(end_row, end_col),
        )
    })
}

/// Checks `X` before `O`, the same order the search scores terminals in.
pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O].into_iter().find(|&mark| win(board, mark))
}

fn find_line(board: &Board, mark: Mark) -> Option<&'static [(usize, usize); 3]> {
    if mark == Mark::Empty {
        return None;
    }

    let rows = board.rows();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&(row, col)| rows[row][col] == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    fn board_with_line(line: &[(usize, usize); 3], mark: Mark) -> Board {
        let mut board = Board::new();
        for &(row, col) in line {
            board.place(Position::new(row, col), mark);
        }
        board
    }

    #[test]
    fn test_every_line_wins_for_its_mark_only() {
        for line in &WINNING_LINES {
            for (mark, other) in [(X, O), (O, X)] {
                let board = board_with_line(line, mark);

                assert!(win(&board, mark), "{:?} should win on {:?}", mark, line);
                assert!(!win(&board, other), "{:?} should not win on {:?}", other, line);
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();

        assert!(!win(&board, X));
        assert!(!win(&board, O));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = Board::new();

        assert!(!win(&board, E));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);

        assert!(!win(&board, X));
        assert!(!win(&board, O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);

        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_check_win_prefers_x_when_both_have_lines() {
        let board = Board::from_rows([[X, X, X], [O, O, O], [X, O, X]]);

        assert_eq!(check_win(&board), Some(X));
    }

    #[test]
    fn test_winning_line_endpoints_for_anti_diagonal() {
        let board = Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]);

        let line = check_win_with_line(&board, O).unwrap();

        assert_eq!(line.mark, O);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }
}
