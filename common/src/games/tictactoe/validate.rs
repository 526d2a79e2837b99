use super::board::Board;
use super::error::MoveError;
use super::types::Position;

/// Checks that `(row, col)` names an empty cell on the board.
pub fn validate_move(board: &Board, row: usize, col: usize) -> Result<Position, MoveError> {
    let position = Position::new(row, col);
    if !position.is_on_board() {
        return Err(MoveError::OutOfBounds { row, col });
    }
    if !board.is_empty_at(position) {
        return Err(MoveError::CellOccupied { row, col });
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    #[test]
    fn test_empty_cell_is_valid() {
        let board = Board::new();

        assert_eq!(validate_move(&board, 2, 1), Ok(Position::new(2, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let board = Board::new();

        assert_eq!(
            validate_move(&board, 3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            validate_move(&board, 0, 7),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_marked_cell_is_rejected() {
        let mut board = Board::new();
        board.place(Position::new(1, 1), Mark::O);

        assert_eq!(
            validate_move(&board, 1, 1),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
    }
}
