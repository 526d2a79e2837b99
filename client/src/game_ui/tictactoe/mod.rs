use std::fmt;
use common::games::tictactoe::{Board, GameStatus};

const ROW_SEPARATOR: &str = "-----";

/// Text rendering of a board: cells joined by `|`, rows split by dashes.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.0.rows();
        for (i, row) in rows.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            writeln!(f, "{}", cells.join("|"))?;

            if i < rows.len() - 1 {
                writeln!(f, "{}", ROW_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

pub fn result_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::XWon => Some("You win!"),
        GameStatus::OWon => Some("AI wins!"),
        GameStatus::Draw => Some("It's a draw!"),
        GameStatus::InProgress => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_rendering() {
        let board = Board::new();

        let text = BoardView(&board).to_string();

        assert_eq!(text, " | | \n-----\n | | \n-----\n | | \n");
    }

    #[test]
    fn test_marked_board_rendering() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [O, E, X]]);

        let text = BoardView(&board).to_string();

        assert_eq!(text, "X|O| \n-----\n |X| \n-----\nO| |X\n");
    }

    #[test]
    fn test_result_messages() {
        assert_eq!(result_message(GameStatus::XWon), Some("You win!"));
        assert_eq!(result_message(GameStatus::OWon), Some("AI wins!"));
        assert_eq!(result_message(GameStatus::Draw), Some("It's a draw!"));
        assert_eq!(result_message(GameStatus::InProgress), None);
    }
}
