use std::io::{self, BufRead, Write};
use common::games::tictactoe::{Board, Position, validate_move};

const ROW_PROMPT: &str = "Enter row (0, 1, 2): ";
const COLUMN_PROMPT: &str = "Enter column (0, 1, 2): ";
const INVALID_MOVE: &str = "Invalid move. Try again.";
const INVALID_INPUT: &str = "Invalid input. Enter numbers between 0 and 2.";

/// Prints `prompt` and reads one line. End of input is an error.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for a move",
        ));
    }
    Ok(line.trim().to_string())
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<i64>> {
    Ok(prompt_line(input, output, prompt)?.parse().ok())
}

/// Asks until the player names an empty cell.
pub fn read_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> io::Result<Position> {
    loop {
        let Some(row) = prompt_number(input, output, ROW_PROMPT)? else {
            writeln!(output, "{}", INVALID_INPUT)?;
            continue;
        };
        let Some(col) = prompt_number(input, output, COLUMN_PROMPT)? else {
            writeln!(output, "{}", INVALID_INPUT)?;
            continue;
        };

        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            writeln!(output, "{}", INVALID_MOVE)?;
            continue;
        };

        match validate_move(board, row, col) {
            Ok(position) => return Ok(position),
            Err(_) => writeln!(output, "{}", INVALID_MOVE)?,
        }
    }
}
