use std::io::{self, BufRead, Write};
use common::games::tictactoe::{GameStatus, TicTacToeGameState, TicTacToeSettings};
use common::{log, log_debug};
use crate::game_ui::tictactoe::{BoardView, result_message};
use crate::input::{prompt_line, read_move};

const BOT_PAUSE_PROMPT: &str = "Press Enter for the Ai player to go...";

/// Alternates human and bot turns until the game ends, returning the final
/// status. Input and output are injected so whole sessions can be scripted.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    state: &mut TicTacToeGameState,
    settings: &TicTacToeSettings,
) -> io::Result<GameStatus> {
    let search = settings.search();

    while !state.status.is_over() {
        write!(output, "{}", BoardView(&state.board))?;
        writeln!(output)?;

        if state.is_bot_turn() {
            if settings.pause_before_bot {
                prompt_line(input, output, BOT_PAUSE_PROMPT)?;
            }
            let outcome = state.bot_move(&search).map_err(io::Error::other)?;
            log_debug!(
                "Bot searched {} nodes, score {:?}",
                outcome.nodes,
                outcome.score
            );
        } else {
            writeln!(output, "Your turn:")?;
            let position = read_move(input, output, &state.board)?;
            state
                .place_mark(position.row, position.col)
                .map_err(io::Error::other)?;
        }
        writeln!(output)?;
    }

    write!(output, "{}", BoardView(&state.board))?;
    if let Some(message) = result_message(state.status) {
        writeln!(output, "{}", message)?;
    }
    log!("Game over: {:?}", state.status);

    Ok(state.status)
}
