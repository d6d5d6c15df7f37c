use std::io::{self, BufRead, Write};

use common::games::tictactoe::{GameError, GameStatus, TicTacToeGameState};
use common::log;
use thiserror::Error;

use crate::config::TicTacToeConfig;
use crate::game_ui::{render_board, render_legend};
use crate::input::parse_move;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("computer could not move: {0}")]
    Engine(#[from] GameError),
}

/// Plays one game on the given streams until it is won or drawn.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut R,
    output: &mut W,
    cfg: &TicTacToeConfig,
) -> Result<GameStatus, RunnerError> {
    write!(output, "{}", render_legend())?;

    loop {
        if state.status().is_over() {
            write!(output, "{}", render_board(state.board()))?;
            output.flush()?;
            log!("Game finished: {:?}", state.status());
            return Ok(state.status());
        }

        if state.is_computer_turn() {
            if let Some(best) = state.computer_move()? {
                log!("Computer played {} (score {})", best.index, best.score);
                if cfg.show_scores {
                    writeln!(
                        output,
                        "Computer plays {} (evaluation {})",
                        best.index, best.score
                    )?;
                }
            }
            continue;
        }

        write!(output, "{}", render_board(state.board()))?;
        output.flush()?;
        read_human_move(state, input, output)?;
    }
}

fn read_human_move<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut R,
    output: &mut W,
) -> Result<(), RunnerError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(RunnerError::InputClosed);
        }

        let placed = parse_move(&line)
            .map_err(|e| e.to_string())
            .and_then(|index| state.place_mark(index).map_err(|e| e.to_string()));

        match placed {
            Ok(()) => return Ok(()),
            Err(message) => {
                writeln!(output, "{}", message)?;
                output.flush()?;
            }
        }
    }
}
