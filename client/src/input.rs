use common::games::tictactoe::{CELL_COUNT, GameError};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInputError {
    #[error("Numeric values only")]
    NotNumeric,

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Parses one line of human input into a cell index.
pub fn parse_move(line: &str) -> Result<usize, MoveInputError> {
    let value: i64 = line
        .trim()
        .parse()
        .map_err(|_| MoveInputError::NotNumeric)?;

    usize::try_from(value)
        .ok()
        .filter(|&index| index < CELL_COUNT)
        .ok_or(MoveInputError::Game(GameError::OutOfBounds(value)))
}
