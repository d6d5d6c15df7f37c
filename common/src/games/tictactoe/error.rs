use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot use cell {0}: outside the board (expected 0 to 8)")]
    OutOfBounds(i64),

    #[error("cannot set cell {0}: already occupied")]
    CellOccupied(usize),

    #[error("an empty cell cannot make or evaluate a move")]
    InvalidCell,

    #[error("game is already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,
}
