mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, WIN_SCORE};
pub use bot_controller::calculate_minimax_move;
pub use error::GameError;
pub use game_state::{COMPUTER_MARK, HUMAN_MARK, TicTacToeGameState};
pub use types::{EvaluatedMove, FirstPlayerMode, GameStatus, Mark};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
