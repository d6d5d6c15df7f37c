use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::error::GameError;
use super::types::{EvaluatedMove, FirstPlayerMode, GameStatus, Mark};
use super::win_detector::check_win;

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

/// One human-versus-computer game: the board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let current_mark = match first_player_mode {
            FirstPlayerMode::Human => HUMAN_MARK,
            FirstPlayerMode::Computer => COMPUTER_MARK,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    HUMAN_MARK
                } else {
                    COMPUTER_MARK
                }
            }
        };

        Self {
            board: Board::new(),
            current_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == COMPUTER_MARK
    }

    /// Places the mark of the side to move at `index`.
    pub fn place_mark(&mut self, index: usize) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Lets the computer play its optimal move. A finished game is left as is.
    pub fn computer_move(&mut self) -> Result<Option<EvaluatedMove>, GameError> {
        if self.status.is_over() {
            return Ok(None);
        }
        if self.current_mark != COMPUTER_MARK {
            return Err(GameError::NotYourTurn);
        }

        let best_move = calculate_minimax_move(&self.board, COMPUTER_MARK)?;
        if let Some(best) = best_move {
            self.place_mark(best.index)?;
        }
        Ok(best_move)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.status = match check_win(self.board.cells()) {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if self.board.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        };
    }
}
