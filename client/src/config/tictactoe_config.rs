use common::config::Validate;
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    /// Print the engine's evaluation after every computer move.
    #[serde(default)]
    pub show_scores: bool,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
