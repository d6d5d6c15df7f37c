mod tictactoe;

pub use tictactoe::{render_board, render_legend};
