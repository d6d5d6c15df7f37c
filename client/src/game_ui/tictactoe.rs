use common::games::tictactoe::{Board, CELL_COUNT};

const ROW_WIDTH: usize = 3;

pub fn status_message(board: &Board) -> &'static str {
    if board.winner_x() {
        "You win"
    } else if board.winner_o() {
        "Computer wins"
    } else if board.is_full() {
        "It's a draw"
    } else {
        "Make your move:"
    }
}

/// The grid row by row, followed by the result or a move prompt.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("\n");
    for row in board.cells().chunks(ROW_WIDTH) {
        let symbols: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
        out.push_str(&symbols.join(" "));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(status_message(board));
    out.push('\n');
    out
}

pub fn render_legend() -> String {
    let mut out = String::from("Cells are numbered:\n");
    for row in (0..CELL_COUNT).collect::<Vec<_>>().chunks(ROW_WIDTH) {
        let labels: Vec<String> = row.iter().map(|index| index.to_string()).collect();
        out.push_str(&labels.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_render_empty_board() {
        assert_eq!(
            render_board(&Board::new()),
            "\n- - -\n- - -\n- - -\n\nMake your move:\n"
        );
    }

    #[test]
    fn test_render_won_board() {
        let board = Board::from_cells([O, O, O, X, X, E, E, E, E]);
        assert_eq!(render_board(&board), "\nO O O\nX X -\n- - -\n\nComputer wins\n");
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            status_message(&Board::from_cells([X, X, X, O, O, E, E, E, E])),
            "You win"
        );
        assert_eq!(
            status_message(&Board::from_cells([X, O, X, X, O, O, O, X, X])),
            "It's a draw"
        );
    }

    #[test]
    fn test_legend_lists_indices() {
        assert_eq!(render_legend(), "Cells are numbered:\n0 1 2\n3 4 5\n6 7 8\n");
    }
}
