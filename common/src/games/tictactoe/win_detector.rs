use super::types::Mark;

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_line(cells: &[Mark], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}

/// Returns the first line fully owned by one side, if any.
pub fn check_win_with_line(cells: &[Mark]) -> Option<(Mark, [usize; 3])> {
    WIN_LINES.iter().find_map(|&line| {
        let mark = cells[line[0]];
        if mark != Mark::Empty && line.iter().all(|&idx| cells[idx] == mark) {
            Some((mark, line))
        } else {
            None
        }
    })
}

pub fn check_win(cells: &[Mark]) -> Option<Mark> {
    check_win_with_line(cells).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Empty as E, O, X};

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let mut cells = [E; 9];
            for idx in line {
                cells[idx] = O;
            }
            assert!(has_line(&cells, O), "line {:?}", line);
            assert!(!has_line(&cells, X));
            assert_eq!(check_win_with_line(&cells), Some((O, line)));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let cells = [X, X, E, E, E, E, E, E, E];
        assert!(!has_line(&cells, X));
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_empty_cells_never_form_a_line() {
        let cells = [E; 9];
        assert!(!has_line(&cells, E));
        assert_eq!(check_win(&cells), None);
    }
}
