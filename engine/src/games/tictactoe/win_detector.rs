use super::types::{CELL_COUNT, Mark, WinningLine};

pub static WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

/// First completed line in `WIN_LINES` order.
pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&[E; CELL_COUNT]), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let mut cells = [E; CELL_COUNT];
            for index in line {
                cells[index] = O;
            }
            let found = check_win_with_line(&cells).unwrap();
            assert_eq!(found.mark, O);
            assert_eq!(found.cells, line);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = [X, X, O, E, E, E, E, E, E];
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_diagonal_win_reports_line() {
        let cells = [X, O, X, O, X, O, E, E, X];
        let line = check_win_with_line(&cells).unwrap();
        assert_eq!(line.mark, X);
        assert_eq!(line.cells, [0, 4, 8]);
    }
}
