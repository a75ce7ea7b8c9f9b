use std::fmt;

use super::types::{CELL_COUNT, Mark};
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Panics if `index` is out of bounds; callers validate indices first.
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Mark::Empty
    }

    pub fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.is_empty(index), "cell {} is already marked", index);
        self.cells[index] = mark;
    }

    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn available_indices(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&index| self.is_empty(index)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Reports that some line is complete, not whose it is.
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            writeln!(f, "{}{}{}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    fn labeling(mut code: usize) -> [Mark; CELL_COUNT] {
        let mut cells = [E; CELL_COUNT];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => E,
                1 => X,
                _ => O,
            };
            code /= 3;
        }
        cells
    }

    fn has_three_by_coordinates(cells: &[Mark; CELL_COUNT]) -> bool {
        let at = |row: usize, col: usize| cells[row * 3 + col];
        let same = |a: Mark, b: Mark, c: Mark| a != E && a == b && b == c;
        (0..3).any(|i| same(at(i, 0), at(i, 1), at(i, 2)) || same(at(0, i), at(1, i), at(2, i)))
            || same(at(0, 0), at(1, 1), at(2, 2))
            || same(at(0, 2), at(1, 1), at(2, 0))
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_indices(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert!(!board.has_winner());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, X);
        assert!(!board.is_empty(4));
        assert_eq!(board.get(4), Some(X));
        assert_eq!(board.available_indices(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
        board.clear(4);
        assert!(board.is_empty(4));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_out_of_bounds() {
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn test_has_winner_matches_lines_on_reachable_boards() {
        let mut checked = 0;
        for code in 0..3usize.pow(9) {
            let board = Board::from_cells(labeling(code));
            let xs = board.count(X);
            let os = board.count(O);
            if xs != os && xs != os + 1 {
                continue;
            }
            checked += 1;
            assert_eq!(
                board.has_winner(),
                has_three_by_coordinates(board.cells()),
                "board:\n{}",
                board
            );
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert!(!board.has_winner());
        assert!(board.available_indices().is_empty());
    }

    #[test]
    fn test_display_rows() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
        assert_eq!(board.to_string(), "X..\n.O.\n..X\n");
    }
}
