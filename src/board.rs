use std::fmt::Display;

pub const BOARD_SIZE: usize = 5;
pub const CELLS_PER_BOARD: usize = BOARD_SIZE * BOARD_SIZE;
pub const MAX_CELL_VALUE: u32 = 99;

/// A 5x5 bingo card. Marking never loses the original number, it only flips
/// the matching `called` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) numbers: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) called: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new(numbers: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self {
            numbers,
            called: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from exactly 25 numbers in row-major order.
    pub fn from_cells(cells: &[u32]) -> Self {
        assert_eq!(cells.len(), CELLS_PER_BOARD);

        let mut numbers = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        for (index, value) in cells.iter().enumerate() {
            numbers[index / BOARD_SIZE][index % BOARD_SIZE] = *value;
        }
        Self::new(numbers)
    }

    /// Marks the first not-yet-called cell holding `number`, scanning row-major.
    /// Returns false, leaving the board untouched, if there is no such cell.
    pub fn mark(&mut self, number: u32) -> bool {
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                if self.numbers[i][j] == number && !self.called[i][j] {
                    self.called[i][j] = true;
                    return true;
                }
            }
        }

        false
    }

    pub fn has_won(&self) -> bool {
        for i in 0..BOARD_SIZE {
            let mut row_bingo = true;
            let mut column_bingo = true;
            for pt in 0..BOARD_SIZE {
                row_bingo &= self.called[i][pt];
                column_bingo &= self.called[pt][i];
            }
            if row_bingo || column_bingo {
                return true;
            }
        }

        false
    }

    /// Sum of the uncalled cells, times the draw that completed the board.
    /// Cells are at most `MAX_CELL_VALUE`, so this fits in a `u64` for any `u32` draw.
    pub fn score(&self, winning_draw: u32) -> u64 {
        let mut uncalled_sum = 0u64;
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                if !self.called[i][j] {
                    uncalled_sum += u64::from(self.numbers[i][j]);
                }
            }
        }

        uncalled_sum * u64::from(winning_draw)
    }

    pub fn marked_count(&self) -> usize {
        self.called.iter().flatten().filter(|called| **called).count()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (numbers, called) in self.numbers.iter().zip(self.called.iter()) {
            for (j, (value, is_called)) in numbers.iter().zip(called.iter()).enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if *is_called {
                    write!(f, "[{:>2}]", value)?;
                } else {
                    write!(f, " {:>2} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{Board, BOARD_SIZE, MAX_CELL_VALUE};

    fn sample_board() -> Board {
        let cells = (0..25u32).map(|x| x * 3 + 1).collect_vec();
        Board::from_cells(&cells)
    }

    #[test]
    fn marking_absent_number_leaves_board_unchanged() {
        let mut board = sample_board();
        let before = board.clone();

        assert!(!board.mark(2));
        assert!(!board.mark(1000));
        assert_eq!(before, board);
    }

    #[test]
    fn marking_present_number_flags_exactly_one_cell() {
        let mut board = sample_board();

        assert!(board.mark(1));
        assert!(board.called[0][0]);
        assert_eq!(1, board.marked_count());

        // Already called, so there is nothing left to mark.
        assert!(!board.mark(1));
        assert_eq!(1, board.marked_count());
    }

    #[test]
    fn any_complete_row_wins() {
        for row in 0..BOARD_SIZE {
            let mut board = sample_board();
            for col in 0..BOARD_SIZE {
                assert!(!board.has_won());
                let value = board.numbers[row][col];
                assert!(board.mark(value));
            }
            assert!(board.has_won(), "row {} did not win", row);
        }
    }

    #[test]
    fn any_complete_column_wins() {
        for col in 0..BOARD_SIZE {
            let mut board = sample_board();
            for row in 0..BOARD_SIZE {
                assert!(!board.has_won());
                let value = board.numbers[row][col];
                assert!(board.mark(value));
            }
            assert!(board.has_won(), "column {} did not win", col);
        }
    }

    #[test]
    fn diagonals_do_not_win() {
        let mut board = sample_board();
        for i in 0..BOARD_SIZE {
            let value = board.numbers[i][i];
            board.mark(value);
        }
        assert!(!board.has_won());

        let mut board = sample_board();
        for i in 0..BOARD_SIZE {
            let value = board.numbers[i][BOARD_SIZE - 1 - i];
            board.mark(value);
        }
        assert!(!board.has_won());
    }

    #[test]
    fn win_check_is_idempotent() {
        let mut board = sample_board();
        for col in 0..BOARD_SIZE {
            let value = board.numbers[2][col];
            board.mark(value);
        }
        let before = board.clone();

        assert!(board.has_won());
        assert!(board.has_won());
        assert_eq!(before, board);
    }

    #[test]
    fn score_is_total_minus_marked_values() {
        let mut board = sample_board();
        let total: u64 = board.numbers.iter().flatten().map(|x| u64::from(*x)).sum();

        let marked = [1u32, 10, 31, 73, 46];
        for value in marked {
            assert!(board.mark(value));
        }
        let marked_sum: u64 = marked.iter().map(|x| u64::from(*x)).sum();

        assert_eq!((total - marked_sum) * 7, board.score(7));
        assert_eq!(0, board.score(0));
    }

    #[test]
    fn score_with_largest_cells_and_draw_does_not_overflow() {
        let board = Board::from_cells(&[MAX_CELL_VALUE; 25]);
        let expected = 25 * u64::from(MAX_CELL_VALUE) * u64::from(u32::MAX);
        assert_eq!(expected, board.score(u32::MAX));
    }

    #[test]
    fn display_brackets_called_cells() {
        let mut board = sample_board();
        board.mark(4);

        let rendered = board.to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!("  1  [ 4]   7   10   13 ", first_line);
        assert_eq!(BOARD_SIZE, rendered.lines().count());
    }
}
