use std::fmt;

/// The eight lines that win the game, in the order they are checked.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Horizontal
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Vertical
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonal
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

pub const SQUARES: usize = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn swap(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Three board indices that win when they all hold the same mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Nine squares, indexed row by row from the top left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Mark>; SQUARES],
}

impl Board {
    pub fn new() -> Self {
        let squares = [None; SQUARES];
        Self { squares }
    }

    /// Builds a board from raw squares without checking that it is reachable.
    pub fn from_squares(squares: [Option<Mark>; SQUARES]) -> Self {
        Self { squares }
    }

    /// The mark at `index`, or `None` when the square is empty or off the board.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.squares.get(index).copied().flatten()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(None))
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.squares[index] = Some(mark);
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.squares.iter().filter(|sq| **sq == Some(mark)).count()
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }

    /// The first complete line in [`WINNING_LINES`] order, with its owner.
    pub fn winning_line(&self) -> Option<(Mark, WinningLine)> {
        for line in WINNING_LINES {
            let [a, b, c] = line.indices();
            if let Some(mark) = self.squares[a] {
                if self.squares[b] == Some(mark) && self.squares[c] == Some(mark) {
                    return Some((mark, line));
                }
            }
        }
        None
    }

    fn display_squares(&self) -> [String; SQUARES] {
        let mut display: [String; SQUARES] = Default::default();
        for (index, (dsquare, square)) in display.iter_mut().zip(self.squares.iter()).enumerate() {
            *dsquare = match square {
                Some(mark) => mark.to_string(),
                None => (index + 1).to_string(),
            };
        }
        display
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ds = self.display_squares();
        writeln!(f, " {} | {} | {}", ds[0], ds[1], ds[2])?;
        f.write_str("---+---+---\n")?;
        writeln!(f, " {} | {} | {}", ds[3], ds[4], ds[5])?;
        f.write_str("---+---+---\n")?;
        writeln!(f, " {} | {} | {}", ds[6], ds[7], ds[8])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        let mut squares = [None; SQUARES];
        for (square, c) in squares.iter_mut().zip(layout.chars().filter(|c| !c.is_whitespace())) {
            *square = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..SQUARES).all(|i| board.is_empty(i)));
        assert_eq!(board.count(Mark::X), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_off_board_index_is_not_empty() {
        let board = Board::new();
        assert!(!board.is_empty(9));
        assert_eq!(board.get(42), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for i in line.indices() {
                board.set(i, Mark::O);
            }
            assert_eq!(board.winning_line(), Some((Mark::O, line)));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board("XXO ... ...");
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        let board = board("XXX X.. X..");
        assert_eq!(board.winning_line(), Some((Mark::X, WinningLine([0, 1, 2]))));
    }

    #[test]
    fn test_columns_checked_before_diagonals() {
        let board = board("X.. XX. X.X");
        assert_eq!(board.winning_line(), Some((Mark::X, WinningLine([0, 3, 6]))));
    }

    #[test]
    fn test_full_board() {
        let board = board("XOX OXX OXO");
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }

    #[test]
    fn test_display_labels_empty_squares() {
        let board = board("X.. .O. ...");
        assert_eq!(
            board.to_string(),
            " X | 2 | 3\n---+---+---\n 4 | O | 6\n---+---+---\n 7 | 8 | 9\n"
        );
    }

    #[test]
    fn test_line_contains() {
        let diagonal = WINNING_LINES[7];
        assert!(diagonal.contains(4));
        assert!(!diagonal.contains(0));
    }
}
