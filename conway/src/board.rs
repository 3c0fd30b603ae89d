// board.rs - Board state for Conway's Game of Life
//
// Cells live in a padded buffer with a one-cell dead border on every side,
// so neighbor counting never has to branch on the edges. Active cells are
// addressed from the outside as (row, col) in 0..rows x 0..cols.

use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::errors;

#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    next: Vec<bool>,
}

impl Board {
    /// Creates an all-dead board. Dimensions are fixed for the life of the board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, errors::Board> {
        if rows == 0 || cols == 0 {
            return Err(errors::Board::EmptyDimensions(rows, cols));
        }

        let total = (rows + 2) * (cols + 2);
        Ok(Self {
            rows,
            cols,
            cells: vec![false; total],
            next: vec![false; total],
        })
    }

    /// Builds a board from plaintext rows: `O`, `#` or `*` for alive, `.` for dead.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, errors::Board> {
        let width = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(errors::Board::EmptyPattern),
        };

        let mut board = Board::new(rows.len(), width)?;
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(errors::Board::RaggedRow(row, width, found));
            }

            for (col, ch) in line.chars().enumerate() {
                let alive = match ch {
                    'O' | '#' | '*' => true,
                    '.' => false,
                    other => return Err(errors::Board::InvalidCell(row, col, other)),
                };
                board.set(row, col, alive);
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        (row + 1) * (self.cols + 2) + (col + 1)
    }

    /// Returns the cell value, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Sets a cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = alive;
        }
    }

    /// Flips exactly one cell. Returns `false` and leaves the board untouched
    /// when the coordinates are out of range.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
        true
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fills every active cell with an independent fair coin flip.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                self.cells[idx] = rng.gen_bool(0.5);
            }
        }
    }

    /// Live cells in the Moore neighborhood of an active cell, or `None`
    /// outside the board.
    pub fn live_neighbors(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.count_around(self.index(row, col)))
        } else {
            None
        }
    }

    // The dead border stands in for missing neighbors, so edges never wrap.
    // `centre` must be the index of an active cell.
    #[inline]
    fn count_around(&self, centre: usize) -> u8 {
        let stride = self.cols + 2;
        let neighbors = [
            centre - stride - 1, centre - stride, centre - stride + 1,
            centre - 1,                           centre + 1,
            centre + stride - 1, centre + stride, centre + stride + 1,
        ];

        neighbors.iter().filter(|&&idx| self.cells[idx]).count() as u8
    }

    /// Advances one generation into the scratch buffer, then swaps buffers.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let count = self.count_around(idx);

                self.next[idx] = match (self.cells[idx], count) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    pub fn live_count(&self) -> usize {
        // Border cells are always dead, so counting the whole buffer is exact.
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn border_is_dead(&self) -> bool {
        let width = self.cols + 2;
        let height = self.rows + 2;
        let at = |r: usize, c: usize| self.cells[r * width + c];

        (0..width).all(|c| !at(0, c) && !at(height - 1, c))
            && (0..height).all(|r| !at(r, 0) && !at(r, width - 1))
    }

    /// Iterates active cells row by row as `(row, col, alive)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| (row, col, self.cells[self.index(row, col)]))
        })
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        self.cells.hash(state);
    }
}

#[cfg(test)]
mod board_tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).expect("valid pattern")
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(Board::new(0, 5), Err(errors::Board::EmptyDimensions(0, 5)));
        assert_eq!(Board::new(5, 0), Err(errors::Board::EmptyDimensions(5, 0)));
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_from_rows() {
        let b = board(&[".O.", "#..", "..*"]);
        assert_eq!((b.rows(), b.cols()), (3, 3));
        assert_eq!(b.get(0, 1), Some(true));
        assert_eq!(b.get(1, 0), Some(true));
        assert_eq!(b.get(2, 2), Some(true));
        assert_eq!(b.get(1, 1), Some(false));
        assert_eq!(b.live_count(), 3);
    }

    #[test]
    fn test_from_rows_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(Board::from_rows(&empty), Err(errors::Board::EmptyPattern));
        assert_eq!(Board::from_rows(&[""]), Err(errors::Board::EmptyDimensions(1, 0)));
        assert_eq!(
            Board::from_rows(&["...", ".."]),
            Err(errors::Board::RaggedRow(1, 3, 2))
        );
        assert_eq!(
            Board::from_rows(&["..", ".x"]),
            Err(errors::Board::InvalidCell(1, 1, 'x'))
        );
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        let mut b = board(&["O.O", "...", ".O."]);
        assert_eq!(b.live_neighbors(1, 1), Some(3));
        assert_eq!(b.get(1, 1), Some(false));

        b.step();
        assert_eq!(b.get(1, 1), Some(true));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut b = board(&["...", ".O.", "..."]);
        b.step();
        assert_eq!(b.get(1, 1), Some(false));
        assert_eq!(b.live_count(), 0);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let mut b = board(&["OOO", "OO.", "..."]);
        assert_eq!(b.live_neighbors(1, 1), Some(4));
        b.step();
        assert_eq!(b.get(1, 1), Some(false));
    }

    #[test]
    fn test_block_is_still_life() {
        let mut b = board(&["....", ".OO.", ".OO.", "...."]);
        let before = b.clone();
        for _ in 0..5 {
            b.step();
            assert_eq!(b, before);
        }
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        // each block cell sees exactly 3 neighbors even against the edge
        let mut b = board(&["OO", "OO"]);
        b.step();
        assert_eq!(b, board(&["OO", "OO"]));
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = board(&[".....", ".....", ".OOO.", ".....", "....."]);
        let vertical = board(&[".....", "..O..", "..O..", "..O..", "....."]);

        let mut b = horizontal.clone();
        b.step();
        assert_eq!(b, vertical);
        b.step();
        assert_eq!(b, horizontal);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // with wraparound the far column would give (0, 0) three neighbors
        let mut b = board(&["...O", "...O", "...O", "...."]);
        assert_eq!(b.live_neighbors(1, 0), Some(0));
        b.step();
        assert_eq!(b.get(1, 0), Some(false));
        assert_eq!(b.get(1, 2), Some(true));
        assert_eq!(b.get(1, 3), Some(true));
    }

    #[test]
    fn test_corner_has_three_neighbors() {
        let b = board(&["OO", "OO"]);
        assert_eq!(b.live_neighbors(0, 0), Some(3));
        assert_eq!(b.live_neighbors(1, 1), Some(3));
    }

    #[test]
    fn test_live_neighbors_out_of_range() {
        let b = board(&["OOO", "OOO", "OOO"]);
        assert_eq!(b.live_neighbors(1, 1), Some(8));
        assert_eq!(b.live_neighbors(3, 3), None);
        assert_eq!(b.live_neighbors(0, 3), None);
        assert_eq!(b.live_neighbors(usize::MAX, 0), None);
        assert_eq!(b.live_neighbors(0, usize::MAX), None);
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut original = Board::new(20, 30).unwrap();
        original.randomize_with(&mut rng);

        let mut copy = original.clone();
        original.step();
        original.step();
        copy.step();
        copy.step();

        assert_eq!(original, copy);
    }

    #[test]
    fn test_toggle_in_bounds_flips_one_cell() {
        let mut b = Board::new(4, 5).unwrap();
        let before = b.clone();

        assert!(b.toggle(2, 3));
        for (row, col, alive) in b.iter() {
            let expected = before.get(row, col).unwrap() ^ (row == 2 && col == 3);
            assert_eq!(alive, expected, "cell ({row}, {col})");
        }

        assert!(b.toggle(2, 3));
        assert_eq!(b, before);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_noop() {
        let mut b = board(&["O.", ".O"]);
        let before = b.clone();

        assert!(!b.toggle(2, 0));
        assert!(!b.toggle(0, 2));
        assert!(!b.toggle(usize::MAX, usize::MAX));
        assert_eq!(b, before);
        assert!(b.border_is_dead());
    }

    #[test]
    fn test_randomize_preserves_dimensions() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut b = Board::new(50, 50).unwrap();
        b.randomize_with(&mut rng);

        assert_eq!((b.rows(), b.cols()), (50, 50));
        assert_eq!(b.iter().count(), 2500);
        assert!(b.border_is_dead());

        // a fair fill of 2500 cells lands nowhere near the extremes
        let live = b.live_count();
        assert!(live > 1000 && live < 1500, "live = {live}");
    }

    #[test]
    fn test_border_stays_dead_after_steps() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut b = Board::new(12, 9).unwrap();
        b.randomize_with(&mut rng);
        for _ in 0..20 {
            b.step();
            assert!(b.border_is_dead());
        }
    }

    #[test]
    fn test_equality_ignores_scratch_buffer() {
        let mut a = board(&["....", ".OO.", ".OO.", "...."]);
        let b = a.clone();
        a.step();
        assert_eq!(a, b);
    }
}
