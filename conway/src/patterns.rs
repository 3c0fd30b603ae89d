use tracing::debug;

use crate::board::Board;
use crate::errors;

pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        rows: &[".O.", "..O", "OOO"],
    },
    Pattern {
        name: "Blinker",
        rows: &["OOO"],
    },
    Pattern {
        name: "Toad",
        rows: &[".OOO", "OOO."],
    },
    Pattern {
        name: "Beacon",
        rows: &["OO..", "OO..", "..OO", "..OO"],
    },
    Pattern {
        name: "Pulsar",
        rows: &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    },
    Pattern {
        name: "R-pentomino",
        rows: &[".OO", "OO.", ".O."],
    },
    Pattern {
        name: "Gosper Glider Gun",
        rows: &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    },
];

impl Pattern {
    pub fn to_board(&self) -> Result<Board, errors::Board> {
        Board::from_rows(self.rows)
    }
}

/// Clears `board` and stamps `pattern` centred on it. Cells that fall
/// outside the board are dropped.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern) -> Result<(), errors::Board> {
    let stamp = pattern.to_board()?;
    board.clear();

    let row_offset = board.rows() as isize / 2 - stamp.rows() as isize / 2;
    let col_offset = board.cols() as isize / 2 - stamp.cols() as isize / 2;
    debug!(
        "stamping {} ({}x{}) at offset ({row_offset}, {col_offset})",
        pattern.name,
        stamp.rows(),
        stamp.cols()
    );

    for (row, col, alive) in stamp.iter().filter(|&(_, _, alive)| alive) {
        let r = row as isize + row_offset;
        let c = col as isize + col_offset;
        if r >= 0 && c >= 0 {
            board.set(r as usize, c as usize, alive);
        }
    }

    Ok(())
}
