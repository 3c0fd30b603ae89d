use quick_error::quick_error;

quick_error! {
    #[derive(Debug, PartialEq, Eq)]
    pub enum Board {
        EmptyDimensions(rows: usize, cols: usize) {
            display("board dimensions must be non-zero, got {}x{}", rows, cols)
        }
        EmptyPattern {
            display("pattern has no rows")
        }
        RaggedRow(row: usize, expected: usize, found: usize) {
            display("row {} has {} cells, expected {}", row, found, expected)
        }
        InvalidCell(row: usize, col: usize, ch: char) {
            display("invalid cell {:?} at row {}, col {}", ch, row, col)
        }
    }
}

quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum Config {
        InvalidCellSize(size: f32) {
            display("cell size must be positive and finite, got {}", size)
        }
        ZeroInterval {
            display("tick interval must be non-zero")
        }
        Board(err: Board) {
            from()
            display("{}", err)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum App {
        Config(err: Config) {
            from()
            display("invalid settings: {}", err)
        }
        Eframe(err: eframe::Error) {
            from()
            display("{}", err)
        }
    }
}
