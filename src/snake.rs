// A cell is addressed as (row, col). Directions are deltas added componentwise,
// so Up/Down move along `col` and Left/Right move along `row`.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta (d_row, d_col) for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.reverse() == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The cell one step away in `direction`. May lie outside the board.
    pub fn neighbor(&self, direction: Direction) -> Cell {
        let (d_row, d_col) = direction.delta();
        Cell::new(self.row + d_row, self.col + d_col)
    }

    pub fn is_within(&self, grid_size: usize) -> bool {
        let n = grid_size as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// Every cell of an N×N board, row-major.
    pub fn all(grid_size: usize) -> impl Iterator<Item = Cell> {
        let n = grid_size as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
