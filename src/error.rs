use thiserror::Error;

use crate::snake::Cell;

/// Errors raised by the terminal shell.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Failed to configure terminal: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Keyboard input stream closed")]
    InputClosed,
}

/// Reasons a hand-built board layout is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Snake needs at least two segments, got {0}")]
    TooShort(usize),

    #[error("Cell {0} lies outside the board")]
    OutOfBounds(Cell),

    #[error("Snake occupies {0} more than once")]
    DuplicateSegment(Cell),

    #[error("Fruit at {0} overlaps the snake")]
    FruitOnSnake(Cell),
}
