use std::time::Duration;

/// Board side length.
pub const GRID_SIZE: usize = 10;

/// Simulation ticks per second.
pub const TICKS_PER_SECOND: u32 = 4;

/// Fixed parameters handed to a game at construction.
///
/// The values never change for the lifetime of a [`crate::game::GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Width and height of the square board
    pub grid_size: usize,
    /// Ticks per second driven by the shell loop
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl GameConfig {
    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Time between two ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }
}
