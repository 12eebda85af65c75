use std::collections::HashSet;

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::snake::Cell;

/// Picks fruit cells uniformly among the empty cells of the board.
#[derive(Debug, Clone)]
pub struct FruitPlacer<R> {
    rng: R,
    grid_size: usize,
}

impl<R: Rng> FruitPlacer<R> {
    pub fn new(rng: R, grid_size: usize) -> Self {
        Self { rng, grid_size }
    }

    /// Returns an unoccupied cell, or `None` when the board is full.
    pub fn place<'a, I>(&mut self, occupied: I) -> Option<Cell>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let occupied: HashSet<&Cell> = occupied.into_iter().collect();
        let empty_cells: Vec<Cell> = Cell::all(self.grid_size)
            .filter(|cell| !occupied.contains(cell))
            .collect();

        let fruit = empty_cells.choose(&mut self.rng).copied();
        match fruit {
            Some(cell) => debug!("fruit placed at {} ({} empty cells)", cell, empty_cells.len()),
            None => debug!("board full, no fruit placed"),
        }
        fruit
    }
}
