// Game state machine for a single run of snake. It holds no I/O resources: the
// shell calls start/reset/set_direction and one step per tick, then reads
// phase/snake/fruit to draw. Calls that do not apply to the current phase are
// ignored rather than reported.

use std::collections::{HashSet, VecDeque};

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::LayoutError;
use crate::fruit::FruitPlacer;
use crate::snake::{Cell, Direction};

const INITIAL_SNAKE: [Cell; 2] = [Cell::new(5, 5), Cell::new(5, 6)];
const INITIAL_DIRECTION: Direction = Direction::Up;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    GameOver,
    Won,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }
}

/// What a single [`GameState::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not playing, nothing changed
    Idle,
    Moved,
    Ate,
    HitWall,
    HitSelf,
    Won,
}

#[derive(Debug, Clone)]
pub struct GameState<R> {
    config: GameConfig,
    snake: VecDeque<Cell>, // head is the first element
    direction: Direction,
    fruit: Option<Cell>,
    phase: Phase,
    placer: FruitPlacer<R>,
}

impl<R: Rng> GameState<R> {
    /// A fresh game waiting in [`Phase::Start`].
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut placer = FruitPlacer::new(rng, config.grid_size);
        let snake: VecDeque<Cell> = INITIAL_SNAKE.into_iter().collect();
        let fruit = placer.place(&snake);
        GameState {
            config,
            snake,
            direction: INITIAL_DIRECTION,
            fruit,
            phase: Phase::Start,
            placer,
        }
    }

    /// Builds a game from an explicit board layout, head first.
    pub fn with_layout(
        config: GameConfig,
        snake: impl IntoIterator<Item = Cell>,
        direction: Direction,
        fruit: Option<Cell>,
        phase: Phase,
        rng: R,
    ) -> Result<Self, LayoutError> {
        let snake: VecDeque<Cell> = snake.into_iter().collect();
        if snake.len() < 2 {
            return Err(LayoutError::TooShort(snake.len()));
        }

        let mut seen = HashSet::with_capacity(snake.len());
        for cell in &snake {
            if !cell.is_within(config.grid_size) {
                return Err(LayoutError::OutOfBounds(*cell));
            }
            if !seen.insert(*cell) {
                return Err(LayoutError::DuplicateSegment(*cell));
            }
        }

        if let Some(fruit) = fruit {
            if !fruit.is_within(config.grid_size) {
                return Err(LayoutError::OutOfBounds(fruit));
            }
            if seen.contains(&fruit) {
                return Err(LayoutError::FruitOnSnake(fruit));
            }
        }

        Ok(GameState {
            config,
            snake,
            direction,
            fruit,
            phase,
            placer: FruitPlacer::new(rng, config.grid_size),
        })
    }

    /// Leaves the start screen.
    pub fn start(&mut self) {
        if self.phase == Phase::Start {
            info!("game started");
            self.phase = Phase::Playing;
        }
    }

    /// Begins a new run after the previous one ended.
    pub fn reset(&mut self) {
        if !self.phase.is_terminal() {
            return;
        }
        self.snake = INITIAL_SNAKE.into_iter().collect();
        self.direction = INITIAL_DIRECTION;
        self.fruit = self.placer.place(&self.snake);
        self.phase = Phase::Playing;
        info!("game reset");
    }

    /// Turns the snake. Reversing onto the neck is ignored. The check is made
    /// against the committed heading, so the last accepted call before a tick wins.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase != Phase::Playing || self.direction.is_opposite(direction) {
            return;
        }
        self.direction = direction;
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.phase != Phase::Playing {
            return StepOutcome::Idle;
        }

        let new_head = self.head().neighbor(self.direction);

        if !new_head.is_within(self.config.grid_size) {
            info!("hit the wall at {}, game over", new_head);
            self.phase = Phase::GameOver;
            return StepOutcome::HitWall;
        }

        // the tail has not moved yet, so it still counts as occupied
        if self.snake.contains(&new_head) {
            info!("bit itself at {}, game over", new_head);
            self.phase = Phase::GameOver;
            return StepOutcome::HitSelf;
        }

        self.snake.push_front(new_head);

        if self.fruit != Some(new_head) {
            self.snake.pop_back();
            return StepOutcome::Moved;
        }

        if self.snake.len() == self.config.cell_count() {
            info!("board filled, game won");
            // the eaten fruit is cleared instead of left under the head, so a
            // present fruit is never on the snake
            self.fruit = None;
            self.phase = Phase::Won;
            return StepOutcome::Won;
        }

        self.fruit = self.placer.place(&self.snake);
        StepOutcome::Ate
    }
}

impl<R> GameState<R> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fruit(&self) -> Option<Cell> {
        self.fruit
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fruit eaten during the current run.
    pub fn score(&self) -> usize {
        self.snake.len() - INITIAL_SNAKE.len()
    }
}
