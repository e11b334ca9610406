use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::GridSize;
use crate::error::GameError;
use crate::snake::{Position, Snake};

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// Picks food cells uniformly among the cells the snake does not cover.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    /// Creates a deterministic placer for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a placer seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Places food on a free cell, or reports `BoardFull` when none is left.
    pub fn place(&mut self, snake: &Snake, bounds: GridSize) -> Result<Food, GameError> {
        spawn_position(&mut self.rng, bounds, snake).map(Food::new)
    }
}

/// Chooses a free position that is not currently occupied by the snake.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, GameError> {
    let candidates = free_cells(bounds, snake);

    if candidates.is_empty() {
        return Err(GameError::BoardFull);
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
