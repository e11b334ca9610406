use serde::{Deserialize, Serialize};

use crate::config::GridSize;
use crate::direction_queue::DirectionQueue;
use crate::error::GameError;
use crate::food::{Food, FoodPlacer};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Actively ticking.
    Start,
    /// Ticking suspended; everything else frozen.
    Paused,
    /// Terminal until an explicit restart.
    Stopped,
}

/// Why a session reached `Stopped`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum EndReason {
    Wall,
    SelfCollision,
    /// Every cell is covered by the snake. Counts as a win.
    BoardFull,
}

/// Complete mutable game state for one session.
///
/// Replaced wholesale on restart, never repaired after `Stopped`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Last placed food. Once the board is full this is the eaten cell, now
    /// under the head; read `food_position` instead.
    pub food: Food,
    pub directions: DirectionQueue,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    bounds: GridSize,
}

impl GameState {
    /// Builds the canonical starting state with freshly placed food.
    pub fn new(bounds: GridSize, placer: &mut FoodPlacer) -> Result<Self, GameError> {
        let snake = Snake::centered(bounds);
        let food = placer.place(&snake, bounds)?;

        Ok(Self::with_layout(bounds, snake, food))
    }

    /// Builds a state around an explicit snake and food layout.
    #[must_use]
    pub fn with_layout(bounds: GridSize, snake: Snake, food: Food) -> Self {
        Self {
            snake,
            food,
            directions: DirectionQueue::new(Direction::Right),
            score: 0,
            tick_count: 0,
            status: GameStatus::Start,
            end_reason: None,
            bounds,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Moves the state to `Stopped` and records why.
    pub fn stop(&mut self, reason: EndReason) {
        self.status = GameStatus::Stopped;
        self.end_reason = Some(reason);
    }

    /// Food on the board, or `None` once the snake has filled it.
    #[must_use]
    pub fn food_position(&self) -> Option<Position> {
        if self.end_reason == Some(EndReason::BoardFull) {
            return None;
        }

        Some(self.food.position)
    }

    /// Copies out everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.bounds,
            snake_segments: self.snake.segments().copied().collect(),
            food_position: self.food_position(),
            score: self.score,
            status: self.status,
            end_reason: self.end_reason,
            tick_count: self.tick_count,
        }
    }
}

/// Read-only view of a session handed to renderers and other observers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: GridSize,
    /// Ordered from tail to head.
    pub snake_segments: Vec<Position>,
    /// `None` after the snake has filled the board.
    pub food_position: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub tick_count: u64,
}

impl GameSnapshot {
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.snake_segments.last().copied()
    }
}
