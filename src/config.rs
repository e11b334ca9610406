use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Difficulty tier selecting the base tick interval.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Hard,
    Medium,
    Low,
}

impl Difficulty {
    /// Base interval between ticks before any speed modifier is applied.
    #[must_use]
    pub fn base_interval(self) -> Duration {
        match self {
            Self::Hard => Duration::from_millis(HARD_INTERVAL_MS),
            Self::Medium => Duration::from_millis(MEDIUM_INTERVAL_MS),
            Self::Low => Duration::from_millis(LOW_INTERVAL_MS),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Construction-time settings for one game. Never mutated after validation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Pixel size of one cell. Only meaningful to pixel renderers.
    pub cell_size_px: u16,
    pub difficulty: Difficulty,
}

impl GameConfig {
    /// Derives the grid from a canvas size measured in pixels.
    #[must_use]
    pub fn from_canvas(
        width_px: u16,
        height_px: u16,
        cell_size_px: u16,
        difficulty: Difficulty,
    ) -> Self {
        let cell = cell_size_px.max(1);
        Self {
            grid: GridSize {
                width: width_px / cell,
                height: height_px / cell,
            },
            cell_size_px: cell,
            difficulty,
        }
    }

    /// Checks that the canonical starting snake fits on the grid.
    pub fn validate(self) -> Result<Self, GameError> {
        if self.grid.width < MIN_GRID_WIDTH || self.grid.height < MIN_GRID_HEIGHT {
            return Err(GameError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
            });
        }

        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_canvas(
            DEFAULT_CANVAS_WIDTH_PX,
            DEFAULT_CANVAS_HEIGHT_PX,
            DEFAULT_CELL_SIZE_PX,
            Difficulty::default(),
        )
    }
}

/// Base tick interval for the hard tier in milliseconds.
pub const HARD_INTERVAL_MS: u64 = 100;

/// Base tick interval for the medium tier in milliseconds.
pub const MEDIUM_INTERVAL_MS: u64 = 300;

/// Base tick interval for the low tier in milliseconds.
pub const LOW_INTERVAL_MS: u64 = 500;

pub const DEFAULT_CANVAS_WIDTH_PX: u16 = 600;
pub const DEFAULT_CANVAS_HEIGHT_PX: u16 = 400;
pub const DEFAULT_CELL_SIZE_PX: u16 = 20;

/// Length of the snake at the start of every session.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Narrowest grid that still holds the starting snake.
pub const MIN_GRID_WIDTH: u16 = 4;

pub const MIN_GRID_HEIGHT: u16 = 1;

/// Host frame pacing used by the terminal runtime.
pub const HOST_FRAME_INTERVAL: Duration = Duration::from_millis(16);
