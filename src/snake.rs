use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{GridSize, INITIAL_SNAKE_LEN};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Signed so that a head stepping off the board can still be represented
/// and inspected after the collision that ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body ordered from tail (front) to head (back).
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    vacated: Option<Position>,
}

impl Snake {
    /// Creates the canonical horizontal starting snake, facing right.
    #[must_use]
    pub fn centered(bounds: GridSize) -> Self {
        let tail_x = i32::from(bounds.width / 2) - 2;
        let y = i32::from(bounds.height.saturating_sub(1) / 2);
        let segments = (0..INITIAL_SNAKE_LEN as i32)
            .map(|offset| Position {
                x: tail_x + offset,
                y,
            })
            .collect();

        Self::from_segments(segments)
    }

    /// Creates a snake from explicit body segments (front is tail, back is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            vacated: None,
        }
    }

    /// Moves the tail segment in front of the head, one cell in `direction`.
    ///
    /// Returns the new head. The cell the tail left is remembered so that
    /// `grow` can re-occupy it.
    pub fn advance(&mut self, direction: Direction) -> Position {
        let next_head = self.head().step(direction);

        self.vacated = self.body.pop_front();
        self.body.push_back(next_head);

        next_head
    }

    /// Adds one segment at the cell vacated by the last `advance`.
    pub fn grow(&mut self) {
        if let Some(vacated) = self.vacated.take() {
            self.body.push_front(vacated);
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .take(self.body.len().saturating_sub(1))
            .any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
