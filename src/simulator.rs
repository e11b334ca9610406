use tracing::debug;

use crate::food::FoodPlacer;
use crate::game::{EndReason, GameState};
use crate::input::Direction;

/// Outcome of one simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickResult {
    Continue,
    FoodEaten,
    Collided,
    /// Food was eaten and no free cell remains for the next one.
    BoardFull,
}

impl TickResult {
    /// Returns true when the step ended the session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Collided | Self::BoardFull)
    }
}

/// Advances a `GameState` one cell at a time.
#[derive(Debug, Clone)]
pub struct Simulator {
    placer: FoodPlacer,
}

impl Simulator {
    #[must_use]
    pub fn new(placer: FoodPlacer) -> Self {
        Self { placer }
    }

    /// Gives `GameState::new` access to the same random stream.
    pub fn placer_mut(&mut self) -> &mut FoodPlacer {
        &mut self.placer
    }

    /// Moves the snake one cell in `direction` and resolves the result.
    ///
    /// Walls are checked on all four edges regardless of travel direction.
    /// After a collision the relocated head is left in place so the final
    /// layout can be inspected.
    pub fn tick(&mut self, state: &mut GameState, direction: Direction) -> TickResult {
        state.tick_count += 1;
        let head = state.snake.advance(direction);

        if !head.is_within_bounds(state.bounds()) {
            state.stop(EndReason::Wall);
            return TickResult::Collided;
        }

        if state.snake.head_overlaps_body() {
            state.stop(EndReason::SelfCollision);
            return TickResult::Collided;
        }

        if head != state.food.position {
            return TickResult::Continue;
        }

        state.score += 1;
        state.snake.grow();

        match self.placer.place(&state.snake, state.bounds()) {
            Ok(food) => {
                debug!(
                    score = state.score,
                    x = food.position.x,
                    y = food.position.y,
                    "food placed"
                );
                state.food = food;
                TickResult::FoodEaten
            }
            Err(error) => {
                debug!(score = state.score, %error, "no cell left for food");
                state.stop(EndReason::BoardFull);
                TickResult::BoardFull
            }
        }
    }
}
