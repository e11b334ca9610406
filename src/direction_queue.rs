use std::collections::VecDeque;

use crate::input::{Direction, direction_change_is_valid};

/// Pending direction changes, applied at most one per tick.
///
/// The front element is the direction used by the next tick. The queue is
/// never empty: consuming only drops the front when something is behind it,
/// so several quick turns inside one tick window are applied in order on the
/// following ticks instead of overwriting each other.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    /// Creates a queue holding only `initial`.
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            pending: VecDeque::from([initial]),
        }
    }

    /// Appends `direction` unless it reverses the last queued direction.
    ///
    /// Returns whether the direction was queued. A rejected reversal is a
    /// normal outcome, not an error.
    pub fn enqueue(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.last(), direction) {
            return false;
        }

        self.pending.push_back(direction);
        true
    }

    /// Advances past the current direction when another is queued and
    /// returns the direction for this tick.
    pub fn consume_for_tick(&mut self) -> Direction {
        if self.pending.len() > 1 {
            let _ = self.pending.pop_front();
        }

        self.current()
    }

    /// Direction the next tick will start from.
    #[must_use]
    pub fn current(&self) -> Direction {
        *self
            .pending
            .front()
            .expect("direction queue must always hold one direction")
    }

    /// Most recently queued direction; reversal checks compare against it.
    #[must_use]
    pub fn last(&self) -> Direction {
        *self
            .pending
            .back()
            .expect("direction queue must always hold one direction")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Direction> {
        self.pending.iter()
    }
}

impl Default for DirectionQueue {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::DirectionQueue;
    use crate::input::Direction;

    #[test]
    fn new_queue_starts_moving_right() {
        let mut queue = DirectionQueue::default();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.consume_for_tick(), Direction::Right);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn reversal_of_last_queued_direction_is_dropped() {
        let mut queue = DirectionQueue::default();
        let before = queue.clone();

        assert!(!queue.enqueue(Direction::Left));
        assert_eq!(queue, before);
    }

    #[test]
    fn reversal_check_uses_last_queued_not_current() {
        let mut queue = DirectionQueue::default();

        // Up is fine while moving right.
        assert!(queue.enqueue(Direction::Up));
        // Down no longer reverses Right but does reverse the queued Up.
        assert!(!queue.enqueue(Direction::Down));

        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            vec![Direction::Right, Direction::Up]
        );
    }

    #[test]
    fn down_then_up_keeps_only_down() {
        let mut queue = DirectionQueue::default();

        assert!(queue.enqueue(Direction::Down));
        assert!(!queue.enqueue(Direction::Up));

        assert_eq!(queue.consume_for_tick(), Direction::Down);
        assert_eq!(queue.consume_for_tick(), Direction::Down);
    }

    #[test]
    fn queued_turns_apply_one_per_tick_in_order() {
        let mut queue = DirectionQueue::default();

        queue.enqueue(Direction::Down);
        queue.enqueue(Direction::Left);
        queue.enqueue(Direction::Up);

        assert_eq!(queue.consume_for_tick(), Direction::Down);
        assert_eq!(queue.consume_for_tick(), Direction::Left);
        assert_eq!(queue.consume_for_tick(), Direction::Up);
        assert_eq!(queue.consume_for_tick(), Direction::Up);
        assert!(!queue.is_empty());
    }

    #[test]
    fn repeating_the_current_direction_is_queued() {
        let mut queue = DirectionQueue::default();

        assert!(queue.enqueue(Direction::Right));
        assert_eq!(queue.len(), 2);
    }
}
