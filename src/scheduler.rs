use std::time::Duration;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::food::FoodPlacer;
use crate::game::{EndReason, GameSnapshot, GameState, GameStatus};
use crate::input::{Direction, GameInput, SpeedModifier};
use crate::simulator::{Simulator, TickResult};
use crate::snake::Position;

/// Handle for one requested frame callback.
///
/// Only the most recently issued ticket is honoured, which keeps exactly one
/// loop alive across restarts and pause/resume cycles.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct FrameTicket {
    session: u64,
    frame: u64,
}

impl FrameTicket {
    #[must_use]
    pub fn session(self) -> u64 {
        self.session
    }
}

/// What a single `on_frame` call did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameOutcome {
    /// The ticket was superseded; nothing was touched.
    Stale,
    /// The session is not running; no further frame was requested.
    Idle,
    /// The interval has not elapsed yet.
    Waiting,
    Ticked(TickResult),
}

/// End-of-game details for the host's message.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameSummary {
    pub score: u32,
    pub length: usize,
    pub reason: EndReason,
}

/// Drives a `Simulator` from host frame callbacks.
///
/// The scheduler owns the only mutable `GameState`. Hosts issue commands and
/// read snapshots; they never touch the state directly.
#[derive(Debug)]
pub struct Scheduler {
    config: GameConfig,
    simulator: Simulator,
    state: GameState,
    speed_modifier: SpeedModifier,
    anchor: Option<Duration>,
    session: u64,
    next_frame_id: u64,
    pending_frame: Option<FrameTicket>,
    ready: bool,
}

impl Scheduler {
    /// Creates an idle scheduler with a laid-out but not yet running session.
    pub fn new(config: GameConfig, placer: FoodPlacer) -> Result<Self, GameError> {
        let config = config.validate()?;
        let mut simulator = Simulator::new(placer);
        let mut state = GameState::new(config.grid, simulator.placer_mut())?;
        state.status = GameStatus::Stopped;

        Ok(Self {
            config,
            simulator,
            state,
            speed_modifier: SpeedModifier::None,
            anchor: None,
            session: 0,
            next_frame_id: 0,
            pending_frame: None,
            ready: false,
        })
    }

    /// Records that the host has finished its own preparation.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Starts a fresh session. Identical to `restart`.
    pub fn start(&mut self) -> Result<FrameTicket, GameError> {
        self.restart()
    }

    /// Discards the current session and begins a new one.
    ///
    /// Any ticket issued for the old session becomes stale.
    pub fn restart(&mut self) -> Result<FrameTicket, GameError> {
        if !self.ready {
            return Err(GameError::NotReady);
        }

        self.state = GameState::new(self.config.grid, self.simulator.placer_mut())?;
        self.session += 1;
        self.anchor = None;
        info!(session = self.session, "session started");

        Ok(self.request_frame())
    }

    /// Toggles between `Start` and `Paused`. Has no effect once stopped.
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Start => {
                self.state.status = GameStatus::Paused;
                self.pending_frame = None;
                debug!(session = self.session, "paused");
            }
            GameStatus::Paused => {
                self.state.status = GameStatus::Start;
                self.anchor = None;
                self.request_frame();
                debug!(session = self.session, "resumed");
            }
            GameStatus::Stopped => {}
        }
    }

    /// Queues a turn in any status; only reversals of the last queued turn
    /// are rejected. Turns queued while paused apply after resuming.
    pub fn enqueue_direction(&mut self, direction: Direction) -> bool {
        self.state.directions.enqueue(direction)
    }

    /// Takes effect on the next frame evaluation.
    pub fn set_speed_modifier(&mut self, modifier: SpeedModifier) {
        self.speed_modifier = modifier;
    }

    /// Routes one host input command. Quit is left to the host.
    pub fn apply_input(&mut self, input: GameInput) -> Result<(), GameError> {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.enqueue_direction(direction);
            }
            GameInput::Pause => self.toggle_pause(),
            GameInput::Speed(modifier) => self.set_speed_modifier(modifier),
            GameInput::Restart => {
                self.restart()?;
            }
            GameInput::Quit => {}
        }

        Ok(())
    }

    /// Ticket the host should pass to its next `on_frame` call, if a frame
    /// is wanted at all.
    #[must_use]
    pub fn next_frame(&self) -> Option<FrameTicket> {
        self.pending_frame
    }

    /// Checks that `ticket` is the outstanding frame request.
    pub fn validate_ticket(&self, ticket: FrameTicket) -> Result<(), GameError> {
        if self.pending_frame == Some(ticket) {
            Ok(())
        } else {
            Err(GameError::StaleTick {
                ticket,
                current_session: self.session,
            })
        }
    }

    /// Runs at most one tick for a host frame at `timestamp`.
    ///
    /// Timestamps only need to be monotonic within a session; their origin
    /// is irrelevant.
    pub fn on_frame(&mut self, ticket: FrameTicket, timestamp: Duration) -> FrameOutcome {
        if let Err(error) = self.validate_ticket(ticket) {
            debug!(%error, "ignoring frame");
            return FrameOutcome::Stale;
        }
        self.pending_frame = None;

        if self.state.status != GameStatus::Start {
            return FrameOutcome::Idle;
        }

        let anchor = *self.anchor.get_or_insert(timestamp);
        if timestamp.saturating_sub(anchor) < self.effective_interval() {
            self.request_frame();
            return FrameOutcome::Waiting;
        }

        self.anchor = None;
        let direction = self.state.directions.consume_for_tick();
        let result = self.simulator.tick(&mut self.state, direction);

        if result.is_terminal() {
            info!(
                session = self.session,
                score = self.state.score,
                reason = ?self.state.end_reason,
                "game over"
            );
        } else {
            self.request_frame();
        }

        FrameOutcome::Ticked(result)
    }

    /// Interval between ticks with the current speed modifier applied.
    #[must_use]
    pub fn effective_interval(&self) -> Duration {
        let base = self.config.difficulty.base_interval();
        match self.speed_modifier {
            SpeedModifier::None => base,
            SpeedModifier::Faster => base / 2,
            SpeedModifier::Slower => base * 2,
        }
    }

    /// Final result once the session has ended.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        if self.state.status != GameStatus::Stopped {
            return None;
        }

        self.state.end_reason.map(|reason| GameSummary {
            score: self.state.score,
            length: self.state.snake.len(),
            reason,
        })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn food_position(&self) -> Option<Position> {
        self.state.food_position()
    }

    /// Segments ordered from tail to head.
    pub fn snake_segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.state.snake.segments().copied()
    }

    #[must_use]
    pub fn speed_modifier(&self) -> SpeedModifier {
        self.speed_modifier
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Read-only access for renderers.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    fn request_frame(&mut self) -> FrameTicket {
        self.next_frame_id += 1;
        let ticket = FrameTicket {
            session: self.session,
            frame: self.next_frame_id,
        };
        self.pending_frame = Some(ticket);
        ticket
    }
}
