use thiserror::Error;

use crate::scheduler::FrameTicket;

/// Conditions the simulation core reports to its host.
///
/// None of these are faults of the host. `BoardFull` ends a session the same
/// way a collision does, and `StaleTick` only means a frame callback outlived
/// the session or loop it was requested for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    #[error("no free cell left on the board for food")]
    BoardFull,

    #[error("frame {ticket:?} does not belong to the active loop (session {current_session})")]
    StaleTick {
        ticket: FrameTicket,
        current_session: u64,
    },

    #[error("host has not signalled readiness; call mark_ready() before start()")]
    NotReady,

    #[error("grid {width}x{height} cannot hold the starting snake")]
    GridTooSmall { width: u16, height: u16 },
}
