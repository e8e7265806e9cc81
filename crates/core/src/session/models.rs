use chrono::{DateTime, Local};

use crate::{error::DrawError, models::NumberToken};

/// Coarse lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for draws; auto-draw is off.
    Idle,
    /// The recurring auto-draw timer is scheduled.
    AutoDrawing,
    /// Every token has been drawn.
    Complete,
}

/// Where a draw came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// A grid cell was activated directly.
    Cell,
    /// The Generate control was used.
    Generate,
    /// The auto-draw timer fired.
    Auto,
}

/// One entry in the draw history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    pub token: NumberToken,
    pub source: DrawSource,
    /// Tokens still undrawn after this draw.
    pub remaining: usize,
    pub drawn_at: DateTime<Local>,
}

/// Typed input events routed through [`GameSession::dispatch`](super::GameSession::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CellActivated(NumberToken),
    GenerateRequested,
    AutoStartRequested,
    AutoStopRequested,
    ResetRequested,
    TimerTick,
}

/// What a dispatched event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A token was drawn.
    Drawn(DrawRecord),
    /// The draw was refused and state is unchanged.
    Ignored(DrawError),
    /// Auto-draw was switched on or off.
    AutoDraw(bool),
    /// The request did not change anything.
    Unchanged,
    /// The session was returned to its initial state.
    Reset,
}
