#![allow(missing_docs)]

//! Game session state machine and its input events.

mod game;
mod models;

pub use game::GameSession;
pub use models::{DispatchOutcome, DrawRecord, DrawSource, GameEvent, SessionState};
