#![warn(clippy::all, missing_docs)]

//! Core game logic for Bingo90.
//!
//! This crate holds the draw pool, the game session state machine, the
//! collaborator boundary a front-end implements, and configuration
//! handling. It has no terminal or audio dependencies of its own.

pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod pool;
pub mod session;

pub use config::{AppConfig, SpeechSettings};
pub use error::DrawError;
pub use host::{NameEntry, SessionHost};
pub use models::NumberToken;
pub use pool::DrawPool;
pub use session::{DispatchOutcome, DrawRecord, DrawSource, GameEvent, GameSession, SessionState};
