//! Errors raised by draw operations.

use thiserror::Error;

use crate::models::NumberToken;

/// Reasons a draw request was refused. None of these are fatal; callers
/// recover by leaving the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The token was already removed from the pool this game.
    #[error("token {0} has already been drawn")]
    AlreadyDrawn(NumberToken),
    /// Every token has been drawn.
    #[error("no tokens remain in the pool")]
    PoolExhausted,
    /// The value does not name a cell on the board.
    #[error("{0} is not a number between 1 and 90")]
    InvalidToken(u8),
}
