//! Boundary between the game session and whatever front-end drives it.

use anyhow::Result;

use crate::models::NumberToken;

/// Result of the blocking name prompt shown when the board is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    /// Text typed into the prompt.
    pub text: String,
    /// Whether the prompt was accepted rather than dismissed.
    pub confirmed: bool,
}

impl NameEntry {
    /// An accepted prompt carrying the given text.
    pub fn confirmed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confirmed: true,
        }
    }

    /// A dismissed prompt.
    pub fn cancelled() -> Self {
        Self::default()
    }

    /// The name to congratulate, if the prompt was accepted with a non-blank name.
    pub fn winner_name(&self) -> Option<&str> {
        if !self.confirmed {
            return None;
        }
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Collaborators the session calls into while processing a draw.
///
/// Every method runs synchronously on the caller's thread; `announce`,
/// `request_name` and `congratulate` block until the user-facing action has
/// finished.
pub trait SessionHost {
    /// A cell was drawn and must no longer accept activation.
    fn cell_drawn(&mut self, _token: NumberToken) {}

    /// Every cell returns to its undrawn look.
    fn cells_reset(&mut self) {}

    /// Speak the drawn number, returning once playback ends.
    fn announce(&mut self, token: NumberToken) -> Result<()>;

    /// Ask for the winner's name.
    fn request_name(&mut self) -> NameEntry;

    /// Show the congratulation dialog and wait for it to be acknowledged.
    fn congratulate(&mut self, name: &str);
}
