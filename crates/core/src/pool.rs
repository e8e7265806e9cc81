//! Pool of tokens still waiting to be drawn.

use rand::Rng;

use crate::{
    error::DrawError,
    models::{NumberToken, TOKEN_COUNT},
};

/// Tracks which tokens remain undrawn.
///
/// Undrawn tokens live in an explicit list so a random draw picks an index
/// directly instead of retrying on already-drawn numbers. Removal uses
/// `swap_remove`, which reorders the list but keeps the pick uniform over
/// whatever remains.
#[derive(Debug, Clone)]
pub struct DrawPool {
    undrawn: Vec<NumberToken>,
    drawn: [bool; TOKEN_COUNT as usize],
}

impl Default for DrawPool {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawPool {
    /// Create a full pool of 90 tokens.
    pub fn new() -> Self {
        Self {
            undrawn: NumberToken::all().collect(),
            drawn: [false; TOKEN_COUNT as usize],
        }
    }

    /// Number of tokens not yet drawn.
    pub fn remaining(&self) -> usize {
        self.undrawn.len()
    }

    /// Number of tokens drawn since the last reset.
    pub fn drawn_count(&self) -> usize {
        usize::from(TOKEN_COUNT) - self.undrawn.len()
    }

    /// Whether every token has been drawn.
    pub fn is_empty(&self) -> bool {
        self.undrawn.is_empty()
    }

    /// Whether the token was drawn since the last reset.
    pub fn is_drawn(&self, token: NumberToken) -> bool {
        self.drawn[token.index()]
    }

    /// Remove a specific token from the pool.
    pub fn mark_drawn(&mut self, token: NumberToken) -> Result<(), DrawError> {
        if self.is_drawn(token) {
            return Err(DrawError::AlreadyDrawn(token));
        }
        let position = self
            .undrawn
            .iter()
            .position(|candidate| *candidate == token)
            .ok_or(DrawError::AlreadyDrawn(token))?;
        self.undrawn.swap_remove(position);
        self.drawn[token.index()] = true;
        Ok(())
    }

    /// Draw a uniformly random token using the thread-local generator.
    pub fn draw_random(&mut self) -> Result<NumberToken, DrawError> {
        self.draw_random_with(&mut rand::rng())
    }

    /// Draw a uniformly random token from the remaining ones.
    pub fn draw_random_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<NumberToken, DrawError> {
        if self.undrawn.is_empty() {
            return Err(DrawError::PoolExhausted);
        }
        let index = rng.random_range(0..self.undrawn.len());
        let token = self.undrawn.swap_remove(index);
        self.drawn[token.index()] = true;
        Ok(token)
    }

    /// Put every token back.
    pub fn reset(&mut self) {
        self.undrawn.clear();
        self.undrawn.extend(NumberToken::all());
        self.drawn = [false; TOKEN_COUNT as usize];
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn token(value: u8) -> NumberToken {
        NumberToken::new(value).unwrap()
    }

    #[test]
    fn second_mark_of_same_token_is_rejected() {
        let mut pool = DrawPool::new();
        assert_eq!(pool.mark_drawn(token(5)), Ok(()));
        assert_eq!(pool.remaining(), 89);
        assert_eq!(
            pool.mark_drawn(token(5)),
            Err(DrawError::AlreadyDrawn(token(5)))
        );
        assert_eq!(pool.remaining(), 89);
    }

    #[test]
    fn draws_five_forty_seven_then_five_again() {
        let mut pool = DrawPool::new();
        pool.mark_drawn(token(5)).unwrap();
        assert_eq!(pool.remaining(), 89);
        pool.mark_drawn(token(47)).unwrap();
        assert_eq!(pool.remaining(), 88);
        assert!(pool.mark_drawn(token(5)).is_err());
        assert_eq!(pool.remaining(), 88);
        assert_eq!(pool.drawn_count(), 2);
    }

    #[test]
    fn random_draws_cover_every_token_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = DrawPool::new();
        for cycle in 0..3 {
            let mut seen = HashSet::new();
            for _ in 0..TOKEN_COUNT {
                let drawn = pool.draw_random_with(&mut rng).unwrap();
                assert!(seen.insert(drawn), "cycle {cycle} repeated {drawn}");
                assert!(pool.is_drawn(drawn));
            }
            assert_eq!(seen.len(), 90);
            assert!(pool.is_empty());
            assert_eq!(
                pool.draw_random_with(&mut rng),
                Err(DrawError::PoolExhausted)
            );
            pool.reset();
        }
    }

    #[test]
    fn random_draw_skips_manually_drawn_tokens() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = DrawPool::new();
        for value in 1..=89 {
            pool.mark_drawn(token(value)).unwrap();
        }
        assert_eq!(pool.draw_random_with(&mut rng), Ok(token(90)));
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut pool = DrawPool::new();
        pool.mark_drawn(token(12)).unwrap();
        pool.reset();
        pool.reset();
        assert_eq!(pool.remaining(), 90);
        assert!(!pool.is_drawn(token(12)));
        assert!(pool.mark_drawn(token(12)).is_ok());
    }
}
