use chrono::Local;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{
    error::DrawError,
    host::SessionHost,
    models::NumberToken,
    pool::DrawPool,
};

use super::models::{DispatchOutcome, DrawRecord, DrawSource, GameEvent, SessionState};

/// State of one bingo game: the pool, the last draw, and the auto-draw flag.
///
/// The session never talks to a UI directly. Each operation that needs a
/// collaborator takes a [`SessionHost`], which keeps the rules usable from
/// the terminal front-end and from tests alike.
#[derive(Debug)]
pub struct GameSession {
    pool: DrawPool,
    last_drawn: Option<NumberToken>,
    auto_draw: bool,
    history: Vec<DrawRecord>,
    winner: Option<String>,
    rng: StdRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Session with a deterministic random source.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            pool: DrawPool::new(),
            last_drawn: None,
            auto_draw: false,
            history: Vec::new(),
            winner: None,
            rng,
        }
    }

    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    pub fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    pub fn last_drawn(&self) -> Option<NumberToken> {
        self.last_drawn
    }

    pub fn auto_draw_active(&self) -> bool {
        self.auto_draw
    }

    /// Draws made since the last reset, oldest first.
    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    /// Name entered when the board was cleared, if any.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn state(&self) -> SessionState {
        if self.pool.is_empty() {
            SessionState::Complete
        } else if self.auto_draw {
            SessionState::AutoDrawing
        } else {
            SessionState::Idle
        }
    }

    /// Route a UI event to the matching operation. Refused draws are logged
    /// and reported as [`DispatchOutcome::Ignored`].
    pub fn dispatch(&mut self, event: GameEvent, host: &mut dyn SessionHost) -> DispatchOutcome {
        let result = match event {
            GameEvent::CellActivated(token) => self.record_draw(token, host).map(Some),
            GameEvent::GenerateRequested => self.draw_random(host).map(Some),
            GameEvent::TimerTick => self.tick(host),
            GameEvent::AutoStartRequested => {
                return if self.start_auto_draw() {
                    DispatchOutcome::AutoDraw(true)
                } else {
                    DispatchOutcome::Unchanged
                };
            }
            GameEvent::AutoStopRequested => {
                return if self.stop_auto_draw() {
                    DispatchOutcome::AutoDraw(false)
                } else {
                    DispatchOutcome::Unchanged
                };
            }
            GameEvent::ResetRequested => {
                self.reset_game(host);
                return DispatchOutcome::Reset;
            }
        };

        match result {
            Ok(Some(record)) => DispatchOutcome::Drawn(record),
            Ok(None) => DispatchOutcome::Unchanged,
            Err(err) => {
                debug!(?event, %err, "Draw ignored");
                DispatchOutcome::Ignored(err)
            }
        }
    }

    /// Record a draw of a specific token, typically from a grid cell.
    ///
    /// A token that was already drawn is refused without announcing or
    /// counting it again.
    pub fn record_draw(
        &mut self,
        token: NumberToken,
        host: &mut dyn SessionHost,
    ) -> Result<DrawRecord, DrawError> {
        self.pool.mark_drawn(token)?;
        Ok(self.complete_draw(token, DrawSource::Cell, host))
    }

    /// Draw a random undrawn token.
    pub fn draw_random(&mut self, host: &mut dyn SessionHost) -> Result<DrawRecord, DrawError> {
        self.draw_from_pool(DrawSource::Generate, host)
    }

    /// Handle one auto-draw timer tick. Does nothing unless auto-draw is on.
    pub fn tick(&mut self, host: &mut dyn SessionHost) -> Result<Option<DrawRecord>, DrawError> {
        if !self.auto_draw {
            return Ok(None);
        }
        self.draw_from_pool(DrawSource::Auto, host).map(Some)
    }

    /// Turn auto-draw on. Returns `false` if it was already on or the board is complete.
    pub fn start_auto_draw(&mut self) -> bool {
        if self.auto_draw || self.pool.is_empty() {
            return false;
        }
        self.auto_draw = true;
        info!("Auto-draw started");
        true
    }

    /// Turn auto-draw off. Returns `false` if it was not running.
    pub fn stop_auto_draw(&mut self) -> bool {
        if !self.auto_draw {
            return false;
        }
        self.auto_draw = false;
        info!("Auto-draw stopped");
        true
    }

    /// Return to a fresh board with every token undrawn.
    pub fn reset_game(&mut self, host: &mut dyn SessionHost) {
        self.stop_auto_draw();
        self.pool.reset();
        self.last_drawn = None;
        self.history.clear();
        self.winner = None;
        host.cells_reset();
        info!("Game reset");
    }

    fn draw_from_pool(
        &mut self,
        source: DrawSource,
        host: &mut dyn SessionHost,
    ) -> Result<DrawRecord, DrawError> {
        let token = self.pool.draw_random_with(&mut self.rng)?;
        Ok(self.complete_draw(token, source, host))
    }

    fn complete_draw(
        &mut self,
        token: NumberToken,
        source: DrawSource,
        host: &mut dyn SessionHost,
    ) -> DrawRecord {
        self.last_drawn = Some(token);
        host.cell_drawn(token);

        let record = DrawRecord {
            token,
            source,
            remaining: self.pool.remaining(),
            drawn_at: Local::now(),
        };
        self.history.push(record.clone());
        info!(token = token.value(), remaining = record.remaining, ?source, "Token drawn");

        if let Err(err) = host.announce(token) {
            warn!(?err, token = token.value(), "Announcement failed");
        }

        if self.pool.is_empty() {
            self.finish(host);
        }
        record
    }

    fn finish(&mut self, host: &mut dyn SessionHost) {
        // Stopping the timer must not depend on the name prompt.
        self.auto_draw = false;
        info!("All tokens drawn");

        let entry = host.request_name();
        match entry.winner_name() {
            Some(name) => {
                host.congratulate(name);
                info!(winner = name, "Winner congratulated");
                self.winner = Some(name.to_string());
            }
            None => debug!("Name prompt dismissed; no congratulation shown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use anyhow::Result;
    use rand::Rng;

    use super::*;
    use crate::host::NameEntry;
    use crate::models::TOKEN_COUNT;

    #[derive(Default)]
    struct RecordingHost {
        announced: Vec<NumberToken>,
        disabled: HashSet<NumberToken>,
        resets: usize,
        names: VecDeque<NameEntry>,
        prompts: usize,
        congratulated: Vec<String>,
    }

    impl RecordingHost {
        fn answering(entry: NameEntry) -> Self {
            Self {
                names: VecDeque::from([entry]),
                ..Self::default()
            }
        }
    }

    impl SessionHost for RecordingHost {
        fn cell_drawn(&mut self, token: NumberToken) {
            self.disabled.insert(token);
        }

        fn cells_reset(&mut self) {
            self.disabled.clear();
            self.resets += 1;
        }

        fn announce(&mut self, token: NumberToken) -> Result<()> {
            self.announced.push(token);
            Ok(())
        }

        fn request_name(&mut self) -> NameEntry {
            self.prompts += 1;
            self.names.pop_front().unwrap_or_default()
        }

        fn congratulate(&mut self, name: &str) {
            self.congratulated.push(name.to_string());
        }
    }

    fn token(value: u8) -> NumberToken {
        NumberToken::new(value).unwrap()
    }

    #[test]
    fn starts_idle_with_full_board() {
        let session = GameSession::with_seed(1);
        assert_eq!(session.remaining(), 90);
        assert_eq!(session.last_drawn(), None);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.auto_draw_active());
    }

    #[test]
    fn repeated_cell_is_neither_counted_nor_announced() {
        let mut session = GameSession::with_seed(1);
        let mut host = RecordingHost::default();

        session.record_draw(token(5), &mut host).unwrap();
        assert_eq!(session.remaining(), 89);
        session.record_draw(token(47), &mut host).unwrap();
        assert_eq!(session.remaining(), 88);

        let err = session.record_draw(token(5), &mut host).unwrap_err();
        assert_eq!(err, DrawError::AlreadyDrawn(token(5)));
        assert_eq!(session.remaining(), 88);
        assert_eq!(session.last_drawn(), Some(token(47)));
        assert_eq!(host.announced, vec![token(5), token(47)]);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn remaining_tracks_distinct_draws_across_mixed_sources() {
        let mut session = GameSession::with_seed(99);
        let mut host = RecordingHost::default();
        let mut picker = StdRng::seed_from_u64(3);
        let mut distinct = HashSet::new();

        while session.remaining() > 0 {
            if picker.random_bool(0.5) {
                let candidate = token(picker.random_range(1..=TOKEN_COUNT));
                if session.record_draw(candidate, &mut host).is_ok() {
                    distinct.insert(candidate);
                }
            } else {
                let record = session.draw_random(&mut host).unwrap();
                assert!(distinct.insert(record.token));
            }
            assert_eq!(session.remaining(), 90 - distinct.len());
        }

        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(host.announced.len(), 90);
        assert_eq!(host.disabled.len(), 90);
        assert_eq!(host.prompts, 1);
    }

    #[test]
    fn random_draw_on_empty_board_is_refused() {
        let mut session = GameSession::with_seed(5);
        let mut host = RecordingHost::answering(NameEntry::confirmed("Ada"));
        let mut seen = HashSet::new();
        for _ in 0..TOKEN_COUNT {
            let record = session.draw_random(&mut host).unwrap();
            assert!(seen.insert(record.token));
        }
        assert_eq!(seen.len(), 90);
        assert_eq!(
            session.draw_random(&mut host).unwrap_err(),
            DrawError::PoolExhausted
        );
        assert_eq!(session.remaining(), 0);
        assert_eq!(host.announced.len(), 90);
    }

    #[test]
    fn clearing_the_board_congratulates_named_winner() {
        let mut session = GameSession::with_seed(11);
        let mut host = RecordingHost::answering(NameEntry::confirmed(" Grace "));
        for value in 1..=TOKEN_COUNT {
            session.record_draw(token(value), &mut host).unwrap();
        }
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(host.congratulated, vec!["Grace".to_string()]);
        assert_eq!(session.winner(), Some("Grace"));
    }

    #[test]
    fn dismissed_name_prompt_still_completes_and_stops_auto_draw() {
        let mut session = GameSession::with_seed(12);
        let mut host = RecordingHost::answering(NameEntry::cancelled());
        assert!(session.start_auto_draw());
        for value in 1..=TOKEN_COUNT {
            session.record_draw(token(value), &mut host).unwrap();
        }
        assert_eq!(host.prompts, 1);
        assert!(host.congratulated.is_empty());
        assert_eq!(session.winner(), None);
        assert_eq!(session.state(), SessionState::Complete);
        assert!(!session.auto_draw_active());
    }

    #[test]
    fn blank_confirmed_name_skips_congratulation() {
        let mut session = GameSession::with_seed(13);
        let mut host = RecordingHost::answering(NameEntry::confirmed(""));
        for value in 1..=TOKEN_COUNT {
            session.record_draw(token(value), &mut host).unwrap();
        }
        assert!(host.congratulated.is_empty());
        assert_eq!(session.state(), SessionState::Complete);
    }

    #[test]
    fn auto_draw_stops_at_completion_and_ignores_stray_ticks() {
        let mut session = GameSession::with_seed(21);
        let mut host = RecordingHost::answering(NameEntry::confirmed("Lin"));

        assert_eq!(
            session.dispatch(GameEvent::AutoStartRequested, &mut host),
            DispatchOutcome::AutoDraw(true)
        );
        assert_eq!(
            session.dispatch(GameEvent::AutoStartRequested, &mut host),
            DispatchOutcome::Unchanged
        );
        assert_eq!(session.state(), SessionState::AutoDrawing);

        let mut ticks = 0;
        while session.auto_draw_active() {
            let outcome = session.dispatch(GameEvent::TimerTick, &mut host);
            assert!(matches!(outcome, DispatchOutcome::Drawn(_)));
            ticks += 1;
        }
        assert_eq!(ticks, 90);
        assert_eq!(session.state(), SessionState::Complete);

        assert_eq!(
            session.dispatch(GameEvent::TimerTick, &mut host),
            DispatchOutcome::Unchanged
        );
        assert_eq!(session.remaining(), 0);
        assert!(!session.start_auto_draw());
        assert_eq!(host.congratulated, vec!["Lin".to_string()]);
    }

    #[test]
    fn tick_without_auto_draw_does_nothing() {
        let mut session = GameSession::with_seed(22);
        let mut host = RecordingHost::default();
        assert_eq!(session.tick(&mut host), Ok(None));
        assert_eq!(session.remaining(), 90);
        assert!(host.announced.is_empty());
    }

    #[test]
    fn manual_draws_interleave_with_auto_draw() {
        let mut session = GameSession::with_seed(23);
        let mut host = RecordingHost::default();
        session.start_auto_draw();

        let outcome = session.dispatch(GameEvent::TimerTick, &mut host);
        let DispatchOutcome::Drawn(auto) = outcome.clone() else {
            panic!("expected a draw, got {outcome:?}");
        };
        assert_eq!(auto.source, DrawSource::Auto);

        let repeat = session.dispatch(GameEvent::CellActivated(auto.token), &mut host);
        assert_eq!(
            repeat,
            DispatchOutcome::Ignored(DrawError::AlreadyDrawn(auto.token))
        );

        let generated = session.dispatch(GameEvent::GenerateRequested, &mut host);
        assert!(matches!(
            generated,
            DispatchOutcome::Drawn(DrawRecord {
                source: DrawSource::Generate,
                remaining: 88,
                ..
            })
        ));
        assert_eq!(session.state(), SessionState::AutoDrawing);
        assert_eq!(
            session.dispatch(GameEvent::AutoStopRequested, &mut host),
            DispatchOutcome::AutoDraw(false)
        );
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn reset_restores_initial_state_from_any_state() {
        let mut host = RecordingHost::answering(NameEntry::confirmed("Kim"));

        let mut mid_game = GameSession::with_seed(31);
        mid_game.start_auto_draw();
        mid_game.draw_random(&mut host).unwrap();
        mid_game.record_draw(token(90), &mut host).ok();

        let mut complete = GameSession::with_seed(32);
        for value in 1..=TOKEN_COUNT {
            complete.record_draw(token(value), &mut host).unwrap();
        }

        for session in [&mut mid_game, &mut complete] {
            assert_eq!(
                session.dispatch(GameEvent::ResetRequested, &mut host),
                DispatchOutcome::Reset
            );
            assert_eq!(session.remaining(), 90);
            assert_eq!(session.last_drawn(), None);
            assert_eq!(session.state(), SessionState::Idle);
            assert!(session.history().is_empty());
            assert_eq!(session.winner(), None);
            assert!(NumberToken::all().all(|t| !session.pool().is_drawn(t)));
        }
        assert!(host.disabled.is_empty());
        assert_eq!(host.resets, 2);

        assert!(mid_game.record_draw(token(90), &mut host).is_ok());
    }

    #[test]
    fn announcement_failure_still_counts_the_draw() {
        struct SilentHost;

        impl SessionHost for SilentHost {
            fn announce(&mut self, _token: NumberToken) -> Result<()> {
                anyhow::bail!("no audio device")
            }

            fn request_name(&mut self) -> NameEntry {
                NameEntry::cancelled()
            }

            fn congratulate(&mut self, _name: &str) {}
        }

        let mut session = GameSession::with_seed(40);
        let record = session.record_draw(token(30), &mut SilentHost).unwrap();
        assert_eq!(record.remaining, 89);
        assert_eq!(session.last_drawn(), Some(token(30)));
    }
}
