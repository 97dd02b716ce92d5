//! A run of rounds sharing one tick queue

use super::round::{GuessOutcome, Round, draw_word};
use super::{GuessError, RoundError};
use crate::config::GameConfig;
use crate::core::RoundStatus;
use crate::timer::{SharedTickQueue, TickOutcome, TickQueue};
use crate::wordlists::WordProvider;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info};

/// Running totals across rounds
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
    pub games_timed_out: usize,
    /// Rounds replaced while still in progress
    pub games_abandoned: usize,
}

impl SessionStats {
    fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won => self.games_won += 1,
            RoundStatus::Lost => self.games_lost += 1,
            RoundStatus::TimedOut => self.games_timed_out += 1,
            RoundStatus::InProgress => return,
        }
        self.total_games += 1;
    }

    /// Share of finished games that were won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Orchestrates rounds for a front end
///
/// Owns the word provider, the tick queue every round's timer schedules on,
/// and the current round. A new round replaces the old one outright; the old
/// timer's pending tick is cancelled, and any tick addressed to it that still
/// arrives is ignored by the new timer.
#[derive(Debug)]
pub struct Session<P: WordProvider> {
    provider: P,
    config: GameConfig,
    ticks: SharedTickQueue,
    round: Round<SharedTickQueue>,
    stats: SessionStats,
    recorded: bool,
}

impl<P: WordProvider> Session<P> {
    /// Create a session and its first, unstarted round
    ///
    /// # Errors
    ///
    /// Returns `RoundError` if the first word is missing or invalid, or the
    /// configuration is unplayable.
    pub fn new(provider: P, config: GameConfig) -> Result<Self, RoundError> {
        Self::with_queue(provider, config, TickQueue::shared())
    }

    /// Create a session on an existing tick queue
    ///
    /// # Errors
    ///
    /// Same as [`Session::new`].
    pub fn with_queue(
        mut provider: P,
        config: GameConfig,
        ticks: SharedTickQueue,
    ) -> Result<Self, RoundError> {
        let word = draw_word(&mut provider)?;
        let round = Round::with_word(word, &config, Rc::clone(&ticks))?;
        Ok(Self {
            provider,
            config,
            ticks,
            round,
            stats: SessionStats::default(),
            recorded: false,
        })
    }

    #[must_use]
    pub const fn round(&self) -> &Round<SharedTickQueue> {
        &self.round
    }

    /// Mutable access for timer controls and expiration subscriptions
    pub fn round_mut(&mut self) -> &mut Round<SharedTickQueue> {
        &mut self.round
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    /// Start the current round's clock at `now`
    ///
    /// The first tick is due one interval after `now`, however long the
    /// round sat idle before.
    pub fn start(&mut self, now: Instant) {
        if self.round.is_started() {
            return;
        }
        self.ticks.borrow_mut().set_now(now);
        self.round.start();
    }

    /// Forward a typed character to the current round
    ///
    /// # Errors
    ///
    /// See [`Round::guess`].
    pub fn guess(&mut self, input: char) -> Result<GuessOutcome, GuessError> {
        let outcome = self.round.guess(input);
        self.record_if_finished();
        outcome
    }

    /// Deliver every tick due by `now` to the current round
    ///
    /// Ticks addressed to replaced rounds are dropped. Returns how many ticks
    /// counted.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut counted = 0;
        loop {
            let next = self.ticks.borrow_mut().pop_due(now);
            let Some(token) = next else {
                break;
            };
            if self.round.deliver_tick(token) != TickOutcome::Stale {
                counted += 1;
            }
        }
        self.ticks.borrow_mut().set_now(now);
        self.record_if_finished();
        counted
    }

    /// When the event loop should wake up for the next tick
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticks.borrow().next_deadline()
    }

    /// Replace the current round with a fresh one at `now`
    ///
    /// The new round starts its clock right away if the old one had been
    /// started. On error the current round is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RoundError` if the provider has no valid word.
    pub fn new_round(&mut self, now: Instant) -> Result<(), RoundError> {
        let word = draw_word(&mut self.provider)?;
        let fresh = Round::with_word(word, &self.config, Rc::clone(&self.ticks))?;

        let previous = std::mem::replace(&mut self.round, fresh);
        let was_started = previous.is_started();
        if was_started && !previous.is_over() {
            self.stats.games_abandoned += 1;
            debug!("round abandoned");
        }
        drop(previous.into_scheduler());

        self.recorded = false;
        if was_started {
            self.ticks.borrow_mut().set_now(now);
            self.round.start();
        }
        info!(total_games = self.stats.total_games, "new round");
        Ok(())
    }

    fn record_if_finished(&mut self) {
        if self.recorded {
            return;
        }
        let status = self.round.status();
        if status.is_terminal() {
            self.stats.record(status);
            self.recorded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Scheduler;
    use std::time::Duration;

    fn scripted(words: &[&'static str]) -> impl FnMut() -> Option<String> + use<> {
        let mut queue = words.to_vec().into_iter();
        move || queue.next().map(String::from)
    }

    fn session_at(words: &[&'static str], start: Instant) -> Session<impl FnMut() -> Option<String> + use<>> {
        let ticks = Rc::new(std::cell::RefCell::new(TickQueue::starting_at(start)));
        Session::with_queue(scripted(words), GameConfig::default(), ticks).unwrap()
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn first_round_waits_for_start() {
        let start = Instant::now();
        let mut session = session_at(&["dog"], start);
        assert_eq!(session.next_deadline(), None);
        assert_eq!(session.advance(start + secs(5)), 0);

        session.start(start + secs(5));
        assert_eq!(session.next_deadline(), Some(start + secs(6)));
    }

    #[test]
    fn idle_time_before_start_is_not_charged() {
        let start = Instant::now();
        let mut session = session_at(&["dog"], start);

        // Nothing polls the queue while the player reads the intro
        let pressed = start + secs(3);
        session.start(pressed);
        assert_eq!(session.advance(pressed), 0);
        assert_eq!(session.round().timer().remaining_secs(), 60);

        assert_eq!(session.advance(pressed + secs(1)), 1);
        assert_eq!(session.round().timer().remaining_secs(), 59);
    }

    #[test]
    fn new_round_after_idle_time_gets_full_clock() {
        let start = Instant::now();
        let mut session = session_at(&["go", "cat"], start);
        session.start(start);
        session.guess('g').unwrap();
        session.guess('o').unwrap();

        // Game over screen left up without any ticks pending
        let later = start + secs(45);
        session.new_round(later).unwrap();
        assert_eq!(session.advance(later), 0);
        assert_eq!(session.round().timer().remaining_secs(), 60);
        assert_eq!(session.next_deadline(), Some(later + secs(1)));
    }

    #[test]
    fn second_start_does_not_move_the_clock() {
        let start = Instant::now();
        let mut session = session_at(&["dog"], start);
        session.start(start);
        session.start(start + secs(30));

        assert_eq!(session.advance(start + secs(30)), 30);
        assert_eq!(session.round().timer().remaining_secs(), 30);
    }

    #[test]
    fn scenario_reset_mid_round() {
        let start = Instant::now();
        let mut session = session_at(&["dog", "cat"], start);
        session.start(start);
        session.guess('d').unwrap();
        session.guess('x').unwrap();
        session.advance(start + secs(20));
        assert_eq!(session.round().timer().remaining_secs(), 40);

        session.new_round(start + secs(20)).unwrap();

        let round = session.round();
        assert_eq!(round.engine().word().text(), "cat");
        assert!(round.engine().guesses().is_empty());
        assert_eq!(round.engine().wrong_guess_count(), 0);
        assert_eq!(round.timer().remaining_secs(), 60);
        assert!(round.timer().is_running());
        assert_eq!(session.stats().games_abandoned, 1);
    }

    #[test]
    fn old_round_tick_cannot_touch_new_round() {
        let start = Instant::now();
        let mut session = session_at(&["dog", "cat"], start);
        session.start(start);
        session.advance(start + secs(30));
        let stale = session.round().current_token();

        session.new_round(start + secs(30)).unwrap();
        // Only the new timer's tick is queued
        assert_eq!(session.ticks.borrow().len(), 1);

        assert_eq!(session.round_mut().deliver_tick(stale), TickOutcome::Stale);
        assert_eq!(session.round().timer().remaining_secs(), 60);

        session.advance(start + secs(31));
        assert_eq!(session.round().timer().remaining_secs(), 59);
    }

    #[test]
    fn stale_tick_left_in_queue_is_dropped() {
        let start = Instant::now();
        let mut session = session_at(&["dog", "cat"], start);
        session.start(start);
        let stale = session.round().current_token();

        // A tick for the first round that slipped past cancellation
        session
            .ticks
            .borrow_mut()
            .schedule(stale, Duration::from_millis(500));
        session.new_round(start).unwrap();

        assert_eq!(session.advance(start + secs(1)), 1);
        assert_eq!(session.round().timer().remaining_secs(), 59);
    }

    #[test]
    fn timeout_is_recorded_once() {
        let start = Instant::now();
        let mut session = session_at(&["dog", "cat"], start);
        session.start(start);
        session.advance(start + secs(60));
        assert_eq!(session.status(), RoundStatus::TimedOut);

        session.advance(start + secs(90));
        assert_eq!(session.stats().games_timed_out, 1);
        assert_eq!(session.stats().total_games, 1);

        session.new_round(start + secs(90)).unwrap();
        assert_eq!(session.stats().games_abandoned, 0);
        assert_eq!(session.status(), RoundStatus::InProgress);
        assert!(session.round().timer().is_running());
    }

    #[test]
    fn win_and_loss_are_counted() {
        let start = Instant::now();
        let mut session = session_at(&["go", "go"], start);
        session.start(start);
        session.guess('g').unwrap();
        session.guess('o').unwrap();
        assert_eq!(session.guess('x'), Err(GuessError::RoundOver(RoundStatus::Won)));

        session.new_round(start).unwrap();
        for c in "abcdefhi".chars() {
            session.guess(c).unwrap();
        }
        assert_eq!(session.status(), RoundStatus::Lost);

        let stats = session.stats();
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_lost, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exhausted_provider_keeps_current_round() {
        let start = Instant::now();
        let mut session = session_at(&["dog"], start);
        session.start(start);
        session.guess('d').unwrap();

        assert_eq!(session.new_round(start), Err(RoundError::NoWordAvailable));
        assert_eq!(session.round().engine().word().text(), "dog");
        assert_eq!(session.round().engine().guesses().len(), 1);
        assert!(session.round().timer().is_running());
    }

    #[test]
    fn invalid_first_word_fails_fast() {
        let result = Session::new(|| Some("42".to_string()), GameConfig::default());
        assert!(matches!(result, Err(RoundError::InvalidWord(_))));
    }
}
