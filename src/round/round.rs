//! One play-through: engine and countdown bound together

use super::RoundError;
use super::error::GuessError;
use crate::config::GameConfig;
use crate::core::{Letter, RoundStatus, Tile, Word};
use crate::engine::{GameEngine, PenaltyLabel, PenaltyTrack};
use crate::timer::{CountdownTimer, Expiration, Scheduler, TickOutcome, TickQueue, TickToken};
use crate::wordlists::WordProvider;
use std::time::Instant;
use tracing::{debug, info};

/// What an accepted guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word
    Correct(Letter),
    /// The letter is not in the word and cost a penalty stage
    Incorrect(Letter),
    /// Already guessed; nothing changed
    Repeated(Letter),
}

impl GuessOutcome {
    #[must_use]
    pub const fn letter(self) -> Letter {
        match self {
            Self::Correct(l) | Self::Incorrect(l) | Self::Repeated(l) => l,
        }
    }
}

/// Draw a word and build a round from it
///
/// # Errors
///
/// Fails fast, before any round state exists, when the provider is exhausted
/// or hands back an empty or non-alphabetic word, or when the configuration
/// is unplayable.
pub fn create_round<P, S>(
    provider: &mut P,
    config: &GameConfig,
    scheduler: S,
) -> Result<Round<S>, RoundError>
where
    P: WordProvider + ?Sized,
    S: Scheduler,
{
    let word = draw_word(provider)?;
    Round::with_word(word, config, scheduler)
}

pub(crate) fn draw_word<P: WordProvider + ?Sized>(provider: &mut P) -> Result<Word, RoundError> {
    let raw = provider.next_word().ok_or(RoundError::NoWordAvailable)?;
    Ok(Word::new(raw)?)
}

/// A round: secret word, guesses, countdown, and the time-out flag layered on top
///
/// The engine stays naive about game over; the round is what refuses guesses
/// once the outcome is decided or before the clock has started.
#[derive(Debug)]
pub struct Round<S: Scheduler = TickQueue> {
    engine: GameEngine,
    timer: CountdownTimer<S>,
    track: PenaltyTrack,
    duration_secs: u32,
    started: bool,
    timed_out: bool,
}

impl<S: Scheduler> Round<S> {
    /// Build an unstarted round for a known word
    ///
    /// # Errors
    ///
    /// Returns `RoundError::PenaltyTrackTooShort` for an unplayable track.
    pub fn with_word(word: Word, config: &GameConfig, scheduler: S) -> Result<Self, RoundError> {
        config.validate()?;

        let engine = GameEngine::new(word, config.max_wrong_guesses());
        let timer = CountdownTimer::new(scheduler, config.duration_secs);
        info!(
            letters = engine.word().len(),
            max_wrong = engine.max_wrong_guesses(),
            duration_secs = config.duration_secs,
            "round created"
        );
        debug!(word = %engine.word(), "secret word drawn");

        Ok(Self {
            engine,
            timer,
            track: config.penalty_track.clone(),
            duration_secs: config.duration_secs,
            started: false,
            timed_out: false,
        })
    }

    /// Start the clock; later calls do nothing
    ///
    /// The first tick is scheduled against the scheduler's own notion of now.
    /// Callers that own a [`TickQueue`] sync it first, see [`Round::start_at`].
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.timer.start(self.duration_secs);
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Validate a typed character and forward it to the engine
    ///
    /// Stops the countdown as soon as the guess decides the round.
    ///
    /// # Errors
    ///
    /// - `GuessError::NotALetter` for anything but an ASCII letter
    /// - `GuessError::NotStarted` before [`Round::start`]
    /// - `GuessError::RoundOver` once the round is won, lost or timed out
    pub fn guess(&mut self, input: char) -> Result<GuessOutcome, GuessError> {
        let letter = Letter::new(input).ok_or(GuessError::NotALetter(input))?;
        if !self.started {
            return Err(GuessError::NotStarted);
        }
        let status = self.status();
        if status.is_terminal() {
            return Err(GuessError::RoundOver(status));
        }

        if self.engine.has_guessed(letter) {
            return Ok(GuessOutcome::Repeated(letter));
        }

        self.engine.submit_guess(letter);

        let status = self.engine.status();
        if status.is_terminal() {
            self.timer.stop();
            info!(
                %status,
                guesses = self.engine.guesses().len(),
                remaining_secs = self.timer.remaining_secs(),
                "round finished"
            );
        }

        if self.engine.word().has_letter(letter) {
            Ok(GuessOutcome::Correct(letter))
        } else {
            Ok(GuessOutcome::Incorrect(letter))
        }
    }

    /// Apply a tick from the scheduler, then deliver any expiration
    ///
    /// The tick's own state change is complete before expiration listeners
    /// run or the round is marked timed out.
    pub fn deliver_tick(&mut self, token: TickToken) -> TickOutcome {
        let outcome = self.timer.tick(token);
        let fired = self.timer.dispatch();
        if !fired.is_empty() {
            self.expire();
        }
        outcome
    }

    fn expire(&mut self) {
        if self.engine.status() == RoundStatus::InProgress {
            self.timed_out = true;
            info!(
                guesses = self.engine.guesses().len(),
                wrong = self.engine.wrong_guess_count(),
                "round timed out"
            );
        }
    }

    /// Current outcome
    ///
    /// Once timed out the round stays timed out, whatever the engine says
    /// afterwards.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.timed_out {
            RoundStatus::TimedOut
        } else {
            self.engine.status()
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    #[must_use]
    pub const fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub const fn timer(&self) -> &CountdownTimer<S> {
        &self.timer
    }

    #[must_use]
    pub const fn penalty_track(&self) -> &PenaltyTrack {
        &self.track
    }

    #[must_use]
    pub const fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Subscribe to the countdown reaching zero
    pub fn on_expire(&mut self, listener: impl FnMut(&Expiration) + 'static) {
        self.timer.on_expire(listener);
    }

    /// Halt the countdown without ending the round
    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    /// Restart the countdown from `duration_secs`
    ///
    /// Does not revive a round that already timed out.
    pub fn reset_timer(&mut self, duration_secs: u32) {
        self.duration_secs = duration_secs;
        self.started = true;
        self.timer.reset(duration_secs);
    }

    /// The stage to say goodbye to after a wrong guess that did not end the round
    #[must_use]
    pub fn farewell(&self) -> Option<&PenaltyLabel> {
        if self.is_over() || !self.engine.is_last_guess_incorrect() {
            return None;
        }
        self.track.farewell_label(self.engine.wrong_guess_count())
    }

    /// Each stage with whether it has been lost
    pub fn stages(&self) -> impl Iterator<Item = (&PenaltyLabel, bool)> + '_ {
        let wrong = self.engine.wrong_guess_count();
        self.track
            .labels()
            .iter()
            .enumerate()
            .map(move |(i, label)| (label, PenaltyTrack::is_lost(i, wrong)))
    }

    /// The word as the board shows it; unguessed letters are uncovered once
    /// the round is lost or timed out
    #[must_use]
    pub fn board(&self) -> Vec<Tile> {
        let uncover = matches!(self.status(), RoundStatus::Lost | RoundStatus::TimedOut);
        self.engine.tiles(uncover)
    }

    /// Cancel the pending tick and hand back the scheduler
    pub fn into_scheduler(self) -> S {
        self.timer.into_scheduler()
    }

    #[cfg(test)]
    pub(crate) const fn current_token(&self) -> TickToken {
        self.timer.current_token()
    }
}

impl Round<TickQueue> {
    /// Start the clock at `now`; later calls do nothing
    pub fn start_at(&mut self, now: Instant) {
        if self.started {
            return;
        }
        self.timer_queue_mut().set_now(now);
        self.start();
    }

    /// Deliver every tick due by `now`
    ///
    /// Returns how many ticks counted.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut counted = 0;
        loop {
            let Some(token) = self.timer_queue_mut().pop_due(now) else {
                break;
            };
            if self.deliver_tick(token) != TickOutcome::Stale {
                counted += 1;
            }
        }
        self.timer_queue_mut().set_now(now);
        counted
    }

    fn timer_queue_mut(&mut self) -> &mut TickQueue {
        self.timer.scheduler_mut()
    }
}
