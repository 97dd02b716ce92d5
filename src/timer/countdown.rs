//! Countdown timer state machine

use super::scheduler::{ScheduleHandle, Scheduler, TickQueue, TickToken, TimerId};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Cadence of the countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Where the timer is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not started, or discarded back to full duration
    Idle,
    Running,
    /// Halted before reaching zero; never expires
    Stopped,
    /// Reached zero; stays here until the next start
    Expired,
}

/// Notification that a countdown reached zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiration {
    pub timer: TimerId,
    pub duration_secs: u32,
}

/// What a delivered tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Addressed to another timer, an older run, or a timer not running
    Stale,
    /// Counted down; the timer is still running
    Counted { remaining_secs: u32 },
    /// Counted down to zero
    Expired,
}

type ExpireListener = Box<dyn FnMut(&Expiration)>;

/// One-shot countdown driven by a [`Scheduler`]
///
/// A tick only commits the timer's own state. Expiration listeners run later,
/// from [`CountdownTimer::dispatch`], once the tick that expired the timer has
/// fully returned.
pub struct CountdownTimer<S: Scheduler = TickQueue> {
    id: TimerId,
    scheduler: S,
    interval: Duration,
    duration_secs: u32,
    remaining_secs: u32,
    phase: TimerPhase,
    generation: u64,
    pending: Option<ScheduleHandle>,
    outbox: VecDeque<Expiration>,
    listeners: Vec<ExpireListener>,
}

impl<S: Scheduler> CountdownTimer<S> {
    /// Create an idle timer showing the full `duration_secs`
    pub fn new(scheduler: S, duration_secs: u32) -> Self {
        Self::with_interval(scheduler, duration_secs, TICK_INTERVAL)
    }

    /// Create an idle timer with a custom tick cadence
    pub fn with_interval(scheduler: S, duration_secs: u32, interval: Duration) -> Self {
        Self {
            id: TimerId::next(),
            scheduler,
            interval,
            duration_secs,
            remaining_secs: duration_secs,
            phase: TimerPhase::Idle,
            generation: 0,
            pending: None,
            outbox: VecDeque::new(),
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> TimerId {
        self.id
    }

    #[must_use]
    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub const fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running)
    }

    #[must_use]
    pub const fn has_expired(&self) -> bool {
        matches!(self.phase, TimerPhase::Expired)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Subscribe to expiration; listeners persist for this timer's lifetime
    pub fn on_expire(&mut self, listener: impl FnMut(&Expiration) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Start counting down from `duration_secs`, restarting from any phase
    ///
    /// Any tick still pending from a previous run is cancelled before the new
    /// one is scheduled.
    pub fn start(&mut self, duration_secs: u32) {
        self.halt();
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.phase = TimerPhase::Running;
        self.schedule_next();
        debug!(timer = ?self.id, duration_secs, "countdown started");
    }

    /// Halt a running countdown without expiring
    ///
    /// No-op unless the timer is running.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.halt();
        self.phase = TimerPhase::Stopped;
        debug!(timer = ?self.id, remaining_secs = self.remaining_secs, "countdown stopped");
    }

    /// Stop and start again from `duration_secs`
    pub fn reset(&mut self, duration_secs: u32) {
        self.halt();
        self.phase = TimerPhase::Idle;
        self.outbox.clear();
        debug!(timer = ?self.id, duration_secs, "countdown reset");
        self.start(duration_secs);
    }

    /// Put the timer back to idle at full duration without starting it
    pub fn clear(&mut self, duration_secs: u32) {
        self.halt();
        self.phase = TimerPhase::Idle;
        self.outbox.clear();
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
    }

    /// Apply a delivered tick
    ///
    /// Expiration is queued, not announced; call [`CountdownTimer::dispatch`]
    /// afterwards to run the listeners.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        if token != self.current_token() || !self.is_running() {
            let foreign = token.timer() != self.id;
            debug!(timer = ?self.id, ?token, foreign, "stale tick ignored");
            return TickOutcome::Stale;
        }

        self.pending = None;
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        trace!(timer = ?self.id, remaining_secs = self.remaining_secs, "tick");

        if self.remaining_secs == 0 {
            self.phase = TimerPhase::Expired;
            self.outbox.push_back(Expiration {
                timer: self.id,
                duration_secs: self.duration_secs,
            });
            info!(timer = ?self.id, duration_secs = self.duration_secs, "countdown expired");
            return TickOutcome::Expired;
        }

        self.schedule_next();
        TickOutcome::Counted {
            remaining_secs: self.remaining_secs,
        }
    }

    /// Run expiration listeners for every queued expiration
    ///
    /// Returns the expirations that were delivered.
    pub fn dispatch(&mut self) -> Vec<Expiration> {
        let fired: Vec<Expiration> = self.outbox.drain(..).collect();
        for expiration in &fired {
            for listener in &mut self.listeners {
                listener(expiration);
            }
        }
        fired
    }

    /// Cancel any pending tick and hand back the scheduler
    pub fn into_scheduler(mut self) -> S {
        self.halt();
        self.scheduler
    }

    pub(crate) const fn current_token(&self) -> TickToken {
        TickToken {
            timer: self.id,
            generation: self.generation,
        }
    }

    /// Cancel the pending tick and retire the current generation
    fn halt(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.generation += 1;
    }

    fn schedule_next(&mut self) {
        let handle = self.scheduler.schedule(self.current_token(), self.interval);
        self.pending = Some(handle);
    }
}

impl CountdownTimer<TickQueue> {
    /// Deliver every tick due by `now`, then dispatch expirations
    pub fn advance(&mut self, now: Instant) -> Vec<Expiration> {
        while let Some(token) = self.scheduler.pop_due(now) {
            self.tick(token);
        }
        self.scheduler.set_now(now);
        self.dispatch()
    }
}

impl<S: Scheduler> fmt::Debug for CountdownTimer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("remaining_secs", &self.remaining_secs)
            .field("duration_secs", &self.duration_secs)
            .field("generation", &self.generation)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
