//! Tick scheduling
//!
//! The countdown never sleeps. It asks a [`Scheduler`] to deliver a
//! [`TickToken`] after an interval and the event loop hands the token back
//! when it comes due.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one countdown timer instance
///
/// Every timer gets a fresh id, so a tick addressed to a discarded timer can
/// never be mistaken for one of its successor's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Addresses a tick to one run of one timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    pub(crate) timer: TimerId,
    pub(crate) generation: u64,
}

impl TickToken {
    #[must_use]
    pub const fn timer(self) -> TimerId {
        self.timer
    }
}

/// Handle used to cancel a scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleHandle(u64);

/// Schedule-after-interval and cancel-pending
pub trait Scheduler {
    /// Deliver `token` once `after` has elapsed
    fn schedule(&mut self, token: TickToken, after: Duration) -> ScheduleHandle;

    /// Drop a pending delivery; unknown or already-delivered handles are ignored
    fn cancel(&mut self, handle: ScheduleHandle);
}

impl<T: Scheduler> Scheduler for Rc<RefCell<T>> {
    fn schedule(&mut self, token: TickToken, after: Duration) -> ScheduleHandle {
        self.borrow_mut().schedule(token, after)
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        self.borrow_mut().cancel(handle);
    }
}

#[derive(Debug, Clone)]
struct Pending {
    handle: ScheduleHandle,
    token: TickToken,
    deadline: Instant,
}

/// Deadline queue polled by a single-threaded event loop
///
/// The queue keeps its own notion of "now". It only moves forward through
/// [`TickQueue::pop_due`] and [`TickQueue::set_now`], which keeps the cadence
/// exact when the loop falls behind: a tick scheduled while handling a late
/// tick is due one interval after the late tick's deadline, not after the
/// moment it was handled.
#[derive(Debug, Clone)]
pub struct TickQueue {
    pending: Vec<Pending>,
    next_handle: u64,
    now: Instant,
}

/// A tick queue shared between the event loop and the timers it feeds
pub type SharedTickQueue = Rc<RefCell<TickQueue>>;

impl TickQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a queue whose clock starts at `now`
    #[must_use]
    pub const fn starting_at(now: Instant) -> Self {
        Self {
            pending: Vec::new(),
            next_handle: 0,
            now,
        }
    }

    /// Wrap a new queue for sharing
    #[must_use]
    pub fn shared() -> SharedTickQueue {
        Rc::new(RefCell::new(Self::new()))
    }

    /// The queue's current time
    #[must_use]
    pub const fn now(&self) -> Instant {
        self.now
    }

    /// Move the clock forward; moving it backwards is ignored
    pub fn set_now(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Take the earliest tick due at or before `until`
    ///
    /// The clock advances to that tick's deadline.
    pub fn pop_due(&mut self, until: Instant) -> Option<TickToken> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.handle.0))
            .map(|(i, _)| i)?;

        let entry = self.pending.remove(index);
        self.set_now(entry.deadline);
        Some(entry.token)
    }

    /// When the next tick comes due, if any are pending
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for TickQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TickQueue {
    fn schedule(&mut self, token: TickToken, after: Duration) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            token,
            deadline: self.now + after,
        });
        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}
