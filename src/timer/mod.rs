//! Countdown subsystem
//!
//! A one-shot countdown plus the scheduling seam that drives it from a
//! single-threaded event loop.

mod countdown;
pub mod scheduler;

pub use countdown::{CountdownTimer, Expiration, TICK_INTERVAL, TickOutcome, TimerPhase};
pub use scheduler::{ScheduleHandle, Scheduler, SharedTickQueue, TickQueue, TickToken, TimerId};
