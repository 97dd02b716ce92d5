//! Round orchestration
//!
//! Binds a [`GameEngine`](crate::engine::GameEngine) to a
//! [`CountdownTimer`](crate::timer::CountdownTimer), layers the time-out on
//! top of the engine's own outcome, and gates guesses once a round is over.

mod error;
#[allow(clippy::module_inception)]
mod round;
mod session;

#[cfg(test)]
mod tests_props;

pub use error::{GuessError, RoundError};
pub use round::{GuessOutcome, Round, create_round};
pub use session::{Session, SessionStats};
