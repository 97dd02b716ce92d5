//! Game configuration

use crate::engine::PenaltyTrack;
use crate::round::RoundError;

/// Default time limit for a round
pub const DEFAULT_DURATION_SECS: u32 = 60;

/// Settings shared by every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Countdown length in seconds
    pub duration_secs: u32,
    /// Stages lost on wrong guesses; its length sets the miss budget
    pub penalty_track: PenaltyTrack,
}

impl GameConfig {
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            penalty_track: PenaltyTrack::languages(),
        }
    }

    #[must_use]
    pub fn with_track(mut self, penalty_track: PenaltyTrack) -> Self {
        self.penalty_track = penalty_track;
        self
    }

    #[must_use]
    pub fn max_wrong_guesses(&self) -> usize {
        self.penalty_track.max_wrong_guesses()
    }

    /// Check the configuration can produce a playable round
    ///
    /// # Errors
    ///
    /// Returns `RoundError::PenaltyTrackTooShort` when the track has fewer than
    /// two stages, since such a round would be lost before the first guess.
    pub fn validate(&self) -> Result<(), RoundError> {
        let stages = self.penalty_track.len();
        if stages < 2 {
            return Err(RoundError::PenaltyTrackTooShort { stages });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}
