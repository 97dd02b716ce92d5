//! Status and farewell text
//!
//! Pure lookups from round state to the words a front end shows.

use crate::core::RoundStatus;
use crate::round::Round;
use crate::timer::Scheduler;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Templates for saying goodbye to a lost stage; `{}` is the stage name
pub const FAREWELL_TEMPLATES: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// A random goodbye for `name`
pub fn farewell_text<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let template = FAREWELL_TEMPLATES.choose(rng).copied().unwrap_or("Farewell, {}");
    template.replace("{}", name)
}

/// What the status area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// The last guess was wrong and cost this stage
    Farewell { stage: String },
    Won,
    Lost { last_stage: String },
    TimedOut { last_stage: String },
}

impl Banner {
    /// Banner for the round's current state, if any
    pub fn for_round<S: Scheduler>(round: &Round<S>) -> Option<Self> {
        let last_stage = || {
            round
                .penalty_track()
                .labels()
                .last()
                .map_or_else(String::new, |l| l.name.clone())
        };

        match round.status() {
            RoundStatus::Won => Some(Self::Won),
            RoundStatus::Lost => Some(Self::Lost {
                last_stage: last_stage(),
            }),
            RoundStatus::TimedOut => Some(Self::TimedOut {
                last_stage: last_stage(),
            }),
            RoundStatus::InProgress => round.farewell().map(|label| Self::Farewell {
                stage: label.name.clone(),
            }),
        }
    }

    /// Heading line; farewells have none
    #[must_use]
    pub const fn title(&self) -> Option<&'static str> {
        match self {
            Self::Farewell { .. } => None,
            Self::Won => Some("Game Won!"),
            Self::Lost { .. } => Some("Game Over!"),
            Self::TimedOut { .. } => Some("Time's Up!"),
        }
    }

    /// Body text; farewells pick a random template
    pub fn body<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Self::Farewell { stage } => farewell_text(stage, rng),
            Self::Won => "Well Done!".to_string(),
            Self::Lost { last_stage } => format!("You lose! Better start learning {last_stage}"),
            Self::TimedOut { last_stage } => {
                format!("The clock ran out. Better start learning {last_stage}")
            }
        }
    }
}

/// Spoken feedback on the most recent guess
pub fn guess_announcement<S: Scheduler>(round: &Round<S>) -> Option<String> {
    let engine = round.engine();
    let letter = engine.last_guess()?;
    if engine.word().has_letter(letter) {
        Some(format!("Correct! The letter {letter} is in the word"))
    } else {
        Some(format!("Sorry! The letter {letter} is not in the word"))
    }
}

/// Header line counting the misses still allowed
#[must_use]
pub fn attempts_line(guesses_left: usize, last_stage: &str) -> String {
    let noun = if guesses_left == 1 { "attempt" } else { "attempts" };
    format!(
        "Guess the word within {guesses_left} {noun} to keep the programming world safe from {last_stage}!"
    )
}
