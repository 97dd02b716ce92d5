//! Penalty track: the stages lost one by one on wrong guesses

/// One stage on the penalty track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyLabel {
    pub name: String,
    /// Hex colour for the chip background, e.g. `#E2680F`
    pub background: String,
    /// Hex colour for the chip text
    pub foreground: String,
}

impl PenaltyLabel {
    #[must_use]
    pub fn new(name: &str, background: &str, foreground: &str) -> Self {
        Self {
            name: name.to_string(),
            background: background.to_string(),
            foreground: foreground.to_string(),
        }
    }
}

/// Built-in track: eight languages to lose, with Assembly waiting at the end
pub const LANGUAGES: &[(&str, &str, &str)] = &[
    ("HTML", "#E2680F", "#F9F4DA"),
    ("CSS", "#328AF1", "#F9F4DA"),
    ("JavaScript", "#F4EB13", "#1E1E1E"),
    ("React", "#2ED3E9", "#1E1E1E"),
    ("TypeScript", "#298EC6", "#F9F4DA"),
    ("Node.js", "#599137", "#F9F4DA"),
    ("Python", "#FFD742", "#1E1E1E"),
    ("Ruby", "#D02B2B", "#F9F4DA"),
    ("Assembly", "#2D519F", "#F9F4DA"),
];

/// Ordered list of penalty stages
///
/// The last stage is the one the player can never lose: a track of `n`
/// stages allows `n - 1` wrong guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyTrack {
    labels: Vec<PenaltyLabel>,
}

impl PenaltyTrack {
    #[must_use]
    pub fn new(labels: Vec<PenaltyLabel>) -> Self {
        Self { labels }
    }

    /// The built-in programming-language track
    #[must_use]
    pub fn languages() -> Self {
        Self::new(
            LANGUAGES
                .iter()
                .map(|&(name, bg, fg)| PenaltyLabel::new(name, bg, fg))
                .collect(),
        )
    }

    #[must_use]
    pub fn labels(&self) -> &[PenaltyLabel] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Wrong guesses allowed before the round is lost
    #[must_use]
    pub fn max_wrong_guesses(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    /// Stage `index` is gone once more than `index` wrong guesses were made
    #[must_use]
    pub const fn is_lost(index: usize, wrong_guess_count: usize) -> bool {
        wrong_guess_count > index
    }

    /// The stage lost by the most recent wrong guess
    #[must_use]
    pub fn farewell_label(&self, wrong_guess_count: usize) -> Option<&PenaltyLabel> {
        wrong_guess_count
            .checked_sub(1)
            .and_then(|index| self.labels.get(index))
    }
}

impl Default for PenaltyTrack {
    fn default() -> Self {
        Self::languages()
    }
}
