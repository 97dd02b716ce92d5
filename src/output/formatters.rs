//! Formatting utilities for terminal output

use crate::core::{Letter, Tile};

/// Seconds at or below which the clock is shown as urgent
pub const LOW_TIME_SECS: u32 = 10;

/// Character shown for one board position
#[must_use]
pub fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Revealed(letter) | Tile::Missed(letter) => letter.as_char().to_ascii_uppercase(),
        Tile::Hidden => '_',
    }
}

/// Board as spaced text, e.g. `R _ S T`
#[must_use]
pub fn board_to_string(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|&tile| tile_char(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Board read aloud: guessed letters by name, the rest as `blank`
#[must_use]
pub fn board_announcement(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Revealed(letter) => format!("{letter}."),
            Tile::Hidden | Tile::Missed(_) => "blank.".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters in submission order, uppercased and comma separated
#[must_use]
pub fn guesses_to_string(guesses: &[Letter]) -> String {
    guesses
        .iter()
        .map(|l| l.as_char().to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub const fn is_time_low(remaining_secs: u32) -> bool {
    remaining_secs <= LOW_TIME_SECS
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining time as a bar
#[must_use]
pub fn time_bar(remaining_secs: u32, duration_secs: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining_secs), f64::from(duration_secs), width)
}
