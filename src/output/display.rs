//! Display functions for command results

use super::formatters::{board_to_string, guesses_to_string, is_time_low, tile_char, time_bar};
use super::messages::{Banner, attempts_line};
use crate::commands::ReplayResult;
use crate::core::{RoundStatus, Tile};
use crate::round::{GuessOutcome, Round, SessionStats};
use crate::timer::Scheduler;
use colored::{ColoredString, Colorize};
use rand::Rng;

fn colored_board(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|&tile| {
            let c = tile_char(tile).to_string();
            match tile {
                Tile::Revealed(_) => c.bright_white().bold().to_string(),
                Tile::Missed(_) => c.red().to_string(),
                Tile::Hidden => c.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn colored_status(status: RoundStatus) -> ColoredString {
    match status {
        RoundStatus::InProgress => "in progress".cyan(),
        RoundStatus::Won => "WON".green().bold(),
        RoundStatus::Lost => "LOST".red().bold(),
        RoundStatus::TimedOut => "TIMED OUT".yellow().bold(),
    }
}

/// Print the round as the simple CLI shows it between guesses
pub fn print_round<S: Scheduler, R: Rng + ?Sized>(round: &Round<S>, rng: &mut R) {
    let engine = round.engine();
    let timer = round.timer();
    let last_stage = round
        .penalty_track()
        .labels()
        .last()
        .map_or("Assembly", |l| l.name.as_str());

    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", attempts_line(engine.guesses_left(), last_stage));
    println!("{}", "─".repeat(60).cyan());

    let stages: Vec<String> = round
        .stages()
        .map(|(label, lost)| {
            if lost {
                format!("💀{}", label.name).bright_black().strikethrough().to_string()
            } else {
                label.name.bright_white().to_string()
            }
        })
        .collect();
    println!("\n  {}", stages.join("  "));

    println!("\n  Word:     {}", colored_board(&round.board()));
    println!(
        "  Guessed:  {}",
        guesses_to_string(engine.guesses().as_slice())
    );

    let remaining = timer.remaining_secs();
    let clock = format!("{remaining:>3}s");
    let clock = if is_time_low(remaining) {
        clock.red().bold()
    } else {
        clock.normal()
    };
    println!(
        "  Time:     [{}] {clock}",
        time_bar(remaining, timer.duration_secs(), 30)
    );

    if let Some(banner) = Banner::for_round(round) {
        println!();
        if let Some(title) = banner.title() {
            println!("  {}", title.bright_yellow().bold());
        }
        let body = banner.body(rng);
        match banner {
            Banner::Farewell { .. } => println!("  {}", body.magenta().italic()),
            Banner::Won => println!("  {}", body.green()),
            Banner::Lost { .. } | Banner::TimedOut { .. } => println!("  {}", body.red()),
        }
    }
}

/// Print the running totals of a session
pub fn print_session_stats(stats: &SessionStats) {
    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Games:      {}", stats.total_games);
    println!("   Won:        {}", stats.games_won.to_string().green());
    println!("   Lost:       {}", stats.games_lost.to_string().red());
    println!("   Timed out:  {}", stats.games_timed_out.to_string().yellow());
    println!("   Win rate:   {:.0}%", stats.win_rate());
}

/// Print the result of a replay
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "REPLAY:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = format!("{:>2}.", i + 1).bright_black();
        let verdict = match &step.result {
            Ok(GuessOutcome::Correct(_)) => "correct".green().to_string(),
            Ok(GuessOutcome::Incorrect(_)) => match &step.farewell {
                Some(stage) => format!("{} (lost {stage})", "wrong".red()),
                None => "wrong".red().to_string(),
            },
            Ok(GuessOutcome::Repeated(_)) => "already guessed".bright_black().to_string(),
            Err(e) => format!("rejected: {e}").yellow().to_string(),
        };
        println!(
            "{turn} {}  {verdict}  [misses: {}]",
            step.input.to_ascii_uppercase(),
            step.wrong_guesses
        );
    }

    println!("\n  Word:   {}", colored_board(&result.board));
    println!("  Plain:  {}", board_to_string(&result.board));
    println!(
        "  Result: {}  ({} misses left)",
        colored_status(result.status),
        result.guesses_left
    );
}
