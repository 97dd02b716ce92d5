//! Simple interactive CLI mode
//!
//! Text-based game without TUI. The clock keeps running while the prompt
//! waits; elapsed ticks are applied when the next line arrives.

use crate::core::RoundStatus;
use crate::output::display::{print_round, print_session_stats};
use crate::round::{GuessError, GuessOutcome, Session};
use crate::wordlists::WordProvider;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// round cannot be created.
pub fn run_simple<P: WordProvider, R: Rng>(session: &mut Session<P>, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Assembly: Endgame - Simple Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word before you run out of languages or time.");
    println!(
        "You have {} seconds and {} wrong guesses per word.\n",
        session.config().duration_secs,
        session.config().max_wrong_guesses()
    );
    println!("  - Type a letter and press Enter to guess it");
    println!("  - Type several letters to guess them in order");
    println!("Commands: 'quit' to exit, 'new' for new game, 'stats' for totals\n");

    let Some(_) = get_user_input("Press Enter to start")? else {
        return Ok(());
    };
    session.start(Instant::now());
    print_round(session.round(), rng);

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            print_session_stats(session.stats());
            return Ok(());
        };
        let timed_out_before = session.status() == RoundStatus::TimedOut;
        session.advance(Instant::now());
        if !timed_out_before && session.status() == RoundStatus::TimedOut {
            println!("\n⏰ {}", "Time ran out before that guess!".red().bold());
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                print_session_stats(session.stats());
                return Ok(());
            }
            "new" => {
                session
                    .new_round(Instant::now())
                    .context("could not start a new round")?;
                println!("\n🔄 New game started!");
            }
            "stats" => {
                print_session_stats(session.stats());
                continue;
            }
            "" => {}
            letters => submit_letters(session, letters),
        }

        print_round(session.round(), rng);

        if session.round().is_over() {
            println!("\nType 'new' for another word or 'quit' to exit.");
        }
    }
}

fn submit_letters<P: WordProvider>(session: &mut Session<P>, letters: &str) {
    for c in letters.chars().filter(|c| !c.is_whitespace()) {
        match session.guess(c) {
            Ok(GuessOutcome::Repeated(letter)) => {
                println!("  {} already guessed", letter.to_string().to_uppercase());
            }
            Ok(outcome) => debug!(?outcome, "guess applied"),
            Err(GuessError::NotALetter(c)) => println!("  ❌ '{c}' is not a letter"),
            Err(e @ GuessError::RoundOver(_)) => {
                println!("  {e}");
                break;
            }
            Err(e) => println!("  {e}"),
        }
    }
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
