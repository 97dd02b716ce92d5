//! Assembly: Endgame - CLI
//!
//! Hangman against the clock, with a full-screen TUI and a line-based mode.

use anyhow::Result;
use assembly_endgame::{
    commands::{ReplayConfig, replay_guesses, run_simple},
    config::{DEFAULT_DURATION_SECS, GameConfig},
    logging,
    output::print_replay_result,
    round::Session,
    wordlists::{RandomWords, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before the languages fall to Assembly, or the clock runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seconds on the clock for each round
    #[arg(short, long, global = true, default_value_t = DEFAULT_DURATION_SECS)]
    duration: u32,

    /// Wordlist: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' (default: 'off' in play mode, 'warn' otherwise)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Replay a list of guesses against a known word
    Replay {
        /// The secret word
        word: String,

        /// Guesses in order, e.g. "a r u s t" or "arust"
        letters: String,
    },
}

/// Build the word source based on the -w flag
///
/// - "builtin": the embedded list
/// - "<path>": load custom wordlist from file
fn load_words(wordlist_mode: &str, seed: Option<u64>) -> Result<RandomWords> {
    match wordlist_mode {
        "builtin" => Ok(RandomWords::embedded(seed)),
        path => {
            let words = load_from_file(path)?;
            info!(path, count = words.len(), "loaded custom wordlist");
            Ok(match seed {
                Some(seed) => RandomWords::from_seed(words, seed),
                None => RandomWords::from_os_rng(words),
            })
        }
    }
}

fn presentation_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Logging would corrupt the alternate screen unless asked for
    let default_level = match command {
        Commands::Play => "off",
        Commands::Simple | Commands::Replay { .. } => "warn",
    };
    logging::init(cli.log_level.as_deref().unwrap_or(default_level))?;

    let config = GameConfig::new(cli.duration);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, cli.seed, config),
        Commands::Simple => run_simple_command(&cli.wordlist, cli.seed, config),
        Commands::Replay { word, letters } => run_replay_command(word, letters, config),
    }
}

fn run_replay_command(word: String, letters: String, config: GameConfig) -> Result<()> {
    let mut replay = ReplayConfig::new(word, letters);
    replay.game = config;
    let result = replay_guesses(replay)?;
    print_replay_result(&result);
    Ok(())
}

fn run_simple_command(wordlist: &str, seed: Option<u64>, config: GameConfig) -> Result<()> {
    let provider = load_words(wordlist, seed)?;
    let mut session = Session::new(provider, config)?;
    let mut rng = presentation_rng(seed);
    run_simple(&mut session, &mut rng)
}

fn run_play_command(wordlist: &str, seed: Option<u64>, config: GameConfig) -> Result<()> {
    use assembly_endgame::interactive::{App, run_tui};

    let provider = load_words(wordlist, seed)?;
    let session = Session::new(provider, config)?;
    let app = App::new(session, presentation_rng(seed));
    run_tui(app)
}
