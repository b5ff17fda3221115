//! Wordo - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordo::{
    commands::{load_or_reset, print_rules, run_simple, score_words},
    config::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    core::DEFAULT_WORD_LENGTH,
    game::{RandomTargets, Vocabulary},
    output::{print_score, print_statistics},
    stats::{DEFAULT_PLAYER, StatsStore},
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordo",
    about = "Guess the hidden word; tiles show which letters are right",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded lists) or path to a file used for guesses and targets
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Word length
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of attempts per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for target selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Player whose statistics are recorded
    #[arg(short, long, global = true, default_value = DEFAULT_PLAYER)]
    player: String,

    /// Directory for statistics files (default: platform data directory)
    #[arg(long, global = true)]
    stats_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Show player statistics
    Stats {
        /// Erase the player's statistics
        #[arg(long)]
        reset: bool,
    },

    /// Explain the rules
    HelpGame,
}

/// Load word lists based on the -w flag
///
/// - "all": embedded allowed and target lists
/// - "<path>": custom list used for both
fn load_wordlists(wordlist_mode: &str) -> Result<WordBank> {
    match wordlist_mode {
        "all" => Ok(WordBank::embedded()),
        path => WordBank::from_file(path)
            .with_context(|| format!("Failed to load word list from {path}")),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordo=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let config = GameConfig::new(cli.length, cli.attempts)?;
    let stats_dir = cli.stats_dir.as_deref();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(
            &cli.wordlist,
            cli.seed,
            config,
            stats_store(stats_dir, &cli.player)?,
        ),
        Commands::Simple => run_simple_command(
            &cli.wordlist,
            cli.seed,
            &config,
            stats_store(stats_dir, &cli.player)?,
        ),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
        Commands::Stats { reset } => {
            run_stats_command(&stats_store(stats_dir, &cli.player)?, reset, &config)
        }
        Commands::HelpGame => {
            print_rules(&config);
            Ok(())
        }
    }
}

/// Statistics file for `player`, in `stats_dir` or the platform data directory
fn stats_store(stats_dir: Option<&Path>, player: &str) -> Result<StatsStore> {
    let dir = stats_dir.map_or_else(StatsStore::default_dir, Path::to_path_buf);
    let store = StatsStore::for_player(&dir, player)?;
    debug!(path = %store.path().display(), "using statistics file");
    Ok(store)
}

fn game_setup(
    wordlist: &str,
    seed: Option<u64>,
    config: &GameConfig,
) -> Result<(Vocabulary, RandomTargets)> {
    let bank = load_wordlists(wordlist)?;
    let vocabulary = Vocabulary::new(config.word_length, &bank.allowed, &bank.targets);
    let targets = RandomTargets::new(&bank.targets, config.word_length, seed)?;

    debug!(
        vocabulary = vocabulary.len(),
        targets = targets.len(),
        "word lists loaded"
    );
    Ok((vocabulary, targets))
}

fn run_play_command(
    wordlist: &str,
    seed: Option<u64>,
    config: GameConfig,
    store: StatsStore,
) -> Result<()> {
    use wordo::interactive::{App, run_tui};

    let (vocabulary, targets) = game_setup(wordlist, seed, &config)?;
    let app = App::new(&vocabulary, Box::new(targets), config, Some(store))?;
    run_tui(app)
}

fn run_simple_command(
    wordlist: &str,
    seed: Option<u64>,
    config: &GameConfig,
    mut store: StatsStore,
) -> Result<()> {
    let (vocabulary, mut targets) = game_setup(wordlist, seed, config)?;
    run_simple(
        io::stdin().lock(),
        &vocabulary,
        &mut targets,
        config,
        &mut store,
    )
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_words(guess, target)?;
    print_score(&result.guess, &result.target, &result.feedback);
    Ok(())
}

fn run_stats_command(store: &StatsStore, reset: bool, config: &GameConfig) -> Result<()> {
    let stats = load_or_reset(store, reset)?;
    if reset {
        println!("Statistics for '{}' have been reset.", store.player());
    } else {
        print_statistics(store.player(), &stats, config.max_attempts);
    }
    Ok(())
}
