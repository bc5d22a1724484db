//! Letters Solver - CLI
//!
//! Letters game with TUI and CLI modes, backed by a trie dictionary and a
//! pruning solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letters_solver::{
    commands::{
        BenchmarkConfig, DictionarySummary, PlayConfig, draw_all, letter_statistics,
        parse_letters_arg, play_round, run_benchmark, run_simple, score_word, solve_letters,
    },
    core::{Dictionary, LettersSet},
    interactive::{App, run_tui},
    log::{debug_requested, init_logger},
    output::{
        print_benchmark_result, print_dictionary_summary, print_drawn, print_letter_statistics,
        print_round_result, print_word_score, print_words,
    },
    solver::{GameMode, Solver, StrategyName, StrategyType},
    wordlists::DataSource,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "letters_solver",
    about = "Letters game solver: find the longest or highest-scoring words for a draw",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: DataSource,

    /// Letters: 'embedded' (default) or path to a letters table
    #[arg(short, long, global = true, default_value = "embedded")]
    letters: DataSource,

    /// Game mode: length (l) or score (p)
    #[arg(short, long, global = true, value_enum, default_value_t = GameMode::Length)]
    mode: GameMode,

    /// Strategy: efficient (default) or naive
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyName::Efficient)]
    strategy: StrategyName,

    /// Seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Letters per round
        #[arg(short = 'n', long, default_value = "9")]
        count: usize,
    },

    /// Simple CLI mode (interactive rounds without TUI)
    Simple {
        /// Letters per round
        #[arg(short = 'n', long, default_value = "9")]
        count: usize,
    },

    /// Draw random letters and print the best words
    Solve {
        /// Number of letters to draw
        #[arg(short = 'n', long, default_value = "9")]
        count: usize,
    },

    /// Print the best words for the given letters
    Letters {
        /// Available letters, e.g. "cartoons"
        tiles: String,
    },

    /// Per-letter usage statistics and dictionary summary
    Stats,

    /// List dictionary words of a given length
    Words {
        length: usize,
    },

    /// Score a word with the letter values
    Score {
        word: String,
    },

    /// Empty a full bag in random order
    Draw,

    /// Compare naive and efficient solvers on random draws
    Benchmark {
        /// Number of draws
        #[arg(short, long, default_value = "100")]
        rounds: usize,

        /// Letters per draw
        #[arg(short = 'n', long, default_value = "9")]
        count: usize,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn load_game_data(cli: &Cli) -> Result<(Dictionary, LettersSet)> {
    let dictionary = cli
        .dictionary
        .dictionary()
        .with_context(|| format!("loading dictionary from {}", cli.dictionary))?;
    let letters = cli
        .letters
        .letters()
        .with_context(|| format!("loading letters from {}", cli.letters))?;
    log::info!(
        "{} words, {} letters ({} tiles)",
        dictionary.len(),
        letters.len(),
        letters.total_tiles()
    );
    Ok((dictionary, letters))
}

fn main() -> Result<()> {
    init_logger(debug_requested());

    let cli = Cli::parse();
    let (dictionary, letters) = load_game_data(&cli)?;
    let mut rng = make_rng(cli.seed);
    let solver = Solver::new(StrategyType::from(cli.strategy), &dictionary, &letters);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { count: 9 });

    match command {
        Commands::Play { count } => {
            let mut config = PlayConfig::new(cli.mode);
            config.count = count;
            run_tui(App::new(solver, config, rng))
        }
        Commands::Simple { count } => {
            let mut config = PlayConfig::new(cli.mode);
            config.count = count;
            run_simple(config, &solver, &mut rng)
        }
        Commands::Solve { count } => {
            let mut config = PlayConfig::new(cli.mode);
            config.count = count;
            let round = play_round(config, &solver, &mut rng).context("drawing letters")?;
            print_round_result(&round);
            Ok(())
        }
        Commands::Letters { tiles } => {
            let available = parse_letters_arg(&tiles);
            anyhow::ensure!(!available.is_empty(), "no letters in {tiles:?}");
            print_round_result(&solve_letters(&solver, available, cli.mode));
            Ok(())
        }
        Commands::Stats => {
            print_letter_statistics(&letter_statistics(&dictionary, &letters));
            print_dictionary_summary(&DictionarySummary::new(&dictionary));
            Ok(())
        }
        Commands::Words { length } => {
            let words = dictionary.words_of_length(length);
            print_words(&format!("Words of length {length}"), &words);
            Ok(())
        }
        Commands::Score { word } => {
            print_word_score(&score_word(&word, &dictionary, &letters));
            Ok(())
        }
        Commands::Draw => {
            print_drawn(&draw_all(&letters, &mut rng)?);
            Ok(())
        }
        Commands::Benchmark { rounds, count } => {
            let mut config = BenchmarkConfig::new(cli.mode);
            config.rounds = rounds;
            config.count = count;
            println!("Running benchmark on {rounds} random draws of {count} letters...");
            let result = run_benchmark(&config, &dictionary, &letters, &mut rng)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
