//! Word Weaver - CLI
//!
//! Shortest word ladders, dictionary connectivity and a guessing engine
//! over a fixed-length word list.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;
use word_weaver::{
    commands::{
        BUILTIN_FIXTURES, BenchmarkConfig, LadderConfig, SolveConfig, WEAVER_FIXTURES,
        analyze_word, benchmark_dictionary, count_components, find_farthest, rank_openings,
        run_ladders, run_regression, solve_word,
    },
    core::Dictionary,
    output::{
        print_analysis_result, print_benchmark_result, print_count_result, print_duration,
        print_ladder_outcome, print_paths_results, print_rank_result, print_regression_result,
        print_solve_result,
    },
    solver::{
        CoverageConfig, EntropyStrategy, LetterCoverageStrategy, MinimaxStrategy,
        OpeningGuessCache, StrategyType,
    },
    wordlists::{builtin_dictionary, loader},
};

#[derive(Parser)]
#[command(
    name = "word_weaver",
    about = "Word ladder solver, dictionary connectivity explorer and guessing engine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'builtin' (default, 838 four-letter words) or path to a whitespace-separated file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// File of words to remove from the dictionary
    #[arg(short = 'x', long, global = true)]
    exclude: Option<PathBuf>,

    /// Trace search progress (same as RUST_LOG=trace)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the elapsed time after the command
    #[arg(short, long, global = true)]
    statistics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every shortest ladder for each start/target pair
    Ladder {
        /// Words taken two at a time as start and target
        words: Vec<String>,

        /// Read the words from a file instead
        #[arg(short, long)]
        list: Option<PathBuf>,
    },

    /// Partition the dictionary into connected sets
    Count {
        /// Seed words (default: every dictionary word)
        seeds: Vec<String>,
    },

    /// Show the farthest words reachable from each seed
    Paths {
        /// Seed words (default: every dictionary word)
        seeds: Vec<String>,
    },

    /// Check ladder results against known fixtures
    Regress {
        #[arg(long, value_enum, default_value_t = FixtureSet::Builtin)]
        fixtures: FixtureSet,
    },

    /// Solve a specific hidden word
    Solve {
        /// The hidden word
        secret: String,

        #[command(flatten)]
        strategy: StrategyArgs,

        /// Give up after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,

        /// Show candidate counts and entropy per turn
        #[arg(long)]
        details: bool,
    },

    /// Rank opening guesses
    Rank {
        #[command(flatten)]
        strategy: StrategyArgs,

        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark the solver over many hidden words
    Benchmark {
        #[command(flatten)]
        strategy: StrategyArgs,

        /// Number of random words to test (default: every word)
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for random sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,
    },
}

#[derive(Args)]
struct StrategyArgs {
    /// Ranking strategy
    #[arg(long, value_enum, default_value_t = StrategyKind::Entropy)]
    strategy: StrategyKind,

    /// Score only the first N candidates of the pool
    #[arg(short, long)]
    depth: Option<usize>,

    /// Frequency corpus for the coverage strategy (`word count [plural]` per line)
    #[arg(short, long)]
    frequencies: Option<PathBuf>,

    /// Leave plural corpus entries out of the letter counts
    #[arg(long)]
    exclude_plurals: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyKind {
    Coverage,
    Entropy,
    Minimax,
}

impl StrategyKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Coverage => "coverage",
            Self::Entropy => "entropy",
            Self::Minimax => "minimax",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FixtureSet {
    /// Fixtures for the embedded dictionary
    Builtin,
    /// Fixtures for the Weaver `4_letter_words.txt` dictionary
    Weaver,
}

/// Load the dictionary based on the -w and -x flags
fn load_dictionary(wordlist: &str, exclude: Option<&Path>) -> Result<Dictionary> {
    let denied = exclude.map(loader::load_tokens).transpose()?.unwrap_or_default();

    let dictionary = match wordlist {
        "builtin" => builtin_dictionary().without(denied.iter().map(String::as_str)),
        path => loader::load_dictionary(path, None, &denied)?,
    };

    if dictionary.is_empty() {
        bail!("Dictionary '{wordlist}' has no usable words");
    }
    debug!(
        "Loaded {} words of length {:?}",
        dictionary.len(),
        dictionary.word_len()
    );
    Ok(dictionary)
}

fn build_strategy(args: &StrategyArgs, dictionary: &Dictionary) -> Result<StrategyType> {
    if args.exclude_plurals && args.frequencies.is_none() {
        warn!("--exclude-plurals has no effect without --frequencies");
    }

    let strategy = match args.strategy {
        StrategyKind::Entropy => StrategyType::Entropy(EntropyStrategy::new(args.depth)),
        StrategyKind::Minimax => StrategyType::Minimax(MinimaxStrategy::new(args.depth)),
        StrategyKind::Coverage => {
            let coverage = match &args.frequencies {
                Some(path) => {
                    let table = loader::load_frequencies(path, dictionary.word_len())?;
                    let config = CoverageConfig {
                        exclude_plurals: args.exclude_plurals,
                        ..CoverageConfig::default()
                    };
                    LetterCoverageStrategy::from_frequencies(table, config)
                }
                None => LetterCoverageStrategy::from_words(dictionary),
            };
            StrategyType::Coverage(coverage.with_search_depth(args.depth))
        }
    };
    Ok(strategy)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist, cli.exclude.as_deref())?;
    let start = Instant::now();

    match cli.command {
        Commands::Ladder { words, list } => {
            run_ladder_command(words, list.as_deref(), &dictionary)?;
        }
        Commands::Count { seeds } => run_count_command(&seeds, &dictionary)?,
        Commands::Paths { seeds } => run_paths_command(&seeds, &dictionary)?,
        Commands::Regress { fixtures } => run_regress_command(fixtures, &dictionary)?,
        Commands::Solve {
            secret,
            strategy,
            max_guesses,
            details,
        } => run_solve_command(secret, &strategy, max_guesses, details, &dictionary)?,
        Commands::Rank { strategy, top } => run_rank_command(&strategy, top, &dictionary)?,
        Commands::Analyze { word } => run_analyze_command(&word, &dictionary)?,
        Commands::Benchmark {
            strategy,
            sample,
            seed,
            max_guesses,
        } => {
            let config = BenchmarkConfig {
                sample,
                seed,
                max_guesses,
                show_progress: true,
            };
            run_benchmark_command(&strategy, &config, &dictionary)?;
        }
    }

    if cli.statistics {
        print_duration(start.elapsed());
    }
    Ok(())
}

fn run_ladder_command(
    words: Vec<String>,
    list: Option<&Path>,
    dictionary: &Dictionary,
) -> Result<()> {
    let keys = match list {
        Some(path) => loader::load_tokens(path)?,
        None => words,
    };
    if keys.is_empty() {
        bail!("Give start and target words, or a list file with -l");
    }

    let outcomes =
        run_ladders(&LadderConfig::new(keys), dictionary).map_err(|e| anyhow::anyhow!(e))?;
    for outcome in &outcomes {
        print_ladder_outcome(outcome);
    }
    Ok(())
}

fn run_count_command(seeds: &[String], dictionary: &Dictionary) -> Result<()> {
    let result = count_components(seeds, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_count_result(&result);
    Ok(())
}

fn run_paths_command(seeds: &[String], dictionary: &Dictionary) -> Result<()> {
    let results = find_farthest(seeds, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_paths_results(&results);
    Ok(())
}

fn run_regress_command(fixtures: FixtureSet, dictionary: &Dictionary) -> Result<()> {
    let fixtures = match fixtures {
        FixtureSet::Builtin => BUILTIN_FIXTURES,
        FixtureSet::Weaver => WEAVER_FIXTURES,
    };

    let result = run_regression(fixtures, dictionary);
    print_regression_result(&result);
    if !result.all_passed() {
        bail!("{} regression fixtures failed", result.failures.len());
    }
    Ok(())
}

fn run_solve_command(
    secret: String,
    args: &StrategyArgs,
    max_guesses: Option<usize>,
    details: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    let strategy = build_strategy(args, dictionary)?;
    let config = SolveConfig {
        secret,
        max_guesses,
    };
    let mut cache = OpeningGuessCache::new();

    let result =
        solve_word(&config, strategy, dictionary, &mut cache).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_rank_command(args: &StrategyArgs, top: usize, dictionary: &Dictionary) -> Result<()> {
    let strategy = build_strategy(args, dictionary)?;
    let result = rank_openings(&strategy, dictionary, top);
    print_rank_result(&result);
    Ok(())
}

fn run_analyze_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let result = analyze_word(word, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    args: &StrategyArgs,
    config: &BenchmarkConfig,
    dictionary: &Dictionary,
) -> Result<()> {
    let strategy =
        build_strategy(args, dictionary).context("Failed to set up the ranking strategy")?;

    println!(
        "Running benchmark with {} strategy over {} words...",
        args.strategy.name(),
        config.sample.map_or(dictionary.len(), |n| n.min(dictionary.len()))
    );

    let result = benchmark_dictionary(strategy, dictionary, config);
    print_benchmark_result(&result);
    Ok(())
}
