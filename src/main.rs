//! Wordle Sieve - CLI
//!
//! Index-driven Wordle solver with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wordle_sieve::{
    commands::{
        ChunkSpec, SecretSelection, SolveConfig, SurveyConfig, analyze_word,
        print_solve_all_statistics, print_survey_result, run_simple, run_solve_all, run_survey,
        solve_word,
    },
    config::{DEFAULT_MAX_ROUNDS, SolverConfig},
    core::Alphabet,
    corpus::{Corpus, Lexicon, Shortlist, WordId},
    output::{print_analysis_result, print_solve_result},
    solver::{GuessSelector, ScaleGuard},
    wordlists::{ENGLISH, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Wordle solver driven by a precomputed letter/position index",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'english' (default, embedded) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "english")]
    wordlist: String,

    /// Alphabet: 'english' (default), 'spanish', or the letters themselves
    #[arg(short = 'a', long, global = true, default_value = "english")]
    alphabet: Alphabet,

    /// Rounds before a game counts as lost
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Candidate count above which only distinct-letter words are used as secrets ('off' to disable)
    #[arg(long, global = true, default_value_t = ScaleGuard::default())]
    scale_guard: ScaleGuard,

    /// Score guesses on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Shuffle the lexicon with this seed (changes tie-breaking only)
    #[arg(long, global = true)]
    shuffle: Option<u64>,

    /// First guess to play instead of computing one
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Only consider this many shortlisted words when computing an opener
    #[arg(long, global = true)]
    opener_shortlist: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Self-play against every lexicon word
    SolveAll {
        /// Only play the first N words
        #[arg(short, long, conflicts_with = "sample")]
        limit: Option<usize>,

        /// Play N randomly drawn words
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Rank first guesses by average remaining candidates
    Survey {
        /// Number of openers to print
        #[arg(short, long, default_value_t = 20)]
        top: usize,

        /// Limit the shortlist to the K highest letter-frequency words
        #[arg(long)]
        shortlist: Option<usize>,

        /// Survey only slice k of n of the shortlist, e.g. 2/8
        #[arg(long)]
        chunk: Option<ChunkSpec>,
    },

    /// Score a specific word as a first guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Also rank it against every other word
        #[arg(short, long)]
        rank: bool,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            max_rounds: self.max_rounds,
            scale_guard: self.scale_guard,
            shortlist_size: self.opener_shortlist,
            parallel: !self.sequential,
            shuffle_seed: self.shuffle,
            opener: self.opener.clone(),
        }
    }
}

/// Load the lexicon based on the -w and -a flags
fn load_lexicon(wordlist: &str, alphabet: Alphabet) -> Result<Lexicon> {
    let loaded = match wordlist {
        "english" => loader::LoadedWords {
            words: loader::words_from_slice(ENGLISH, &alphabet),
            skipped: 0,
        },
        path => loader::load_from_file(path, &alphabet)
            .with_context(|| format!("Failed to read word list '{path}'"))?,
    };

    if loaded.skipped > 0 {
        eprintln!(
            "{}",
            format!(
                "⚠ Skipped {} entries that are not 5-letter words over the alphabet",
                loaded.skipped
            )
            .yellow()
        );
    }

    Ok(Lexicon::new(alphabet, loaded.words)?)
}

/// Opener from --opener, or the best shortlisted word
fn resolve_opener(selector: &GuessSelector<'_>, config: &SolverConfig) -> Result<WordId> {
    let lexicon = selector.lexicon();
    if let Some(word) = &config.opener {
        return Ok(lexicon.resolve(word)?);
    }

    let shortlist = Shortlist::build(lexicon, config.shortlist_size);
    println!(
        "Computing opener over {} shortlisted words...",
        shortlist.len()
    );
    match selector.opener(Some(&shortlist)) {
        Some(opener) => {
            println!("Opener: {}", lexicon.word(opener).text().to_uppercase().bright_green());
            Ok(opener)
        }
        None => bail!("Lexicon has no words to open with"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.solver_config();

    let mut lexicon = load_lexicon(&cli.wordlist, cli.alphabet.clone())?;
    if let Some(seed) = config.shuffle_seed {
        lexicon = lexicon.shuffled(seed);
    }
    let corpus = Corpus::new(lexicon);
    let selector = GuessSelector::from_config(&corpus, &config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use wordle_sieve::interactive::{App, run_tui};

            let opener = resolve_opener(&selector, &config)?;
            run_tui(App::new(&selector, opener, config.max_rounds))
        }
        Commands::Simple => {
            let opener = resolve_opener(&selector, &config)?;
            run_simple(&selector, opener, config.max_rounds).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { word, verbose } => {
            let opener = resolve_opener(&selector, &config)?;
            let mut solve = SolveConfig::new(word, corpus.lexicon().word(opener).text().to_string());
            solve.max_rounds = config.max_rounds;

            let result = solve_word(solve, &selector).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::SolveAll {
            limit,
            sample,
            seed,
        } => {
            let selection = match (limit, sample) {
                (Some(n), _) => SecretSelection::First(n),
                (None, Some(size)) => SecretSelection::Sample { size, seed },
                (None, None) => SecretSelection::All,
            };
            let opener = resolve_opener(&selector, &config)?;

            let stats = run_solve_all(&selector, opener, selection, config.max_rounds);
            print_solve_all_statistics(&stats);
            Ok(())
        }
        Commands::Survey {
            top,
            shortlist,
            chunk,
        } => {
            let survey = SurveyConfig {
                shortlist_size: shortlist.or(config.shortlist_size),
                chunk,
            };
            let result = run_survey(&selector, survey);
            print_survey_result(&result, &selector, top);
            Ok(())
        }
        Commands::Analyze { word, rank } => {
            let result = analyze_word(&word, &selector, rank).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}
