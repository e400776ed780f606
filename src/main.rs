use std::path::PathBuf;

use clap::Parser;
use ladders::config::LadderConfig;
use ladders::error::Result;
use ladders::ladder::{exhaustive, Ladder, LadderSolver};
use ladders::utils::{logging, serialization};
use ladders::vocab::{NeighborStrategy, Vocabulary};
use tracing::{error, info, warn};
#[macro_use]
extern crate text_io;

const DEFAULT_WORDS_PATH: &str = "words.txt";

/// Find every shortest word ladder between two words
#[derive(Debug, Parser)]
#[command(name = "ladders")]
struct Args {
    /// Word to start from. Prompted for when missing
    start: Option<String>,
    /// Word to finish on. Prompted for when missing
    end: Option<String>,
    /// Word list with one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Stop after this many ladders
    #[arg(long)]
    max_paths: Option<usize>,
    #[arg(long, value_enum)]
    strategy: Option<NeighborStrategy>,
    /// Print the ladders as JSON
    #[arg(long)]
    json: bool,
    /// Use the brute-force search (small word lists only)
    #[arg(long)]
    exhaustive: bool,
    /// Expand levels on a single thread
    #[arg(long)]
    sequential: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn prompt(message: &str) -> String {
    println!("{}", message);
    let word: String = read!("{}\n");
    word.trim().to_string()
}

fn load_config(args: &Args) -> Result<LadderConfig> {
    let mut config = match &args.config {
        Some(path) => LadderConfig::from_file(path)?,
        None => LadderConfig::default(),
    };
    if let Some(words) = &args.words {
        config.words_path = Some(words.clone());
    }
    if let Some(max_paths) = args.max_paths {
        config.max_paths = Some(max_paths);
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if args.sequential {
        config.parallel = false;
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let words_path = config
        .words_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH));
    let vocabulary = Vocabulary::from_file(&words_path, &config)?;
    if vocabulary.is_empty() {
        warn!("No words read from {}", words_path.display());
    }
    info!("Number of Words: {}", vocabulary.len());

    let normalize = |word: String| {
        if config.uppercase {
            word.to_uppercase()
        } else {
            word
        }
    };
    let start = normalize(args.start.unwrap_or_else(|| prompt("Enter Start Word:")));
    let end = normalize(args.end.unwrap_or_else(|| prompt("Enter End Word:")));

    if start != end && !vocabulary.contains(&end) {
        warn!("{} is not in the word list", end);
    }

    if args.exhaustive {
        let mut ladders = exhaustive::shortest_ladders(&start, &end, &vocabulary);
        ladders.truncate(config.max_paths.unwrap_or(usize::MAX));
        return print_ladders(ladders, args.json, &start, &end);
    }

    let solver = LadderSolver::new(vocabulary, config);
    match solver.find_shortest_path(&start, &end) {
        // Paths come out in sorted order, so they can be printed as found
        Some(graph) => {
            let ladders = solver.ladders(&graph, &start, &end)?;
            print_ladders(ladders, args.json, &start, &end)
        }
        None => print_ladders(Vec::new(), args.json, &start, &end),
    }
}

fn print_ladders<I>(ladders: I, json: bool, start: &str, end: &str) -> Result<()>
where
    I: IntoIterator<Item = Ladder>,
{
    if json {
        let ladders: Vec<Ladder> = ladders.into_iter().collect();
        println!("{}", serialization::to_json_string(&ladders)?);
        return Ok(());
    }
    let mut found = 0;
    for ladder in ladders {
        println!("{}", ladder.join(" -> "));
        found += 1;
    }
    if found == 0 {
        println!("No ladder from {} to {}", start, end);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = logging::configure_logging(args.verbose) {
        eprintln!("{}", err);
    }
    if let Err(err) = run(args) {
        error!("{}", err);
        std::process::exit(1);
    }
}
