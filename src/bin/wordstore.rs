use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use wordstore::core::config::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_WORDS_PER_COLUMN};
use wordstore::{Config, WordStore};

#[derive(Parser)]
#[command(name = "wordstore")]
#[command(about = "Collect unique English words into a paginated HTML list", long_about = None)]
struct Args {
    /// Text corpus to read, or `-` for stdin
    #[arg(long, short, env = "WORDSTORE_INPUT")]
    input: PathBuf,

    /// HTML artifact holding the word list; read first, then rewritten
    #[arg(long, short, env = "WORDSTORE_OUTPUT", default_value = "english_words.html")]
    output: PathBuf,

    /// Words per rendered column
    #[arg(long, env = "WORDSTORE_WORDS_PER_COLUMN", default_value_t = DEFAULT_WORDS_PER_COLUMN)]
    words_per_column: usize,

    /// Shortest accepted word, in characters
    #[arg(long, env = "WORDSTORE_MIN_WORD_LENGTH", default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_word_length: usize,

    /// Write the artifact in place instead of via temp file + rename
    #[arg(long)]
    no_atomic: bool,

    /// Do not hold `<output>.lock` during the run
    #[arg(long)]
    no_lock: bool,

    /// Print run statistics as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting wordstore v{}", wordstore::VERSION);

    let config = Config {
        words_per_column: args.words_per_column,
        min_word_length: args.min_word_length,
        atomic_write: !args.no_atomic,
        lock_output: !args.no_lock,
    };
    let store = WordStore::new(config).context("invalid configuration")?;

    let stats = if args.input.as_os_str() == "-" {
        store.run(io::stdin().lock(), &args.output)
    } else {
        store.run_path(&args.input, &args.output)
    }
    .with_context(|| format!("storing words into {}", args.output.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total English words stored: {}", stats.total_words);
        println!(
            "Unique English words with serial numbers have been stored in {}",
            stats.output_path.display()
        );
    }

    Ok(())
}
