use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use nicotine::{
    display_error,
    lexer::{lexer::tokenize, tokens::format_tokens},
    parser::parser::{parse_with_config, ParserConfig, DEFAULT_MAX_DEPTH},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Tokenizes and parses a source file, printing the parse tree of every
/// statement or the diagnostics of the ones that failed.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Path to the source file
    source: PathBuf,

    /// Print the token stream before parsing
    #[arg(short, long)]
    tokens: bool,

    /// Depth at which the parser gives up on a statement
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject `return` without a value
    #[arg(long)]
    strict_return: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr, filtered by RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let contents = match read_to_string(&args.source) {
        Ok(contents) => contents,
        Err(err) => {
            error!("failed to read {}: {}", args.source.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(&contents) {
        Ok(tokens) => tokens,
        Err(err) => {
            print!("{}", display_error(&err, &contents));
            return ExitCode::FAILURE;
        }
    };
    info!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        println!("{}", format_tokens(&tokens));
    }

    let config = ParserConfig {
        max_depth: args.max_depth,
        allow_empty_return: !args.strict_return,
    };

    let parse_start = Instant::now();
    let output = parse_with_config(&tokens, config);
    info!("Parsed in {:?}", parse_start.elapsed());

    for (index, diagnostic) in output.failures() {
        println!("Statement {} failed:", index + 1);
        print!("{}", diagnostic);
    }

    for (index, outcome) in output.outcomes.iter().enumerate() {
        println!("Statement {}:", index + 1);
        match outcome {
            Ok(tree) => print!("{}", tree),
            Err(_) => println!("Error"),
        }
    }

    info!("Total time: {:?}", start.elapsed());

    if output.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
