//! boolcalc - Command Line Interface
//!
//! Simplifies expressions given as arguments, or one per line from a file or
//! stdin.

use boolcalc::batch::{simplify_file, simplify_reader, BatchSummary, INVALID_EXPRESSION};
use boolcalc::{Simplifier, SimplifyConfig, DEFAULT_MAX_PASSES};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Shown in place of the echoed input when simplification fails
const EVALUATION_ERROR: &str = "evaluation error";

#[derive(Parser, Debug)]
#[command(name = "boolcalc")]
#[command(about = "Simplify boolean expressions over A, B and C", long_about = None)]
#[command(version)]
struct Args {
    /// Expressions to simplify, e.g. "(A & B) | (A & C)"
    #[arg(value_name = "EXPRESSION", conflicts_with = "file")]
    expressions: Vec<String>,

    /// Read one expression per line from FILE ("-" for stdin)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Catalog passes allowed per expression
    #[arg(short = 'p', long = "max-passes", default_value_t = DEFAULT_MAX_PASSES)]
    max_passes: usize,

    /// Print pass and rewrite counts to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG decides unless -v asks for more
    let mut filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    match args.verbose {
        0 => {}
        1 => filter = filter.add_directive(Level::DEBUG.into()),
        _ => filter = filter.add_directive(Level::TRACE.into()),
    }
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let simplifier = Simplifier::new(SimplifyConfig {
        max_passes: args.max_passes,
    });

    let ok = if args.expressions.is_empty() {
        run_batch(&simplifier, &args)
    } else {
        run_expressions(&simplifier, &args)
    };

    if !ok {
        process::exit(1);
    }
}

/// Simplify each command-line expression; false if any failed
fn run_expressions(simplifier: &Simplifier, args: &Args) -> bool {
    let mut ok = true;
    for expression in &args.expressions {
        match simplifier.simplify(expression) {
            Ok(result) => {
                println!("Original: {}", result.original);
                println!("Simplified: {}", result.simplified);
                if args.summary {
                    eprintln!(
                        "passes: {}, rewrites: {}, groups: {}",
                        result.stats.passes, result.stats.rewrites, result.stats.groups
                    );
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "simplification failed");
                println!("{}", EVALUATION_ERROR);
                println!("{}", INVALID_EXPRESSION);
                ok = false;
            }
        }
    }
    ok
}

/// Simplify a file or stdin line by line; false if any expression failed
fn run_batch(simplifier: &Simplifier, args: &Args) -> bool {
    let stdout = BufWriter::new(io::stdout().lock());

    let result = match &args.file {
        Some(path) if path.as_os_str() != "-" => simplify_file(simplifier, path, stdout),
        _ => simplify_reader(simplifier, io::stdin().lock(), stdout),
    };

    let summary: BatchSummary = match result {
        Ok(summary) => summary,
        Err(e) => {
            match &args.file {
                Some(path) => eprintln!("Error reading '{}': {}", path.display(), e),
                None => eprintln!("Error reading stdin: {}", e),
            }
            process::exit(1);
        }
    };

    if args.summary {
        eprintln!(
            "expressions: {}, simplified: {}, failed: {}, passes: {}",
            summary.expressions, summary.simplified, summary.failed, summary.passes
        );
    }
    summary.failed == 0
}
