use std::fs;

use clap::Parser;
use mexpr::{get_result_with_config, interpreter::evaluator::core::EvalConfig, render_result};

/// mexpr evaluates programs written in a minimal expression language of
/// integers, vectors and closures, and prints the value of the last
/// statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mexpr to read a file instead of treating the argument as source.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of nested function calls before evaluation is aborted.
    #[arg(long, default_value_t = EvalConfig::default().max_call_depth)]
    max_call_depth: usize,

    contents: String,
}

/// Installs a log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = EvalConfig { max_call_depth: args.max_call_depth };
    match get_result_with_config(&script, &config) {
        Ok(value) => println!("{}", render_result(&value)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
