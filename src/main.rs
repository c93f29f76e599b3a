use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use rpncalc::{EvaluationError, evaluate_expression};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates arithmetic expressions such as `(3 + 4) * 2` or `5!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate, or a file path when `--file` is set.
    /// Expressions are read from standard input when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let expressions = match input_expressions(&args) {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for expression in &expressions {
        debug!(%expression, "evaluating");
        let outcome = evaluate_expression(expression);
        failed |= outcome.is_err();
        display_result(&outcome);
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Collects the expressions to evaluate from the command line, a file, or
/// standard input. Blank lines in files and on standard input are skipped.
fn input_expressions(args: &Args) -> Result<Vec<String>, String> {
    match (&args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(path).map_err(|_| {
                             format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
                         })?;
            Ok(non_blank(script.lines().map(str::to_string)))
        },
        (Some(expression), false) => Ok(vec![expression.clone()]),
        (None, true) => Err("A file path is required with --file.".to_string()),
        (None, false) => {
            let lines = io::stdin().lock()
                                   .lines()
                                   .collect::<io::Result<Vec<_>>>()
                                   .map_err(|e| format!("Failed to read standard input: {e}"))?;
            Ok(non_blank(lines.into_iter()))
        },
    }
}

fn non_blank(lines: impl Iterator<Item = String>) -> Vec<String> {
    lines.filter(|line| !line.trim().is_empty()).collect()
}

fn display_result(outcome: &Result<f64, EvaluationError>) {
    match outcome {
        Ok(value) => println!("Result: {value}"),
        Err(e) => println!("Error: {e}"),
    }
}

/// Installs a stderr logger filtered by `RUST_LOG`, defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}
