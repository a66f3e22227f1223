use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use infixcalc::{evaluate, render, tokenize};
use log::info;

/// infixcalc evaluates arithmetic expressions with `+ - * /`, signed decimal
/// numbers and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infixcalc to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the token sequence of each expression before its result.
    #[arg(short, long)]
    tokens: bool,

    /// Rejects expressions longer than this many characters without
    /// evaluating them.
    #[arg(long, default_value_t = 4096)]
    max_length: usize,

    /// The expression to evaluate, or the file path when `--file` is set.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let expressions = expressions(&script, args.file);
    info!("evaluating {} expression(s)", expressions.len());

    let failures = run_all(&expressions, &args, &mut io::stdout().lock(), &mut io::stderr().lock());
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Splits the input into expressions: one per non-blank line of a file, or
/// the whole input as a single expression.
fn expressions(script: &str, from_file: bool) -> Vec<&str> {
    if from_file {
        script.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![script]
    }
}

/// Evaluates every expression, printing results to `out` and errors to `err`.
/// Returns the number of expressions that failed.
fn run_all(expressions: &[&str], args: &Args, out: &mut impl Write, err: &mut impl Write) -> usize {
    let mut failures = 0;
    for expression in expressions {
        if let Err(e) = run(expression, args, &mut *out) {
            // A closed stderr leaves nothing else to report to.
            let _ = writeln!(err, "error: {e}");
            failures += 1;
        }
    }
    failures
}

fn run(expression: &str, args: &Args, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let length = expression.chars().count();
    if length > args.max_length {
        return Err(format!("Expression is {length} characters long; the limit is {}.",
                           args.max_length).into());
    }

    if args.tokens {
        let tokens = tokenize(expression)?;
        let listed: Vec<String> = tokens.iter().map(|t| format!("{t:?}")).collect();
        writeln!(out, "tokens: [{}] ({})", listed.join(", "), render(&tokens))?;
    }

    writeln!(out, "{}", evaluate(expression)?)?;
    Ok(())
}
