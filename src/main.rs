use std::{fs, process::ExitCode};

use clap::Parser;
use matheval::{
    config::{Options, TrailingInput},
    evaluate_with, init_tracing,
    interpreter::evaluator::function::core::signatures,
    parse,
};

/// matheval evaluates arithmetic expressions: operators, shifts, parentheses,
/// math functions and the constants `e` and `pi`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a file and evaluate each non-empty line of it.
    #[arg(short, long)]
    file: bool,

    /// Print the parsed tree as an s-expression instead of evaluating it.
    #[arg(short, long)]
    tree: bool,

    /// Ignore anything after the first complete expression instead of
    /// reporting it as an error.
    #[arg(long)]
    permissive: bool,

    /// List the built-in functions and exit.
    #[arg(short, long)]
    list_functions: bool,

    /// The expression to evaluate, or a path when `--file` is given.
    #[arg(required_unless_present = "list_functions")]
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    if args.list_functions {
        for signature in signatures() {
            println!("{signature}");
        }
        return ExitCode::SUCCESS;
    }

    let contents = args.contents.unwrap_or_default();
    let expressions = if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .map(str::to_string)
              .collect()
    } else {
        vec![contents]
    };

    let options = Options { trailing_input: if args.permissive {
                                TrailingInput::Ignore
                            } else {
                                TrailingInput::Reject
                            }, };

    let mut failed = false;
    for expression in &expressions {
        if args.tree {
            match parse(expression, &options) {
                Ok(tree) => println!("{tree}"),
                Err(e) => {
                    eprintln!("{e}");
                    failed = true;
                },
            }
            continue;
        }

        let result = evaluate_with(expression, &options);
        match result.message {
            None => println!("{}", result.answer),
            Some(message) => {
                eprintln!("{message}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
