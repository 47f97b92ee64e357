use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use monkey::{
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">> ";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print every token with its position
    Lex,
    /// Print the parsed program in canonical form
    Parse,
}

/// Lexer and parser for the Monkey programming language.
///
/// Without FILE or --eval, starts a line-oriented REPL.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to process.
    file: Option<PathBuf>,

    /// Process the given source text instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// What to print for each input.
    #[arg(short, long, value_enum, default_value_t = Mode::Parse)]
    mode: Mode,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();

    let (source, file_name) = match (args.eval, args.file) {
        (Some(source), _) => (source, String::from("<eval>")),
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(source) => (source, path.to_string_lossy().into_owned()),
            Err(err) => {
                eprintln!("Failed to read '{}': {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        (None, None) => return repl(args.mode),
    };

    if run(&source, &file_name, args.mode) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Lexes or parses one input. Returns false if any parse error was reported.
fn run(source: &str, file_name: &str, mode: Mode) -> bool {
    match mode {
        Mode::Lex => {
            let mut lexer = Lexer::new(source);
            loop {
                let token = lexer.next_token();
                if token.is(TokenKind::EOF) {
                    break;
                }
                println!("{}", token);
            }
            true
        }
        Mode::Parse => {
            let (parser, program) = parse(source);

            if !parser.errors().is_empty() {
                for error in parser.errors() {
                    display_error(error, source, file_name);
                }
                return false;
            }

            println!("{}", program);
            true
        }
    }
}

fn repl(mode: Mode) -> ExitCode {
    println!("Welcome to the Monkey programming language!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        match lines.next() {
            Some(Ok(line)) => {
                run(&line, "<repl>", mode);
            }
            Some(Err(err)) => {
                eprintln!("Failed to read line: {}", err);
                return ExitCode::FAILURE;
            }
            None => return ExitCode::SUCCESS,
        }
    }
}
