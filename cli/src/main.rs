use std::{fmt::Display, io, process::ExitCode};

use clap::{ArgAction, Parser, ValueEnum};
use infix::Vocabulary;
use tracing_subscriber::filter::LevelFilter;
use vocab::{Boolean, ComplexArithmetic, Real};

mod session;

use session::{Context, Outcome, Show};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Real,
    Bool,
    Complex,
}

/// Evaluate infix expressions.
///
/// With no expressions given, reads one expression per line from stdin.
/// Besides plain expressions the prompt understands `let <name> = <expr>`,
/// `:tokens <expr>`, `:postfix <expr>`, `vars` and `quit`.
#[derive(Parser, Debug)]
#[command(name = "infix", version)]
struct Args {
    /// Which vocabulary to evaluate with.
    #[arg(long, value_enum, default_value_t = Kind::Real)]
    vocab: Kind,
    /// What to print for each expression.
    #[arg(long, value_enum, default_value_t = Show::Result)]
    show: Show,
    /// Raise log verbosity, may be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    expressions: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run<V>(vocabulary: V, args: &Args) -> ExitCode
where
    V: Vocabulary,
    V::Output: Display + Clone,
{
    let mut ctx = Context::new(vocabulary);
    if !args.expressions.is_empty() {
        let mut failed = false;
        for e in &args.expressions {
            println!("{e}");
            match ctx.execute(e, args.show) {
                Outcome::Print(shown) => println!("{shown}"),
                Outcome::Error(err) => {
                    eprintln!("{err}");
                    failed = true;
                }
                Outcome::Quit => break,
            }
        }
        return if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }
    let mut input = String::new();
    loop {
        input.clear();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "failed to read stdin");
                return ExitCode::FAILURE;
            }
        }
        if input.trim().is_empty() {
            continue;
        }
        match ctx.execute(&input, args.show) {
            Outcome::Quit => break,
            Outcome::Print(shown) => println!("{shown}"),
            Outcome::Error(err) => eprintln!("{err}"),
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::info!(vocab = ?args.vocab, "starting");
    match args.vocab {
        Kind::Real => run(Real::<f64>::new(), &args),
        Kind::Bool => run(Boolean, &args),
        Kind::Complex => run(ComplexArithmetic, &args),
    }
}
