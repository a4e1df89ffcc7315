use std::{fs, io, process::ExitCode};

use clap::Parser;
use postfixer::{
    config::Config,
    interpreter::parser::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH},
    repl::{Session, evaluate_script},
};

/// postfixer converts infix arithmetic to postfix and evaluates it.
///
/// Without an expression it starts the interactive menu.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells postfixer to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Also prints the inorder rendering of each expression.
    #[arg(short, long)]
    infix: bool,

    /// Logs debug information to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Maximum parenthesis nesting accepted by the parser, at most 1024.
    #[arg(long,
          env = "POSTFIXER_MAX_DEPTH",
          default_value_t = DEFAULT_MAX_DEPTH,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_SUPPORTED_DEPTH as u64))]
    max_depth: usize,

    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config = Config::default().with_max_depth(args.max_depth);

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout().lock(), config).show_infix(args.infix);
        return match session.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    match evaluate_script(&script, &config, args.infix, &mut stdout, &mut stderr) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            log::debug!("some lines were rejected");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
