// lexgram: lexical and grammar check of a program file

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use lexgram::{tokenize, Analyzer, AnalyzerOptions};

/// Check a begin/end program and report success or the first error
#[derive(Debug, Parser)]
#[command(name = "lexgram", version, about, long_about = None)]
struct Cli {
    /// Program file to check; asked for interactively when omitted
    path: Option<PathBuf>,

    /// Print the token sequence before analysing
    #[arg(long)]
    tokens: bool,

    /// Every ')' must close the most recent unmatched '('
    #[arg(long)]
    strict_parens: bool,

    /// Reject bare identifiers and statements starting with a keyword
    #[arg(long)]
    strict_statements: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let path = match cli.path {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), "read program");

    let options = AnalyzerOptions {
        strict_parens: cli.strict_parens,
        strict_statements: cli.strict_statements,
    };

    match run(&source, options, cli.tokens) {
        Ok(true) => {
            println!("success");
            Ok(ExitCode::SUCCESS)
        }
        Ok(false) => {
            eprintln!("error: program ended without 'end #'");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(
    source: &str,
    options: AnalyzerOptions,
    print_tokens: bool,
) -> Result<bool, lexgram::Error> {
    let mut analyzer = Analyzer::with_options(tokenize(source)?, options);
    debug!(options = ?analyzer.options(), "analysing");

    if print_tokens {
        println!("{}", token_listing(&analyzer));
    }

    let verdict = analyzer.analyse();
    for (name, state) in analyzer.variables().iter() {
        trace!(%name, ?state, "variable");
    }
    Ok(verdict?)
}

fn token_listing(analyzer: &Analyzer) -> String {
    let listing = analyzer
        .tokens()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", listing)
}

/// Ask for a program file until an existing one is named.
fn prompt_for_path() -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Program file: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("no program file given");
        };
        let path = PathBuf::from(line?.trim());
        if path.is_file() {
            return Ok(path);
        }
        eprintln!("File not found: {}", path.display());
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "lexgram=warn",
        1 => "lexgram=debug",
        _ => "lexgram=trace",
    }
}
