mod source;

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use miette::{NamedSource, Report};
use tacc_syntax::{Compilation, CompileError};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Translate a tiny C program into three-address intermediate code.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Source file. Reads standard input until the braces balance when omitted.
    input: Option<PathBuf>,

    /// Write intermediate code here instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the final symbol table to standard error.
    #[arg(long)]
    symbols: bool,

    /// More logging on standard error (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` when the program was rejected; the diagnostic has
/// already been printed.
fn run(args: &Args) -> anyhow::Result<bool> {
    let (name, code) = read_source(args)?;
    debug!(%name, bytes = code.len(), "read source");

    match emit(&code, || open_output(args.output.as_deref())) {
        Ok(compilation) => {
            if args.symbols {
                for (var, value) in compilation.symbols.sorted() {
                    eprintln!("{var} -> {value}");
                }
            }
            Ok(true)
        }
        Err(err) => {
            let err = err.downcast::<CompileError>()?;
            let report = Report::new(err).with_source_code(NamedSource::new(name, code));
            eprintln!("{report:?}");
            Ok(false)
        }
    }
}

/// Translates the whole program before `open` is called, so a rejected
/// program leaves no intermediate code behind.
fn emit<W: Write>(
    code: &str,
    open: impl FnOnce() -> anyhow::Result<W>,
) -> anyhow::Result<Compilation> {
    let mut listing = Vec::new();
    let compilation = tacc_syntax::translate(code, &mut listing)?;

    let mut out = open()?;
    out.write_all(&listing)
        .and_then(|()| out.flush())
        .context("failed to write intermediate code")?;
    Ok(compilation)
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    })
}

fn read_source(args: &Args) -> anyhow::Result<(String, String)> {
    match &args.input {
        Some(path) => {
            let code = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            Ok((path.display().to_string(), code))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter your C code (end with `}}`):");
            }
            let code = source::read_until_balanced(stdin.lock())
                .context("cannot read standard input")?;
            Ok(("<stdin>".to_string(), code))
        }
    }
}
