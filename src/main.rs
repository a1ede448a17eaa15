//! Wordle Openers - CLI
//!
//! Reads a word list and prints the three letter-disjoint opening guesses that
//! cover the most frequent letters.

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use wordle_openers::{
    commands::find_openers, output::print_opener_report, wordlists::load_from_file,
};

#[derive(Parser, Debug)]
#[command(
    name = "wordle_openers",
    about = "Pick three letter-disjoint opening guesses by letter frequency",
    version,
    author
)]
struct Cli {
    /// Word list, one word per line (also accepted as -file)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: PathBuf,

    /// Show scores and candidate counts for each pick
    #[arg(short, long)]
    verbose: bool,
}

/// Accept the single-dash `-file` spelling by rewriting it to `--file`
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-file") => OsString::from("--file"),
            Some(s) if s.starts_with("-file=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let words = load_from_file(&cli.file)
        .with_context(|| format!("failed to read word list {}", cli.file.display()))?;

    let report = find_openers(&words)?;
    print_opener_report(&report, cli.verbose)?;
    Ok(())
}
