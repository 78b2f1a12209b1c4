use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use fun_translate::parser::Filter;
use tracing_subscriber::EnvFilter;

/// Print the syntax tree of a Go source file
#[derive(Parser)]
#[command(name = "goast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Go source file
    file: PathBuf,

    /// Keep positions and empty fields
    #[arg(long)]
    all: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let src = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Can't read {}", cli.file.display()))?;
    let parsed = fun_translate::parse_source(&cli.file.display().to_string(), &src)?;

    let filter = if cli.all { Filter::All } else { Filter::Compact };
    print!("{}", parsed.dump(filter));
    Ok(())
}
