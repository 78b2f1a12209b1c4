use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use fun_translate::{CharLiterals, Config};
use tracing_subscriber::EnvFilter;

/// Translate a Go source file into a Fun syntax tree
#[derive(Parser)]
#[command(name = "fun-translate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Go source file
    file: PathBuf,

    /// Output path. Defaults to the input path with the `.fun` extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail on top-level var, const and type declarations instead of skipping them
    #[arg(long)]
    strict_top_levels: bool,

    /// Fail on character literals longer than one code point instead of truncating them
    #[arg(long)]
    reject_multi_char: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            strict_top_levels: self.strict_top_levels,
            char_literals: if self.reject_multi_char {
                CharLiterals::Reject
            } else {
                CharLiterals::Truncate
            },
        }
    }
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
    let module = fun_translate::translate_file(&cli.file, &cli.config())?;

    // There is no Fun printer yet, the tree is written in its debug form
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.file.with_extension("fun"));
    std::fs::write(&output, format!("{module:#?}\n"))
        .with_context(|| format!("Can't write {}", output.display()))?;

    tracing::info!(output = %output.display(), "translated {}", module.name);
    Ok(())
}
