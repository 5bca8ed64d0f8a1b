//! booktoc - Inspect and render staged tables of contents

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use booktoc::{Book, TocConfig, TocRenderer};

#[derive(Parser)]
#[command(name = "booktoc")]
#[command(version, about = "Render and inspect staged book tables of contents", long_about = None)]
#[command(after_help = "EXAMPLES:
    booktoc render build                   Print the TOC as HTML
    booktoc render build -c book.json      Render with a config file
    booktoc dump build --json              List staged records as JSON")]
struct Cli {
    /// Log store activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the staged TOC as nested HTML
    Render {
        /// Build directory holding the TOC store
        #[arg(value_name = "BUILD_DIR")]
        build_dir: PathBuf,

        /// JSON configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// List staged TOC records
    Dump {
        /// Build directory holding the TOC store
        #[arg(value_name = "BUILD_DIR")]
        build_dir: PathBuf,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Render { build_dir, config } => render(build_dir, config),
        Command::Dump { build_dir, json } => dump(build_dir, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render(build_dir: PathBuf, config: Option<PathBuf>) -> booktoc::Result<()> {
    let config = match config {
        Some(path) => TocConfig::load(path)?,
        None => TocConfig::default(),
    };
    let book = Book::with_config(build_dir, config);
    print!("{}", TocRenderer::render(&book)?);
    Ok(())
}

fn dump(build_dir: PathBuf, json: bool) -> booktoc::Result<()> {
    let entries = Book::new(build_dir).toc_reader().entries()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let args = entry
            .args
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{}{} [{}] {}",
            "  ".repeat(entry.level),
            if entry.title.is_empty() { "-" } else { entry.title.as_str() },
            entry.filename,
            args
        );
    }
    println!("Records: {}", entries.len());

    Ok(())
}
