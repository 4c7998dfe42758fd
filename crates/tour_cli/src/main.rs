//! Tour CLI, the command-line front end for the lesson compiler.
//!
//! Provides `tour build` to compile every lesson and report on it, `tour get`
//! to print a lesson (or all lessons) as served to clients, `tour list` to
//! show the available lesson ids, and `tour hash` to fingerprint a file.

#![warn(missing_docs)]

mod build;
mod get;
mod hash;
mod list;
mod pipeline;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Tour, a compiler for interactive tutorial lessons.
#[derive(Parser, Debug)]
#[command(name = "tour", version, about = "Tour lesson compiler")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `tour.toml` file or the directory holding it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile every lesson and print a summary.
    Build,
    /// Print the JSON for one lesson, or for all lessons.
    Get(GetArgs),
    /// List the ids of all lessons.
    List,
    /// Print the fingerprint of a file.
    Hash {
        /// The file to fingerprint.
        file: PathBuf,
    },
}

/// Arguments for the `tour get` subcommand.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Lesson id. If omitted, all lessons are printed as one object.
    pub id: Option<String>,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a config file or project directory.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    init_logging(&global);

    let result = match cli.command {
        Command::Build => build::run(&global),
        Command::Get(ref args) => get::run(args, &global),
        Command::List => list::run(&global),
        Command::Hash { ref file } => hash::run(file),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level chosen
/// by `--verbose` and `--quiet`.
fn init_logging(global: &GlobalArgs) {
    let filter = default_filter(global);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(global: &GlobalArgs) -> &'static str {
    if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "info"
    }
}
