mod check;
mod completions;
mod deps;
mod generate;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use deps::DepsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tablegraft_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "graft")]
#[command(version)]
#[command(about = "Generate imported table type definitions from an introspected schema")]
pub(crate) struct Cli {
    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::List(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Deps(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List table types (or every type with --all)
    List(ListCommand),

    /// Generate definitions for the selected table types
    Generate(GenerateCommand),

    /// Show the table types reachable from a set of seed types
    Deps(DepsCommand),

    /// Validate the schema and the configured selection
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
