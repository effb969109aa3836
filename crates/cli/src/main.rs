mod commands;
mod harness;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ExportCommand, MenuCommand, ResolveCommand, SeedCommand, TestCommand};

/// MenuCraft CLI - restaurant menu timing and dashboard tooling
#[derive(Debug, Parser)]
#[command(
    name = "menucraft",
    version,
    about = "Restaurant menu timing and dashboard tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the current menu period
    Resolve(ResolveCommand),
    /// Show the menu visible at a given time
    Menu(MenuCommand),
    /// Write seed data to the store
    Seed(SeedCommand),
    /// Export the restaurant fleet as CSV
    Export(ExportCommand),
    /// Execute resolver test scenarios
    Test(TestCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Resolve(cmd) => cmd.execute()?,
        Commands::Menu(cmd) => cmd.execute()?,
        Commands::Seed(cmd) => cmd.execute()?,
        Commands::Export(cmd) => cmd.execute()?,
        Commands::Test(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
