use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dotenvrc::utils;

#[derive(Parser)]
#[command(name = "dotenvrc")]
#[command(about = "Convert a direnv-style .envrc file into a flat .env file")]
struct Cli {
    /// Project root containing the .envrc file. Defaults to DOTENVRC_ROOT,
    /// then the nearest ancestor directory holding an .envrc file
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Path to a dotenvrc.toml configuration file. Defaults to
    /// <root>/dotenvrc.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the .env file from the .envrc file
    Convert,
    /// Print the resolved NAME=VALUE pairs without writing anything
    Show,
    /// Exit non-zero if the .env file is out of date
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = utils::build_engine(cli.root.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Convert => utils::convert(&engine),
        Commands::Show => utils::show(&engine),
        Commands::Check => utils::check(&engine),
    }
}
