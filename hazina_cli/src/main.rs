mod commands;
mod config;
mod logging;
mod menu;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "hazina")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// custom config file (default: ~/.hazina/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// write a default config file
    Init,

    /// start an interactive banking session (default)
    Run {
        /// refuse every loan application for this session
        #[arg(long)]
        disable_loans: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run {
        disable_loans: false,
    }) {
        Commands::Init => {
            commands::init::run(cli.config)?;
        }

        Commands::Run { disable_loans } => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            logging::init(&config.log_level);
            commands::run::run(config, disable_loans)?;
        }
    }
    Ok(())
}
