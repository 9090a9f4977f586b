use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use crate::config::Config;

pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    println!("Initialising Hazina...\n");

    let config_path = match config_path {
        Some(path) => path,
        None => {
            let dir = Config::hazina_dir()?;
            std::fs::create_dir_all(&dir).context("Failed to create .hazina directory")?;
            println!("Created: {}", dir.display());
            Config::config_file()?
        }
    };

    if config_path.exists() {
        bail!("Config already exists at: {}", config_path.display())
    }

    Config::default()
        .save(&config_path)
        .context("Failed to write default config")?;

    println!("Wrote default config to: {}", config_path.display());
    println!("Start a session with: hazina run");
    println!("Initialisation complete!");

    Ok(())
}
