use std::path::PathBuf;

use clap::Parser;

use tasklight::io::config_io;
use tasklight::model::Config;

/// A lightweight single-user to-do list with a terminal UI.
#[derive(Parser)]
#[command(name = "tl", version, about)]
struct Cli {
    /// Path to a config file (default: ./tasklight.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Category to select at startup (e.g. "Today", "Important")
    #[arg(long)]
    category: Option<String>,

    /// Start with the light theme
    #[arg(long)]
    light: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tasklight::tui::run(config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, config_io::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config_io::read_config(path)?,
        None => config_io::load_default()?,
    };

    // CLI flags override the config file.
    if let Some(category) = &cli.category {
        config.default_category = Some(category.clone());
    }
    if cli.light {
        config.ui.theme = "light".to_string();
    }

    Ok(config)
}
