use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod logging;
mod session;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "vernissage", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (default: ~/.config/vernissage/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the interactive exhibition session (default)
    ///
    /// Prompts for the exhibition title, organizer, start date and end date,
    /// then walks through a fixed demonstration:
    ///
    /// - Adds three artworks and prints the exhibition details
    /// - Lists the artworks matching "Painting"
    /// - Prints the artwork summary before and after an edit
    /// - Copies the exhibition and compares the copy with the original
    ///
    /// Dates are read as yyyy-mm-dd. An unparseable date or an end date
    /// before the start date stops the session with an error message.
    Run {
        /// strftime format for printed dates (e.g. "%d.%m.%Y")
        #[arg(long)]
        date_format: Option<String>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if missing
    Init,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // A path given on the command line must exist, except for the config
    // commands that only print or create it.
    let creates_or_prints = matches!(
        cli.command,
        Some(Commands::Config {
            action: ConfigAction::Init | ConfigAction::Path | ConfigAction::Example
        })
    );
    let (config_path, mut config) = match cli.config {
        Some(path) if !creates_or_prints => {
            let config = Config::load_required(&path)?;
            (path, config)
        }
        Some(path) => {
            let config = Config::load_from(&path)?;
            (path, config)
        }
        None => {
            let path = config::config_file_path();
            let config = Config::load_from(&path)?;
            (path, config)
        }
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    logging::init(&config.log_level)?;
    log::debug!("Loaded configuration from {}: {:?}", config_path.display(), config);

    match cli.command.unwrap_or(Commands::Run { date_format: None }) {
        Commands::Run { date_format } => {
            if let Some(date_format) = date_format {
                config.date_format = date_format;
            }
            if !commands::run_session(&config)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config, &config_path)?,
            ConfigAction::Path => commands::config::show_path(&config_path)?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config(&config_path)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
