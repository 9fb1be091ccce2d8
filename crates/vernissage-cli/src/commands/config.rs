use anyhow::Result;
use std::path::Path;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config, config_path: &Path) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());

    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  date_format: {}", config.date_format);
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (VERNISSAGE_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config(config_path: &Path) -> Result<()> {
    if config::ensure_config_file(config_path)? {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure vernissage.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
