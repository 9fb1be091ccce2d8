use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vernissage_core::date::DEFAULT_DISPLAY_FORMAT;

/// Configuration for vernissage.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (VERNISSAGE_* prefix)
/// 3. Config file (~/.config/vernissage/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// strftime format used when printing exhibition dates.
    ///
    /// Can be set via:
    /// - CLI: --date-format "%d.%m.%Y"
    /// - ENV: VERNISSAGE_DATE_FORMAT
    /// - Config: date_format = "%d.%m.%Y"
    /// - Default: %Y-%m-%d
    pub date_format: String,

    /// Log level: error, warn, info, debug or trace.
    ///
    /// Can be set via:
    /// - CLI: --log-level debug
    /// - ENV: VERNISSAGE_LOG_LEVEL
    /// - Config: log_level = "debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DISPLAY_FORMAT.to_string(),
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    /// Load configuration from `path` and environment variables.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if path.exists() {
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("vernissage");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration from a file the user named explicitly.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Self::load_from(path)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/vernissage/config.toml
/// - macOS: ~/Library/Application Support/vernissage/config.toml
/// - Windows: %APPDATA%\vernissage\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vernissage")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Vernissage Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (VERNISSAGE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Short date form used when printing the exhibition dates (strftime syntax)
#
# Can also be set via:
# - CLI: vernissage run --date-format "%d.%m.%Y"
# - Environment: VERNISSAGE_DATE_FORMAT="%d.%m.%Y"
date_format = "%Y-%m-%d"

# Log level: error, warn, info, debug or trace
#
# Logs go to stderr and never mix with the session output.
log_level = "warn"
"#
}

/// Create the config file at `path` if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
