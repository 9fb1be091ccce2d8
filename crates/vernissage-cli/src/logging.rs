use anyhow::{bail, Result};
use twyg::{LogLevel, OptsBuilder, Output};

/// Map a configured level name to a twyg level.
fn parse_level(level: &str) -> Result<LogLevel> {
    let level = match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        other => bail!(
            "Unknown log level: {}\n\nValid levels: error, warn, info, debug, trace",
            other
        ),
    };
    Ok(level)
}

/// Set up the global logger on stderr at the given level.
pub fn init(level: &str) -> Result<()> {
    let opts = OptsBuilder::new()
        .coloured(true)
        .level(parse_level(level)?)
        .output(Output::Stderr)
        .report_caller(false)
        .build()
        .map_err(|e| anyhow::anyhow!("Could not build logger options: {:?}", e))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logger: {:?}", e))?;
    Ok(())
}
