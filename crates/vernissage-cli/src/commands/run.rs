use anyhow::{Context, Result};
use std::io;
use vernissage_core::date::validate_display_format;

use crate::config::Config;
use crate::session::Session;

/// Run the interactive exhibition session on stdin/stdout.
///
/// Returns whether the script ran to completion.
pub fn run_session(config: &Config) -> Result<bool> {
    validate_display_format(&config.date_format)
        .context("Invalid date_format in configuration")?;

    log::info!("Starting exhibition session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        Session::new(stdin.lock(), stdout.lock()).with_date_format(config.date_format.as_str());

    session.run_and_report()
}
