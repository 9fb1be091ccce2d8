//! Parsing and formatting of exhibition dates.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

use crate::error::{Error, Result};

/// Short date form used when printing exhibition dates.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Date-only formats accepted by [`parse_date`], tried in order.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Date-time formats accepted by [`parse_date`]; only the date part is kept.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a calendar date from user-supplied text.
///
/// Surrounding whitespace is ignored. A date-time is accepted too, in which
/// case the time of day is dropped.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_date_with(text, DATE_FORMATS) {
        return Ok(date);
    }

    let trimmed = text.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| Error::InvalidInputFormat {
            input: trimmed.to_string(),
        })
}

/// Parse a calendar date, trying each of `formats` in order.
pub fn parse_date_with(text: &str, formats: &[&str]) -> Result<NaiveDate> {
    let trimmed = text.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| Error::InvalidInputFormat {
            input: trimmed.to_string(),
        })
}

/// Check that `format` is a usable strftime display format.
///
/// The format is rendered once against a fixed date, so specifiers a bare
/// date cannot fill in (`%H`, `%z`, ...) are rejected here too.
pub fn validate_display_format(format: &str) -> Result<()> {
    format_date(NaiveDate::default(), format).map(|_| ())
}

/// Render `date` in the given strftime `format`.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    let invalid = || Error::InvalidDisplayFormat {
        format: format.to_string(),
    };

    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format)).map_err(|_| invalid())?;
    Ok(rendered)
}
