use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("end date {end} cannot be earlier than start date {start}")]
    InvalidDateOrder { start: NaiveDate, end: NaiveDate },

    #[error("invalid date format: '{input}' (expected yyyy-mm-dd)")]
    InvalidInputFormat { input: String },

    #[error("invalid display format: '{format}'")]
    InvalidDisplayFormat { format: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
