use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::format_date;
use crate::error::{Error, Result};

/// An art exhibition: a titled, organized date range with a list of
/// exhibited artworks.
///
/// Two exhibitions are equal when their title and organizer match exactly.
/// Dates and artworks take no part in equality or hashing.
///
/// `end_date >= start_date` is checked whenever the dates are set through
/// [`Exhibition::new`], [`Exhibition::reschedule`] or deserialization. A
/// default exhibition carries placeholder dates and is never validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "ExhibitionRecord")]
pub struct Exhibition {
    pub title: String,
    pub organizer: String,
    start_date: NaiveDate,
    end_date: NaiveDate,

    /// Artwork labels in insertion order. Duplicates are allowed.
    pub artworks: Vec<String>,
}

/// Serialized shape of an [`Exhibition`], checked on the way in.
#[derive(Deserialize)]
struct ExhibitionRecord {
    title: String,
    organizer: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    artworks: Vec<String>,
}

impl TryFrom<ExhibitionRecord> for Exhibition {
    type Error = Error;

    fn try_from(record: ExhibitionRecord) -> Result<Self> {
        let mut exhibition =
            Self::new(record.title, record.organizer, record.start_date, record.end_date)?;
        exhibition.artworks = record.artworks;
        Ok(exhibition)
    }
}

impl Exhibition {
    pub fn new(
        title: impl Into<String>,
        organizer: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        check_date_order(start_date, end_date)?;
        Ok(Self {
            title: title.into(),
            organizer: organizer.into(),
            start_date,
            end_date,
            artworks: Vec::new(),
        })
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Move the exhibition to a new date range.
    ///
    /// The dates are left untouched when `end_date < start_date`.
    pub fn reschedule(&mut self, start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
        check_date_order(start_date, end_date)?;
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    pub fn add_artwork(&mut self, artwork: impl Into<String>) {
        let artwork = artwork.into();
        log::debug!("Adding artwork '{}' to {}", artwork, self);
        self.artworks.push(artwork);
    }

    /// Remove the first artwork equal to `artwork`.
    ///
    /// Returns `false` if no such artwork was listed.
    pub fn remove_artwork(&mut self, artwork: &str) -> bool {
        match self.artworks.iter().position(|a| a == artwork) {
            Some(index) => {
                self.artworks.remove(index);
                log::debug!("Removed artwork '{}' from {}", artwork, self);
                true
            }
            None => {
                log::debug!("Artwork '{}' not listed in {}", artwork, self);
                false
            }
        }
    }

    /// Artworks whose label contains `category`, ignoring case.
    ///
    /// An empty category matches every artwork.
    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<String> {
        let needle = fold_case(category);
        self.artworks
            .iter()
            .filter(|a| fold_case(a).contains(&needle))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> String {
        self.artworks.join(", ")
    }

    #[must_use]
    pub fn artwork_count(&self) -> usize {
        self.artworks.len()
    }

    /// Named form of the equality rule: same title and same organizer.
    #[must_use]
    pub fn same_exhibition(&self, other: &Self) -> bool {
        self.title == other.title && self.organizer == other.organizer
    }

    /// Write the exhibition details, one labelled field per line.
    pub fn print_info<W: Write>(&self, out: &mut W, date_format: &str) -> Result<()> {
        let start = format_date(self.start_date, date_format)?;
        let end = format_date(self.end_date, date_format)?;

        writeln!(out, "Exhibition title: {}", self.title)?;
        writeln!(out, "Organizer: {}", self.organizer)?;
        writeln!(out, "Start date: {}", start)?;
        writeln!(out, "End date: {}", end)?;
        writeln!(out, "Number of artworks: {}", self.artwork_count())?;
        Ok(())
    }
}

/// Uppercase one character at a time, so a letter folds the same way
/// wherever it sits in the word (`σ`, `ς` and `Σ` all become `Σ`).
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_uppercase).collect()
}

fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(Error::InvalidDateOrder { start, end });
    }
    Ok(())
}

impl PartialEq for Exhibition {
    fn eq(&self, other: &Self) -> bool {
        self.same_exhibition(other)
    }
}

impl Eq for Exhibition {}

impl Hash for Exhibition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.organizer.hash(state);
    }
}

impl fmt::Display for Exhibition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.organizer)
    }
}
