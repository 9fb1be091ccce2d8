//! The interactive exhibition walkthrough.
//!
//! A [`Session`] owns its input and output streams, so the same script runs
//! against a terminal or against in-memory buffers.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use vernissage_core::date::{parse_date, DEFAULT_DISPLAY_FORMAT};
use vernissage_core::Exhibition;

const INITIAL_ARTWORKS: [&str; 3] = [
    "Sculpture - Venus",
    "Painting - Starry Night",
    "Painting - Mona Lisa",
];
const CATEGORY: &str = "Painting";
const ADDED_ARTWORK: &str = "Sculpture - David";
const REMOVED_ARTWORK: &str = "Sculpture - Venus";

#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    date_format: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            date_format: DEFAULT_DISPLAY_FORMAT.to_string(),
        }
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the script, reporting any failure on the output stream.
    ///
    /// Returns `Ok(false)` when the script stopped on an error. An `Err` means
    /// the error report itself could not be written.
    pub fn run_and_report(&mut self) -> Result<bool> {
        match self.run() {
            Ok(exhibition) => {
                log::info!("Session finished for {}", exhibition);
                Ok(true)
            }
            Err(e) => {
                log::error!("Session failed: {:#}", e);
                writeln!(self.output, "An error occurred: {:#}", e)?;
                self.output.flush()?;
                Ok(false)
            }
        }
    }

    /// Run the full script and return the exhibition it ends with.
    pub fn run(&mut self) -> Result<Exhibition> {
        let title = self.prompt("Enter exhibition title: ", "title")?;
        let organizer = self.prompt("Enter exhibition organizer: ", "organizer")?;
        let start = parse_date(&self.prompt("Enter start date (yyyy-mm-dd): ", "start date")?)?;
        let end = parse_date(&self.prompt("Enter end date (yyyy-mm-dd): ", "end date")?)?;

        let mut exhibition = Exhibition::new(title, organizer, start, end)?;
        log::info!("Created exhibition {}", exhibition);

        for artwork in INITIAL_ARTWORKS {
            exhibition.add_artwork(artwork);
        }

        exhibition.print_info(&mut self.output, &self.date_format)?;

        let paintings = exhibition.filter_by_category(CATEGORY);
        writeln!(self.output, "Paintings on display: {}", paintings.join(", "))?;
        writeln!(self.output, "All artworks: {}", exhibition.summary())?;

        exhibition.add_artwork(ADDED_ARTWORK);
        exhibition.remove_artwork(REMOVED_ARTWORK);
        writeln!(self.output, "Updated artwork list: {}", exhibition.summary())?;

        let copy = exhibition.clone();
        if copy == exhibition {
            writeln!(self.output, "The copy is identical to the original.")?;
        } else {
            writeln!(self.output, "The copy differs from the original.")?;
        }
        self.output.flush()?;

        Ok(exhibition)
    }

    /// Write `prompt` and read one line, without its line ending.
    fn prompt(&mut self, prompt: &str, field: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input while reading {}", field);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        log::debug!("Read {}: '{}'", field, line);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(input: &str) -> (bool, String) {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new());
        let completed = session.run_and_report().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (completed, output)
    }

    #[test]
    fn test_full_walkthrough() {
        let (completed, output) =
            run_script("Impressionism\nCity Museum\n2024-01-01\n2024-02-01\n");

        assert!(completed);
        assert_eq!(
            output,
            "Enter exhibition title: \
             Enter exhibition organizer: \
             Enter start date (yyyy-mm-dd): \
             Enter end date (yyyy-mm-dd): \
             Exhibition title: Impressionism\n\
             Organizer: City Museum\n\
             Start date: 2024-01-01\n\
             End date: 2024-02-01\n\
             Number of artworks: 3\n\
             Paintings on display: Painting - Starry Night, Painting - Mona Lisa\n\
             All artworks: Sculpture - Venus, Painting - Starry Night, Painting - Mona Lisa\n\
             Updated artwork list: Painting - Starry Night, Painting - Mona Lisa, Sculpture - David\n\
             The copy is identical to the original.\n"
        );
    }

    #[test]
    fn test_run_returns_final_exhibition() {
        let input = Cursor::new("Impressionism\r\nCity Museum\r\n2024-01-01\r\n2024-02-01\r\n");
        let mut session = Session::new(input, Vec::new());

        let exhibition = session.run().unwrap();
        assert_eq!(exhibition.title, "Impressionism");
        assert_eq!(exhibition.organizer, "City Museum");
        assert_eq!(
            exhibition.artworks,
            vec![
                "Painting - Starry Night",
                "Painting - Mona Lisa",
                "Sculpture - David"
            ]
        );
    }

    #[test]
    fn test_custom_date_format() {
        let input = Cursor::new("Impressionism\nCity Museum\n2024-01-01\n2024-02-01\n");
        let mut session = Session::new(input, Vec::new()).with_date_format("%d.%m.%Y");
        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Start date: 01.01.2024\n"));
        assert!(output.contains("End date: 01.02.2024\n"));
    }

    #[test]
    fn test_time_only_date_format_is_reported() {
        let input = Cursor::new("Impressionism\nCity Museum\n2024-01-01\n2024-02-01\n");
        let mut session = Session::new(input, Vec::new()).with_date_format("%H:%M");

        assert!(!session.run_and_report().unwrap());
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.ends_with("An error occurred: invalid display format: '%H:%M'\n"));
    }

    #[test]
    fn test_end_before_start_is_reported() {
        let (completed, output) =
            run_script("Impressionism\nCity Museum\n2024-02-01\n2024-01-01\n");

        assert!(!completed);
        assert!(output.ends_with(
            "An error occurred: end date 2024-01-01 cannot be earlier than start date 2024-02-01\n"
        ));
        assert!(!output.contains("Exhibition title:"));
    }

    #[test]
    fn test_unparseable_date_is_reported() {
        let (completed, output) = run_script("Impressionism\nCity Museum\nsoon\n2024-01-01\n");

        assert!(!completed);
        assert!(output.ends_with(
            "An error occurred: invalid date format: 'soon' (expected yyyy-mm-dd)\n"
        ));
        assert!(!output.contains("Enter end date"));
    }

    #[test]
    fn test_truncated_input_is_reported() {
        let (completed, output) = run_script("Impressionism\n");

        assert!(!completed);
        assert!(output.ends_with("An error occurred: unexpected end of input while reading organizer\n"));
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let (completed, output) = run_script("\nCity Museum\n2024-01-01\n2024-01-01\n");

        assert!(completed);
        assert!(output.contains("Exhibition title: \n"));
    }
}
