//! End-to-end checks of the exhibition record against the demonstration
//! walkthrough: build, fill, filter, edit, copy and compare.

use vernissage_core::date::parse_date;
use vernissage_core::{Error, Exhibition};

fn impressionism() -> Exhibition {
    let start = parse_date("2024-01-01").unwrap();
    let end = parse_date("2024-02-01").unwrap();
    let mut exhibition = Exhibition::new("Impressionism", "City Museum", start, end).unwrap();

    exhibition.add_artwork("Sculpture - Venus");
    exhibition.add_artwork("Painting - Starry Night");
    exhibition.add_artwork("Painting - Mona Lisa");
    exhibition
}

/// Filtering by "Painting" keeps both paintings in insertion order
#[test]
fn test_filter_paintings() {
    let exhibition = impressionism();

    assert_eq!(
        exhibition.filter_by_category("Painting"),
        vec!["Painting - Starry Night", "Painting - Mona Lisa"]
    );
}

/// Adding David and removing Venus updates the summary
#[test]
fn test_updated_summary() {
    let mut exhibition = impressionism();
    exhibition.add_artwork("Sculpture - David");
    exhibition.remove_artwork("Sculpture - Venus");

    assert_eq!(
        exhibition.summary(),
        "Painting - Starry Night, Painting - Mona Lisa, Sculpture - David"
    );
}

/// A copy compares equal and does not share the artwork list
#[test]
fn test_copy_matches_original() {
    let original = impressionism();
    let mut copy = original.clone();

    assert_eq!(copy, original);

    copy.artworks.clear();
    assert_eq!(original.artwork_count(), 3);
    assert_eq!(copy, original);
}

/// Dates parsed from text in the wrong order are rejected at construction
#[test]
fn test_reversed_dates_from_text() {
    let start = parse_date("2024-02-01").unwrap();
    let end = parse_date("2024-01-01").unwrap();

    let result = Exhibition::new("Impressionism", "City Museum", start, end);
    assert!(matches!(result, Err(Error::InvalidDateOrder { .. })));
}

/// Unparseable date text never reaches the constructor
#[test]
fn test_unparseable_date_text() {
    let result = parse_date("first of January");
    assert!(matches!(result, Err(Error::InvalidInputFormat { .. })));
}
