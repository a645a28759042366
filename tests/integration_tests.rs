//! Integration tests over the public API
//!
//! Tests the full flow: sources (lists, iterators, files) → paginator → pages

use pretty_assertions::assert_eq;
use solidafy_paginator::{
    load_definition_from_str, CacheMode, Error, IterSource, LineSource, Pagination, Paginator,
    VecSource,
};
use std::io::Write;
use tempfile::NamedTempFile;
use test_case::test_case;

const ALPHABET: [&str; 26] = [
    "lima", "golf", "quebec", "zulu", "uniform", "romeo", "kilo", "alpha", "x-ray", "november",
    "whiskey", "echo", "mike", "sierra", "bravo", "delta", "hotel", "foxtrot", "charlie", "yankee",
    "india", "juliet", "tango", "oscar", "pappa", "victor",
];

fn lines_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Mixed Source Tests
// ============================================================================

#[test]
fn test_count_across_list_file_and_iterator() {
    let file = lines_file(&ALPHABET);

    let mut paginator = Paginator::cached();
    paginator.add_elements(IterSource::new(owned(&[
        "alpha", "epsilon", "beta", "delta", "gamma",
    ])));
    paginator.add_elements(LineSource::open(file.path()).unwrap());
    paginator.add_elements(owned(&["alpha", "beta", "delta", "gamma"]));

    assert_eq!(paginator.number_of_elements().unwrap(), 35);
}

#[test]
fn test_page_spanning_file_boundary() {
    let file = lines_file(&["c", "d", "e"]);

    let mut paginator = Paginator::cached();
    paginator.add_elements(VecSource::new(owned(&["a", "b"])));
    paginator.add_elements(LineSource::open(file.path()).unwrap());
    paginator.add_elements(owned(&["f"]));
    paginator.set_page_size(4).unwrap();
    paginator.set_page_number(1).unwrap();

    assert_eq!(paginator.elements_on_page().unwrap(), owned(&["a", "b", "c", "d"]));

    paginator.set_page_number(2).unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), owned(&["e", "f"]));
    assert_eq!(paginator.number_of_pages().unwrap(), 2);
}

// ============================================================================
// Page Scenario Tests
// ============================================================================

#[test_case(5, 1, &ALPHABET[0..5]; "first page")]
#[test_case(10, 3, &ALPHABET[20..26]; "last page")]
#[test_case(6, 6, &[]; "beyond last page")]
fn test_file_backed_pages(size: i64, number: i64, expected: &[&str]) {
    let file = lines_file(&ALPHABET);

    for mode in [CacheMode::Full, CacheMode::Windowed] {
        let mut paginator = Paginator::new(mode);
        paginator.add_elements(LineSource::open(file.path()).unwrap());
        paginator.set_page_size(size).unwrap();
        paginator.set_page_number(number).unwrap();

        assert_eq!(paginator.elements_on_page().unwrap(), owned(expected));
    }
}

#[test]
fn test_cached_switch_from_page_three_to_five() {
    let mut paginator = Paginator::cached();
    paginator.add_elements(ALPHABET.to_vec());
    paginator.set_page_size(5).unwrap();

    paginator.set_page_number(3).unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), ALPHABET[10..15].to_vec());

    paginator.set_page_number(5).unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), ALPHABET[20..25].to_vec());
    assert_eq!(paginator.cached_len(), 26);
    assert_eq!(paginator.number_of_elements().unwrap(), 26);
}

#[test]
fn test_windowed_pages_are_read_once() {
    let mut paginator = Paginator::windowed();
    paginator.add_elements(vec!["foo", "bar"]);
    assert!(matches!(
        paginator.number_of_elements(),
        Err(Error::ConfigurationRequired { .. })
    ));

    paginator.set_page_size(1).unwrap();
    paginator.set_page_number(2).unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), vec!["bar"]);

    let err = paginator.set_page_number(1).unwrap_err();
    assert!(err.is_usage_error());
    assert!(matches!(err, Error::ImmutableConfiguration { .. }));
}

// ============================================================================
// Mid-traversal Append Tests
// ============================================================================

#[test]
fn test_append_after_reading_restarts_file_sources() {
    let file = lines_file(&["a", "b", "c"]);

    let mut paginator = Paginator::cached();
    paginator.add_elements(LineSource::open(file.path()).unwrap());
    paginator.set_page_size(1).unwrap();
    paginator.set_page_number(1).unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), owned(&["a"]));
    assert_eq!(paginator.position(), 2);

    // The file is read again from the top; positions continue from 2
    paginator.add_elements(owned(&["d"]));
    assert_eq!(paginator.number_of_elements().unwrap(), 6);

    paginator.set_page_number(3).unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), owned(&["a"]));
    paginator.set_page_number(6).unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), owned(&["d"]));
}

// ============================================================================
// Definition Tests
// ============================================================================

#[test]
fn test_definition_builds_windowed_paginator() {
    let def = load_definition_from_str(
        r#"
name: nato
cache: windowed
page_size: 3
page_number: 2
sources:
  - type: items
    items: [alpha, bravo, charlie, delta, echo]
"#,
    )
    .unwrap();

    let mut paginator = def.build().unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), owned(&["delta", "echo"]));
    assert_eq!(paginator.number_of_pages().unwrap(), 2);
    assert_eq!(paginator.cached_len(), 2);
}
