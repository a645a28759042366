//! Tests for YAML loader module

use super::*;
use crate::error::Error;
use crate::pagination::{CacheMode, Pagination};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_definition() {
    let yaml = r#"
name: words
"#;

    let def = load_definition_from_str(yaml).unwrap();
    assert_eq!(def.name, "words");
    assert_eq!(def.cache, CacheMode::Full);
    assert_eq!(def.page_size, None);
    assert_eq!(def.page_number, None);
    assert!(def.sources.is_empty());
    assert!(def.base_dir.is_none());
}

#[test]
fn test_load_full_definition() {
    let yaml = r#"
name: words
cache: windowed
page_size: 5
page_number: 2
sources:
  - type: items
    items: [alpha, beta]
  - type: file
    path: data/words.txt
"#;

    let def = load_definition_from_str(yaml).unwrap();
    assert_eq!(def.cache, CacheMode::Windowed);
    assert_eq!(def.page_size, Some(5));
    assert_eq!(def.page_number, Some(2));
    assert_eq!(
        def.sources,
        vec![
            SourceDefinition::Items {
                items: vec!["alpha".to_string(), "beta".to_string()]
            },
            SourceDefinition::File {
                path: PathBuf::from("data/words.txt")
            },
        ]
    );
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_empty_name_rejected() {
    let err = load_definition_from_str("name: '  '").unwrap_err();
    assert!(err.to_string().contains("name cannot be empty"));
}

#[test]
fn test_invalid_page_size_rejected() {
    let yaml = r#"
name: words
page_size: 0
"#;
    let err = load_definition_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("page_size must be at least 1"));
}

#[test]
fn test_invalid_page_number_rejected() {
    let yaml = r#"
name: words
page_number: -2
"#;
    let err = load_definition_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("page_number must be at least 1"));
}

#[test]
fn test_empty_file_path_rejected() {
    let yaml = r#"
name: words
sources:
  - type: file
    path: ""
"#;
    let err = load_definition_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("empty file path"));
}

#[test]
fn test_unknown_cache_mode_rejected() {
    let yaml = r#"
name: words
cache: sometimes
"#;
    let err = load_definition_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_malformed_yaml_rejected() {
    let err = load_definition_from_str("name: [").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
    assert!(err.to_string().starts_with("Failed to parse YAML:"));
}

#[test]
fn test_unknown_source_type_rejected() {
    let yaml = r#"
name: words
sources:
  - type: http
    url: https://example.com
"#;
    let err = load_definition_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_definition_missing_file() {
    let err = load_definition("/no/such/pager.yaml").unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_load_definition_resolves_relative_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("letters.txt"), "x\ny\nz\n").unwrap();
    fs::write(
        dir.path().join("pager.yaml"),
        r#"
name: letters
page_size: 2
page_number: 2
sources:
  - type: items
    items: [v, w]
  - type: file
    path: letters.txt
"#,
    )
    .unwrap();

    let def = load_definition(dir.path().join("pager.yaml")).unwrap();
    assert_eq!(def.base_dir.as_deref(), Some(dir.path()));
    assert_eq!(
        def.resolve_path(&PathBuf::from("letters.txt")),
        dir.path().join("letters.txt")
    );

    let mut paginator = def.build().unwrap();
    assert_eq!(paginator.elements_on_page().unwrap(), vec!["x", "y"]);
    assert_eq!(paginator.number_of_elements().unwrap(), 5);
}

// ============================================================================
// Build Tests
// ============================================================================

#[test]
fn test_build_applies_page() {
    let mut def = PagerDefinition::new("inline");
    def.page_size = Some(3);
    def.page_number = Some(1);
    def.sources.push(SourceDefinition::Items {
        items: vec!["a".into(), "b".into(), "c".into(), "d".into()],
    });

    let mut paginator = def.build().unwrap();
    assert_eq!(paginator.page_size(), Some(3));
    assert_eq!(paginator.page_number(), Some(1));
    assert_eq!(paginator.elements_on_page().unwrap(), vec!["a", "b", "c"]);
    assert_eq!(paginator.number_of_pages().unwrap(), 2);
}

#[test]
fn test_build_windowed_pager() {
    let mut def = PagerDefinition::new("windowed");
    def.cache = CacheMode::Windowed;
    def.page_size = Some(2);
    def.page_number = Some(1);

    let mut paginator = def.build().unwrap();
    assert_eq!(paginator.cache_mode(), CacheMode::Windowed);
    assert!(paginator.set_page_number(2).is_err());
}

#[test]
fn test_build_missing_source_file() {
    let mut def = PagerDefinition::new("broken");
    def.sources.push(SourceDefinition::File {
        path: PathBuf::from("/no/such/lines.txt"),
    });

    let err = def.build().unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}
