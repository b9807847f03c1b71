//! Error-path tests for the user-facing failure modes.

use career_ai_rust::catalog::Catalog;
use career_ai_rust::error::CareerAiError;
use career_ai_rust::matcher::match_skills;
use career_ai_rust::session::AdvisorSession;
use std::path::Path;
use tempfile::tempdir;

/// The one core error: input that normalizes to nothing.
#[test]
fn test_blank_input_is_empty_input() {
    let catalog = Catalog::builtin();

    for input in ["", "   ", ",", " , , "] {
        let err = match_skills(input, &catalog).unwrap_err();
        assert!(matches!(err, CareerAiError::EmptyInput), "input: {:?}", input);
    }
}

/// Zero overlap is a valid result, never an error.
#[test]
fn test_no_overlap_is_not_an_error() {
    let catalog = Catalog::builtin();
    let results = match_skills("cooking", &catalog).expect("no-overlap input rejected");
    assert_eq!(results.len(), catalog.len());
}

#[test]
fn test_catalog_from_missing_file() {
    let result = Catalog::from_file(Path::new("/nonexistent/catalog-12345.json"));
    assert!(matches!(result, Err(CareerAiError::FileNotFound(_))));
}

#[test]
fn test_catalog_from_malformed_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "[ broken").unwrap();

    let result = Catalog::from_file(&path);
    assert!(matches!(result, Err(CareerAiError::JsonParse(_))));
}

#[test]
fn test_catalog_rejects_empty_list() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "[]").unwrap();

    let result = Catalog::from_file(&path);
    assert!(matches!(result, Err(CareerAiError::InvalidCatalog(_))));
}

#[test]
fn test_catalog_rejects_career_without_skills() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"name": "Dreamer", "required_skills": ["  ", ""]}]"#,
    )
    .unwrap();

    // Tokens normalize to nothing, which fails validation.
    let result = Catalog::from_file(&path);
    assert!(matches!(result, Err(CareerAiError::InvalidCatalog(_))));
}

/// A valid custom catalog loads, normalizes its tokens and matches.
#[test]
fn test_custom_catalog_loads_and_matches() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "Tester", "required_skills": [" Selenium ", "PYTHON"]},
            {"name": "Writer", "required_skills": ["prose"]}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::from_file(&path).expect("catalog load failed");
    assert_eq!(catalog.len(), 2);

    let tester = catalog.get("Tester").unwrap();
    assert!(tester.required_skills.contains("selenium"));
    assert!(tester.required_skills.contains("python"));

    let results = match_skills("python", &catalog).unwrap();
    assert_eq!(results[0].career, "Tester");
    assert_eq!(results[0].score, 50);
}

#[test]
fn test_session_load_missing_file_is_file_not_found() {
    let result = AdvisorSession::load(Path::new("/nonexistent/session-12345.json"));
    assert!(matches!(result, Err(CareerAiError::FileNotFound(_))));
}
