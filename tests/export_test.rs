//! PDF/Excel report generation tests.

use career_ai_rust::catalog::Catalog;
use career_ai_rust::cli::ExportFormat;
use career_ai_rust::export::{self, ReportOptions};
use career_ai_rust::matcher::match_skills;
use career_ai_rust::session::AdvisorSession;
use tempfile::tempdir;

fn test_options() -> ReportOptions<'static> {
    ReportOptions {
        title: "Test Career Report",
        advice_note: "Keep building projects.",
        top: 3,
    }
}

fn sample_session(catalog: &Catalog) -> AdvisorSession {
    let input = "python, sql, problem solving";
    let results = match_skills(input, catalog).expect("matching failed");
    AdvisorSession::new(career_ai_rust::matcher::normalize_skills(input), results)
}

#[test]
fn test_pdf_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.pdf");

    let catalog = Catalog::builtin();
    let session = sample_session(&catalog);

    let result = export::pdf::generate_pdf(&session, &catalog, &output_path, &test_options());

    assert!(result.is_ok(), "PDF generation failed: {:?}", result.err());
    assert!(output_path.exists(), "PDF file was not created");

    let metadata = std::fs::metadata(&output_path).expect("missing file metadata");
    assert!(metadata.len() > 0, "PDF file is empty");
}

#[test]
fn test_pdf_generation_empty_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.pdf");

    let catalog = Catalog::builtin();
    let session = AdvisorSession::new(
        ["cooking".to_string()].into_iter().collect(),
        Vec::new(),
    );

    let result = export::pdf::generate_pdf(&session, &catalog, &output_path, &test_options());

    assert!(result.is_ok(), "empty PDF generation failed: {:?}", result.err());
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.xlsx");

    let catalog = Catalog::builtin();
    let session = sample_session(&catalog);

    let result = export::excel::generate_excel(&session, &catalog, &output_path, &test_options());

    assert!(result.is_ok(), "Excel generation failed: {:?}", result.err());
    assert!(output_path.exists(), "Excel file was not created");

    let metadata = std::fs::metadata(&output_path).expect("missing file metadata");
    assert!(metadata.len() > 0, "Excel file is empty");
}

#[test]
fn test_excel_generation_empty_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");

    let catalog = Catalog::builtin();
    let session = AdvisorSession::new(
        ["cooking".to_string()].into_iter().collect(),
        Vec::new(),
    );

    let result = export::excel::generate_excel(&session, &catalog, &output_path, &test_options());

    assert!(result.is_ok(), "empty Excel generation failed: {:?}", result.err());
}

/// The Both format derives sibling .pdf/.xlsx paths next to each other.
#[test]
fn test_export_both_formats_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");

    let catalog = Catalog::builtin();
    let session = sample_session(&catalog);
    let options = test_options();

    let result = export::export_session(
        &session,
        &catalog,
        &ExportFormat::Both,
        dir.path(),
        &options,
    );

    assert!(result.is_ok(), "export failed: {:?}", result.err());
    assert!(dir.path().join("Test Career Report.pdf").exists());
    assert!(dir.path().join("Test Career Report.xlsx").exists());
}

/// An explicit file path is respected as-is.
#[test]
fn test_export_explicit_file_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("custom_name.pdf");

    let catalog = Catalog::builtin();
    let session = sample_session(&catalog);
    let options = test_options();

    let result = export::export_session(
        &session,
        &catalog,
        &ExportFormat::Pdf,
        &output_path,
        &options,
    );

    assert!(result.is_ok(), "export failed: {:?}", result.err());
    assert!(output_path.exists(), "explicit output path was not used");
}

/// A session larger than `top` still exports: detail sections honor top,
/// the Excel summary carries the full ranking.
#[test]
fn test_export_with_top_smaller_than_ranking() {
    let dir = tempdir().expect("Failed to create temp dir");

    let catalog = Catalog::builtin();
    let session = sample_session(&catalog);
    let options = ReportOptions {
        title: "Top One",
        advice_note: "Keep going.",
        top: 1,
    };

    let result = export::export_session(
        &session,
        &catalog,
        &ExportFormat::Both,
        dir.path(),
        &options,
    );

    assert!(result.is_ok(), "export failed: {:?}", result.err());
}
