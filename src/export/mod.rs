pub mod excel;
pub mod pdf;

use crate::catalog::Catalog;
use crate::cli::ExportFormat;
use crate::error::Result;
use crate::session::AdvisorSession;
use std::path::Path;

/// Report settings shared by the PDF and Excel backends.
pub struct ReportOptions<'a> {
    pub title: &'a str,
    pub advice_note: &'a str,
    /// How many top matches get a detail section.
    pub top: usize,
}

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> std::path::PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let pdf_path = output.join(format!("{}.pdf", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (pdf_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let pdf_path = parent.join(format!("{}.pdf", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (pdf_path, excel_path)
    }
}

pub fn export_session(
    session: &AdvisorSession,
    catalog: &Catalog,
    format: &ExportFormat,
    output_dir: &Path,
    options: &ReportOptions,
) -> Result<()> {
    match format {
        ExportFormat::Pdf => {
            let output_path = output_path_for_format(output_dir, options.title, "pdf");
            println!("- Generating PDF...");
            pdf::generate_pdf(session, catalog, &output_path, options)?;
            println!("✔ PDF written: {}", output_path.display());
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output_dir, options.title, "xlsx");
            println!("- Generating Excel...");
            excel::generate_excel(session, catalog, &output_path, options)?;
            println!("✔ Excel written: {}", output_path.display());
        }
        ExportFormat::Both => {
            let (pdf_path, excel_path) = output_paths_for_both(output_dir, options.title);

            println!("- Generating PDF...");
            pdf::generate_pdf(session, catalog, &pdf_path, options)?;
            println!("✔ PDF written: {}", pdf_path.display());

            println!("- Generating Excel...");
            excel::generate_excel(session, catalog, &excel_path, options)?;
            println!("✔ Excel written: {}", excel_path.display());
        }
    }

    Ok(())
}
