//! Excel report generation.
//!
//! Two worksheets: "Summary" with the full ranking, "Guidance" with the
//! insight columns for the top matches.

use crate::catalog::Catalog;
use crate::error::{CareerAiError, Result};
use crate::export::ReportOptions;
use crate::render::join_or_none;
use crate::session::AdvisorSession;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;

fn xlsx_err(e: XlsxError) -> CareerAiError {
    CareerAiError::ExcelGeneration(e.to_string())
}

pub fn generate_excel(
    session: &AdvisorSession,
    catalog: &Catalog,
    output_path: &Path,
    options: &ReportOptions,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(10.0)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // Summary: the full ranking.
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Summary").map_err(xlsx_err)?;

        worksheet
            .write_string_with_format(0, 0, options.title, &title_format)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(
                1,
                0,
                format!(
                    "Generated: {}   Skills: {}",
                    session.created_at,
                    join_or_none(&session.user_skills)
                ),
            )
            .map_err(xlsx_err)?;

        let headers = ["Career", "Match Score (%)", "Matched Skills", "Skills to Improve"];
        for (col, header) in headers.iter().enumerate() {
            worksheet
                .write_string_with_format(3, col as u16, *header, &header_format)
                .map_err(xlsx_err)?;
        }

        for (i, result) in session.results.iter().enumerate() {
            let row = i as u32 + 4;
            worksheet
                .write_string_with_format(row, 0, result.career.as_str(), &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_number_with_format(row, 1, f64::from(result.score), &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_string_with_format(row, 2, join_or_none(&result.matched_skills), &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_string_with_format(row, 3, join_or_none(&result.missing_skills), &value_format)
                .map_err(xlsx_err)?;
        }

        worksheet.set_column_width(0, 24).map_err(xlsx_err)?;
        worksheet.set_column_width(1, 16).map_err(xlsx_err)?;
        worksheet.set_column_width(2, 40).map_err(xlsx_err)?;
        worksheet.set_column_width(3, 40).map_err(xlsx_err)?;
    }

    // Guidance: insight columns for the top matches.
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Guidance").map_err(xlsx_err)?;

        let headers = [
            "Career",
            "Present Demand",
            "Future Scope",
            "Advice",
            "Companies",
            "Hackathons",
            "Competitions",
        ];
        for (col, header) in headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(xlsx_err)?;
        }

        for (i, result) in session.top(options.top).iter().enumerate() {
            let row = i as u32 + 1;
            worksheet
                .write_string_with_format(row, 0, result.career.as_str(), &value_format)
                .map_err(xlsx_err)?;

            let Some(profile) = catalog.get(&result.career) else {
                continue;
            };
            let insight = &profile.insight;

            worksheet
                .write_string_with_format(row, 1, insight.present.as_str(), &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_string_with_format(row, 2, insight.future.as_str(), &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_string_with_format(row, 3, options.advice_note, &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_string_with_format(row, 4, insight.companies.join(", "), &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_string_with_format(row, 5, insight.hackathons.join(", "), &value_format)
                .map_err(xlsx_err)?;
            worksheet
                .write_string_with_format(row, 6, insight.competitions.join(", "), &value_format)
                .map_err(xlsx_err)?;
        }

        worksheet.set_column_width(0, 22).map_err(xlsx_err)?;
        for col in 1..=6 {
            worksheet.set_column_width(col, 36).map_err(xlsx_err)?;
        }
    }

    workbook.save(output_path).map_err(xlsx_err)?;

    Ok(())
}
