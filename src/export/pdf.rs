//! PDF report generation.
//!
//! A4 portrait, builtin Helvetica fonts, one section per top match. Lines
//! are wrapped to the text width and the cursor starts a new page when it
//! reaches the bottom margin.

use crate::catalog::Catalog;
use crate::error::{CareerAiError, Result};
use crate::export::ReportOptions;
use crate::render::join_or_none;
use crate::session::AdvisorSession;
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

/// Wrap width in characters for 10pt Helvetica on the A4 text column.
const WRAP_COLUMNS: usize = 95;

struct ReportWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y_mm: f32,
}

impl ReportWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| CareerAiError::PdfGeneration(format!("font error: {:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| CareerAiError::PdfGeneration(format!("font error: {:?}", e)))?;

        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y_mm: A4_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn line_height(size: f32) -> f32 {
        size * 0.55
    }

    /// Start a new page when the next line would cross the bottom margin.
    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y_mm - needed_mm < MARGIN_MM {
            let (page, layer) = self.doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = A4_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn text_line(&mut self, text: &str, size: f32, bold: bool) {
        let height = Self::line_height(size);
        self.ensure_room(height);
        self.y_mm -= height;

        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y_mm), font);
    }

    fn title(&mut self, text: &str) {
        self.text_line(text, TITLE_SIZE, true);
    }

    fn heading(&mut self, text: &str) {
        self.text_line(text, HEADING_SIZE, true);
    }

    /// Body line, wrapped to the text column.
    fn body(&mut self, text: &str) {
        for line in wrap_line(text, WRAP_COLUMNS) {
            self.text_line(&line, BODY_SIZE, false);
        }
    }

    fn spacer(&mut self) {
        self.y_mm -= Self::line_height(BODY_SIZE);
    }

    fn save(self, output_path: &Path) -> Result<()> {
        let file = File::create(output_path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| CareerAiError::PdfGeneration(format!("save error: {:?}", e)))?;
        Ok(())
    }
}

/// Greedy word wrap. A single word longer than the width keeps its own line.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

pub fn generate_pdf(
    session: &AdvisorSession,
    catalog: &Catalog,
    output_path: &Path,
    options: &ReportOptions,
) -> Result<()> {
    let mut writer = ReportWriter::new(options.title)?;

    writer.title(options.title);
    writer.body(&format!("Generated: {}", session.created_at));
    writer.body(&format!("Your skills: {}", join_or_none(&session.user_skills)));
    writer.spacer();

    for (rank, result) in session.top(options.top).iter().enumerate() {
        writer.heading(&format!(
            "{}. {} - Match Score: {}%",
            rank + 1,
            result.career,
            result.score
        ));
        writer.body(&format!("Matched skills: {}", join_or_none(&result.matched_skills)));
        writer.body(&format!("Skills to improve: {}", join_or_none(&result.missing_skills)));

        if let Some(profile) = catalog.get(&result.career) {
            let insight = &profile.insight;
            writer.body(&format!("Present demand: {}", insight.present));
            writer.body(&format!("Future scope: {}", insight.future));
            writer.body(&format!("Advice: {}", options.advice_note));
            writer.body(&format!("Companies to apply: {}", insight.companies.join(", ")));
            writer.body(&format!(
                "Hackathons to participate: {}",
                insight.hackathons.join(", ")
            ));
            writer.body(&format!(
                "Coding competitions: {}",
                insight.competitions.join(", ")
            ));
        }

        writer.spacer();
    }

    writer.save(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line() {
        let lines = wrap_line("short line", 95);
        assert_eq!(lines, vec!["short line".to_string()]);
    }

    #[test]
    fn test_wrap_long_line() {
        let text = "word ".repeat(40);
        let lines = wrap_line(text.trim(), 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 20);
        }
    }

    #[test]
    fn test_wrap_empty_line() {
        assert_eq!(wrap_line("", 95), vec![String::new()]);
    }

    #[test]
    fn test_wrap_oversized_word() {
        let word = "x".repeat(50);
        let lines = wrap_line(&word, 20);
        assert_eq!(lines.len(), 1);
    }
}
