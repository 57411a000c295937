//! DOCX backend over the rendered report text.
//!
//! The rendered content uses a small markdown subset: `#`/`##`/`###`
//! headings, `- ` bullets, `**bold**` spans and `---`/`***` page breaks;
//! anything else is a plain paragraph.

use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocxStyles;

enum LineKind<'a> {
    Blank,
    Heading(&'a str, &'static str),
    Bullet(&'a str),
    PageBreak,
    Body(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix("### ") {
        return LineKind::Heading(rest, "Heading3");
    }
    if let Some(rest) = trimmed.strip_prefix("## ") {
        return LineKind::Heading(rest, "Heading2");
    }
    if let Some(rest) = trimmed.strip_prefix("# ") {
        return LineKind::Heading(rest, "Heading1");
    }
    if let Some(rest) = trimmed.strip_prefix("- ") {
        return LineKind::Bullet(rest);
    }
    if trimmed == "---" || trimmed == "***" {
        return LineKind::PageBreak;
    }
    LineKind::Body(trimmed)
}

pub fn generate_docx(rendered: &str, styles: &DocxStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    for line in rendered.lines() {
        let paragraph = match classify(line) {
            LineKind::Blank => Paragraph::new(),
            LineKind::Heading(text, style_id) => Paragraph::new()
                .style(style_id)
                .add_run(Run::new().add_text(text)),
            LineKind::Bullet(text) => {
                let bullet = Run::new()
                    .add_text("\u{2022} ")
                    .fonts(RunFonts::new().ascii(&styles.body_font));
                let mut paragraph = Paragraph::new()
                    .align(AlignmentType::Left)
                    .add_run(bullet);
                for run in inline_runs(text, styles) {
                    paragraph = paragraph.add_run(run);
                }
                paragraph
            }
            LineKind::PageBreak => {
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
            }
            LineKind::Body(text) => {
                let mut paragraph = Paragraph::new().align(AlignmentType::Left);
                for run in inline_runs(text, styles) {
                    paragraph = paragraph.add_run(run);
                }
                paragraph
            }
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    // OOXML sizes are half-points
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2)
}

/// Split `**bold**` spans into separate runs; an unmatched marker is kept
/// verbatim.
fn inline_runs(text: &str, styles: &DocxStyles) -> Vec<Run> {
    let fonts = || RunFonts::new().ascii(&styles.body_font);
    let mut runs = Vec::new();
    let mut rest = text;

    while let Some((before, after)) = rest.split_once("**") {
        if !before.is_empty() {
            runs.push(Run::new().add_text(before).fonts(fonts()));
        }
        match after.split_once("**") {
            Some((bold_span, tail)) => {
                runs.push(Run::new().add_text(bold_span).bold().fonts(fonts()));
                rest = tail;
            }
            None => {
                runs.push(Run::new().add_text(format!("**{after}")).fonts(fonts()));
                return runs;
            }
        }
    }

    if !rest.is_empty() {
        runs.push(Run::new().add_text(rest).fonts(fonts()));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_docx_is_a_zip_container() {
        let rendered = "# Título\n\n**Paciente:** María\n\n- **BDI**: 7 (Moderado)\n";
        let bytes = generate_docx(rendered, &DocxStyles::default()).expect("generate docx");
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn bold_spans_split_into_three_runs() {
        let runs = inline_runs("antes **negrita** después", &DocxStyles::default());
        assert_eq!(runs.len(), 3);
    }

    #[test]
    fn unmatched_marker_is_kept() {
        let runs = inline_runs("abierto **sin cierre", &DocxStyles::default());
        assert_eq!(runs.len(), 2);
    }
}
