//! expediente-export
//!
//! Report generation from a clinical record: a layout pass producing pages
//! of draw commands, a printpdf backend, and a tera → docx-rs pipeline for
//! the DOCX rendition.

pub mod docx;
pub mod error;
pub mod layout;
pub mod ops;
pub mod pdf;
pub mod render;
pub mod styles;

use expediente_core::ClinicalRecord;
use jiff::civil::Date;

pub use error::ExportError;
pub use styles::{DocxStyles, ReportStyles};

/// Lay out and render the PDF report in one step.
pub fn export_pdf(
    record: &ClinicalRecord,
    signature_png: Option<&[u8]>,
    date: Date,
) -> Result<Vec<u8>, ExportError> {
    let styles = ReportStyles::default();
    let document = layout::layout_report(record, signature_png, date, &styles);
    tracing::debug!(pages = document.page_count(), "report laid out");
    pdf::document_to_pdf(&document, layout::REPORT_TITLE, &styles)
}

/// Render the DOCX rendition of the same record.
pub fn export_docx(record: &ClinicalRecord, date: Date) -> Result<Vec<u8>, ExportError> {
    let rendered = render::render_report(record, date)?;
    docx::generate_docx(&rendered, &DocxStyles::default())
}

/// Conventional report file name: the patient's name with spaces
/// underscored, plus the ISO date ("Expediente_Ana_Ruiz_2026-08-06.pdf").
pub fn report_file_name(record: &ClinicalRecord, date: Date, extension: &str) -> String {
    let patient = record
        .patient
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Paciente");
    format!("Expediente_{}_{date}.{extension}", patient.replace(' ', "_"))
}
