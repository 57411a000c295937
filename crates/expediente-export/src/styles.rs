use serde::{Deserialize, Serialize};

use crate::ops::Rgb8;

/// Page metrics and palette for the PDF report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportStyles {
    /// Page size in millimetres (A4 portrait).
    pub page_width: f32,
    pub page_height: f32,
    /// Uniform page margin.
    pub margin: f32,
    /// Cursor position content may not grow past before breaking.
    pub break_at: f32,
    /// Cursor position after a page break.
    pub top_after_break: f32,
    /// Height of the footer band.
    pub footer_height: f32,
    /// Leading of wrapped field values.
    pub leading: f32,
    pub dark_blue: Rgb8,
    pub medium_blue: Rgb8,
    pub light_gray: Rgb8,
    pub line_gray: Rgb8,
    pub ink: Rgb8,
    pub white: Rgb8,
    pub muted: Rgb8,
    pub header_accent: Rgb8,
}

impl ReportStyles {
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin * 2.0
    }
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 14.0,
            break_at: 280.0,
            top_after_break: 15.0,
            footer_height: 7.0,
            leading: 3.5,
            dark_blue: Rgb8(30, 58, 95),
            medium_blue: Rgb8(52, 100, 145),
            light_gray: Rgb8(245, 247, 250),
            line_gray: Rgb8(220, 225, 232),
            ink: Rgb8(30, 30, 30),
            white: Rgb8(255, 255, 255),
            muted: Rgb8(120, 130, 145),
            header_accent: Rgb8(180, 210, 235),
        }
    }
}

/// Fonts and sizes for the DOCX rendition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocxStyles {
    /// Font for body text.
    pub body_font: String,
    /// Heading sizes in points.
    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,
}

impl Default for DocxStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            heading1_size: 16,
            heading2_size: 13,
            heading3_size: 11,
        }
    }
}
