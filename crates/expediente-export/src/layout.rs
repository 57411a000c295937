//! Layout pass: walks the record and emits pages of draw commands.
//!
//! A vertical cursor in millimetres runs down each page; every block
//! declares the space it needs and the cursor breaks to a fresh page when
//! the remaining space is short. Footers are stamped in a second pass once
//! the page count is known.

use expediente_core::models::{
    ClinicalLog, ClinicalRecord, Diagnosis, HistoryExam, LifeTimeline, Patient, Professional,
    ScaleScores,
};
use expediente_instruments::all_instruments;
use expediente_instruments::scoring::total_label;
use jiff::civil::Date;

use crate::ops::{Align, Document, DrawOp, FontFace, Page, Rgb8};
use crate::styles::ReportStyles;

pub const REPORT_TITLE: &str = "EXPEDIENTE CLÍNICO INTEGRAL";
pub const FOOTER_BRAND: &str = "Sistema de Expediente Clínico";

const FALLBACK_NAME: &str = "Dr. Nombre del Terapeuta";
const FALLBACK_SPECIALTY: &str = "Especialidad";

/// Lay out the full report. Pure: the same record, signature and date
/// always produce the same document.
pub fn layout_report(
    record: &ClinicalRecord,
    signature_png: Option<&[u8]>,
    date: Date,
    styles: &ReportStyles,
) -> Document {
    let mut layout = Layout::new(styles);
    layout.front_header(&record.professional, date);
    layout.patient_section(&record.patient);
    layout.background_section(&record.patient);
    layout.history_section(&record.history_exam);
    layout.exam_section(&record.history_exam);
    layout.scales_section(&record.scales);
    layout.timeline_section(&record.timeline);
    layout.soap_section(&record.clinical_log);
    layout.diagnosis_section(&record.diagnosis);
    layout.signature_area(&record.professional, signature_png);
    layout.stamp_footers()
}

/// Long-form Spanish date for the title row ("6 de agosto de 2026").
pub fn long_date_es(date: Date) -> String {
    const MONTHS: [&str; 12] = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month() as usize - 1],
        date.year(),
    )
}

const PT_TO_MM: f32 = 0.352_778;
/// Average glyph width of the builtin Helvetica faces as a fraction of the
/// font size, chosen wide so estimated lines never overrun their column.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;

/// Estimated width of a text run, in millimetres.
pub(crate) fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * PT_TO_MM * GLYPH_WIDTH_FACTOR
}

fn max_chars(width_mm: f32, size_pt: f32) -> usize {
    let per_char = size_pt * PT_TO_MM * GLYPH_WIDTH_FACTOR;
    ((width_mm / per_char).floor() as usize).max(1)
}

/// Greedy word wrap against the estimated glyph width. A word longer than
/// the column gets a line of its own rather than being split.
pub(crate) fn wrap_text(text: &str, width_mm: f32, size_pt: f32) -> Vec<String> {
    let limit = max_chars(width_mm, size_pt);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > limit {
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

struct Layout<'a> {
    styles: &'a ReportStyles,
    done: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> Layout<'a> {
    fn new(styles: &'a ReportStyles) -> Self {
        Self {
            styles,
            done: Vec::new(),
            current: Page::default(),
            y: 0.0,
        }
    }

    fn push(&mut self, op: DrawOp) {
        self.current.ops.push(op);
    }

    fn break_page(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
        self.y = self.styles.top_after_break;
    }

    /// Break to a fresh page when fewer than `needed` millimetres remain.
    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > self.styles.break_at {
            self.break_page();
        }
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, face: FontFace, color: Rgb8) {
        self.text_aligned(text, x, y, size, face, color, Align::Left);
    }

    #[allow(clippy::too_many_arguments)]
    fn text_aligned(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        face: FontFace,
        color: Rgb8,
        align: Align,
    ) {
        self.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size,
            face,
            color,
            align,
        });
    }

    /// Label + wrapped value block at a column position. Returns the
    /// consumed height, 0 when the value is absent; the caller advances the
    /// cursor by the max height of co-located columns.
    fn field(&mut self, label: &str, value: Option<&str>, x: f32, width: f32) -> f32 {
        let Some(value) = value else { return 0.0 };
        if value.is_empty() {
            return 0.0;
        }
        let s = *self.styles;
        self.text(label.to_uppercase(), x, self.y, 7.5, FontFace::Bold, s.medium_blue);
        let lines = wrap_text(value, width - 2.0, 7.5);
        let count = lines.len() as f32;
        self.push(DrawOp::Lines {
            lines,
            x,
            y: self.y + 4.0,
            size: 7.5,
            face: FontFace::Regular,
            color: s.ink,
            leading: s.leading,
        });
        count * s.leading + 6.0
    }

    fn section_header(&mut self, title: &str) {
        self.ensure_space(14.0);
        let s = *self.styles;
        self.push(DrawOp::Rect {
            x: s.margin,
            y: self.y,
            w: s.content_width(),
            h: 7.0,
            color: s.dark_blue,
        });
        self.text(
            title.to_uppercase(),
            s.margin + 3.0,
            self.y + 5.0,
            9.0,
            FontFace::Bold,
            s.white,
        );
        self.y += 10.0;
    }

    /// Dark banner with the professional's identity, then the title row.
    fn front_header(&mut self, professional: &Professional, date: Date) {
        let s = *self.styles;
        self.push(DrawOp::Rect {
            x: 0.0,
            y: 0.0,
            w: s.page_width,
            h: 38.0,
            color: s.dark_blue,
        });
        self.push(DrawOp::Disc {
            cx: s.margin + 12.0,
            cy: 19.0,
            r: 11.0,
            color: s.medium_blue,
        });

        let name = professional.name.as_deref().unwrap_or(FALLBACK_NAME);
        let specialty = professional.specialty.as_deref().unwrap_or(FALLBACK_SPECIALTY);
        let left = s.margin + 27.0;
        self.text(name, left, 14.0, 15.0, FontFace::Bold, s.white);
        self.text(specialty, left, 20.0, 8.5, FontFace::Regular, s.header_accent);
        if let Some(credential) = &professional.credential {
            self.text(
                format!("Cédula: {credential}"),
                left,
                25.0,
                8.5,
                FontFace::Regular,
                s.header_accent,
            );
        }
        if let Some(institution) = &professional.institution {
            self.text(institution.clone(), left, 30.0, 8.5, FontFace::Regular, s.header_accent);
        }
        if let Some(contact_line) = professional.contact_line() {
            self.text(contact_line, left, 35.0, 8.5, FontFace::Regular, s.header_accent);
        }

        self.y = 44.0;
        self.push(DrawOp::Rect {
            x: s.margin,
            y: self.y,
            w: s.content_width(),
            h: 10.0,
            color: s.light_gray,
        });
        self.text_aligned(
            REPORT_TITLE,
            s.page_width / 2.0,
            self.y + 7.0,
            11.0,
            FontFace::Bold,
            s.dark_blue,
            Align::Center,
        );
        self.text_aligned(
            format!("Fecha: {}", long_date_es(date)),
            s.page_width - s.margin,
            self.y + 7.0,
            7.5,
            FontFace::Regular,
            s.muted,
            Align::Right,
        );
        self.y += 15.0;
    }

    fn patient_section(&mut self, patient: &Patient) {
        self.section_header("Datos del Paciente");
        let s = *self.styles;
        let col = s.content_width() / 4.0;
        let age = patient.age.map(|a| a.to_string());

        let a1 = self.field("Paciente", patient.name.as_deref(), s.margin, col * 2.0);
        let a2 = self.field("Edad", age.as_deref(), s.margin + col * 2.0, col / 2.0);
        let a3 = self.field("Género", patient.gender.as_deref(), s.margin + col * 2.5, col / 2.0);
        let a4 = self.field("Ocupación", patient.occupation.as_deref(), s.margin + col * 3.0, col);
        self.y += a1.max(a2).max(a3).max(a4);

        let b1 = self.field("Escolaridad", patient.education.as_deref(), s.margin, col * 2.0);
        let b2 = self.field(
            "Contacto Emergencia",
            patient.emergency_contact.as_deref(),
            s.margin + col * 2.0,
            col * 2.0,
        );
        self.y += b1.max(b2) + 2.0;
    }

    fn background_section(&mut self, patient: &Patient) {
        self.section_header("Antecedentes y Motivo");
        let s = *self.styles;
        let content = s.content_width();

        let reason = self.field("Motivo", patient.consultation_reason.as_deref(), s.margin, content);
        self.y += reason;

        let history = patient.history_line();
        let h1 = self.field("Antecedentes", history.as_deref(), s.margin, content * 0.6);
        let h2 = self.field(
            "Tratamientos Previos",
            patient.prior_treatments.as_deref(),
            s.margin + content * 0.6,
            content * 0.4,
        );
        self.y += h1.max(h2) + 2.0;
    }

    fn history_section(&mut self, history: &HistoryExam) {
        self.ensure_space(25.0);
        self.section_header("Historia Familiar y Social");
        let s = *self.styles;
        let half = s.content_width() / 2.0 - 2.0;

        let family = self.field("Familiar", history.family_dynamics.as_deref(), s.margin, half);
        let social = self.field(
            "Social",
            history.social_life.as_deref(),
            s.margin + half + 4.0,
            half,
        );
        self.y += family.max(social) + 2.0;
    }

    fn exam_section(&mut self, history: &HistoryExam) {
        self.ensure_space(30.0);
        self.section_header("Examen Mental y Personalidad");
        let s = *self.styles;
        let col = s.content_width() / 3.0;

        for row in history.mse_fields().chunks(3) {
            let mut tallest: f32 = 0.0;
            for (i, &(label, value)) in row.iter().enumerate() {
                let height = self.field(label, Some(value), s.margin + col * i as f32, col - 2.0);
                tallest = tallest.max(height);
            }
            self.y += tallest;
        }

        if history.self_concept.is_some() {
            self.y += 1.0;
            let height = self.field(
                "Autoconcepto / Personalidad",
                history.self_concept.as_deref(),
                s.margin,
                s.content_width(),
            );
            self.y += height;
        }
        self.y += 2.0;
    }

    fn scales_section(&mut self, scales: &ScaleScores) {
        self.ensure_space(20.0);
        self.section_header("Evaluación Psicométrica");
        let s = *self.styles;
        let half = s.content_width() / 2.0;

        for (i, instrument) in all_instruments().iter().enumerate() {
            if let Some(total) = scales.total(instrument.id()) {
                let label = format!("{}: {}", instrument.acronym(), total_label(total));
                self.field(
                    &label,
                    Some(instrument.name()),
                    s.margin + half * i as f32,
                    half - 2.0,
                );
            }
        }
        self.y += 10.0;
    }

    fn timeline_section(&mut self, timeline: &LifeTimeline) {
        if timeline.events.is_empty() {
            return;
        }
        self.ensure_space(20.0);
        self.section_header("Línea de Vida");
        let s = *self.styles;

        for event in &timeline.events {
            self.ensure_space(8.0);
            let mut label = event.stage.label().to_uppercase();
            if let Some(age) = event.age {
                label.push_str(&format!(" - {age} AÑOS"));
            }
            self.text(label, s.margin, self.y, 8.0, FontFace::Bold, s.medium_blue);

            let lines = wrap_text(&event.description, s.content_width() - 48.0, 8.0);
            let count = lines.len() as f32;
            self.push(DrawOp::Lines {
                lines,
                x: s.margin + 48.0,
                y: self.y,
                size: 8.0,
                face: FontFace::Regular,
                color: s.ink,
                leading: s.leading,
            });
            self.y += (count * s.leading + 2.0).max(5.0);
        }
        self.y += 2.0;
    }

    fn soap_section(&mut self, log: &ClinicalLog) {
        self.ensure_space(30.0);
        self.section_header("Registro Clínico (SOAP)");
        let s = *self.styles;
        let half = s.content_width() / 2.0;

        for row in log.soap_fields().chunks(2) {
            let mut tallest: f32 = 0.0;
            for (i, &(label, value)) in row.iter().enumerate() {
                let height = self.field(label, Some(value), s.margin + half * i as f32, half - 2.0);
                tallest = tallest.max(height);
            }
            self.y += tallest;
            self.ensure_space(20.0);
        }

        if !log.sessions.is_empty() {
            self.y += 2.0;
            self.text(
                "HISTORIAL DE SESIONES",
                s.margin,
                self.y,
                8.0,
                FontFace::Bold,
                s.medium_blue,
            );
            self.y += 4.0;
            for (i, session) in log.sessions.iter().enumerate() {
                self.ensure_space(6.0);
                self.text(
                    format!("{}. {}  —  {}", i + 1, session.date, session.objective),
                    s.margin + 2.0,
                    self.y,
                    8.0,
                    FontFace::Regular,
                    s.ink,
                );
                self.y += 4.0;
            }
            self.y += 2.0;
        }
    }

    fn diagnosis_section(&mut self, diagnosis: &Diagnosis) {
        self.ensure_space(20.0);
        self.section_header("Diagnóstico Final");
        let Some(impression) = &diagnosis.impression else {
            return;
        };
        let s = *self.styles;

        let lines = wrap_text(impression, s.content_width() - 6.0, 9.0);
        let box_height = lines.len() as f32 * 4.0 + 6.0;
        self.push(DrawOp::Rect {
            x: s.margin,
            y: self.y,
            w: s.content_width(),
            h: box_height,
            color: s.light_gray,
        });
        self.push(DrawOp::Lines {
            lines,
            x: s.margin + 3.0,
            y: self.y + 5.0,
            size: 9.0,
            face: FontFace::Regular,
            color: s.ink,
            leading: 4.0,
        });
        self.y += box_height + 6.0;
    }

    fn signature_area(&mut self, professional: &Professional, signature_png: Option<&[u8]>) {
        self.ensure_space(35.0);
        let s = *self.styles;

        self.push(DrawOp::Rule {
            x1: s.margin,
            x2: s.page_width - s.margin,
            y: self.y,
            color: s.line_gray,
            thickness: 0.6,
        });
        self.y += 4.0;
        self.text(
            "Firma del Psicólogo",
            s.margin,
            self.y,
            8.0,
            FontFace::Regular,
            s.muted,
        );
        self.y += 3.0;

        match signature_png {
            Some(png) => {
                self.push(DrawOp::Image {
                    png: png.to_vec(),
                    x: s.margin,
                    y: self.y,
                    w: 70.0,
                    h: 20.0,
                });
                self.y += 22.0;
            }
            None => {
                self.push(DrawOp::Rule {
                    x1: s.margin,
                    x2: s.margin + 70.0,
                    y: self.y + 15.0,
                    color: s.line_gray,
                    thickness: 0.6,
                });
                self.y += 20.0;
            }
        }

        if let Some(name) = &professional.name {
            self.text(name.clone(), s.margin, self.y, 8.5, FontFace::Bold, s.ink);
        }
        if let Some(credential) = &professional.credential {
            self.text(
                format!("Cédula: {credential}"),
                s.margin,
                self.y + 4.0,
                8.0,
                FontFace::Regular,
                s.muted,
            );
        }
    }

    /// Second pass: every page gets the footer band, now that the total
    /// page count is known.
    fn stamp_footers(mut self) -> Document {
        self.done.push(self.current);
        let total = self.done.len();
        let s = *self.styles;
        for (i, page) in self.done.iter_mut().enumerate() {
            page.ops.push(DrawOp::Rect {
                x: 0.0,
                y: s.page_height - s.footer_height,
                w: s.page_width,
                h: s.footer_height,
                color: s.dark_blue,
            });
            page.ops.push(DrawOp::Text {
                text: format!("{FOOTER_BRAND}  ·  Página {} de {}", i + 1, total),
                x: s.page_width / 2.0,
                y: s.page_height - 2.0,
                size: 7.0,
                face: FontFace::Regular,
                color: s.white,
                align: Align::Center,
            });
        }
        Document { pages: self.done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_estimated_column_capacity() {
        let lines = wrap_text("uno dos tres cuatro cinco seis siete ocho", 20.0, 7.5);
        assert!(lines.len() > 1);
        let limit = max_chars(20.0, 7.5);
        for line in &lines {
            assert!(line.chars().count() <= limit, "{line:?}");
        }
    }

    #[test]
    fn wrap_gives_an_oversized_word_its_own_line() {
        let lines = wrap_text("pneumonoultramicroscopicsilicovolcanoconiosis sí", 10.0, 7.5);
        assert_eq!(lines[0], "pneumonoultramicroscopicsilicovolcanoconiosis");
        assert_eq!(lines[1], "sí");
    }

    #[test]
    fn wrap_of_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 50.0, 7.5), vec![String::new()]);
    }

    #[test]
    fn long_date_is_spanish_long_form() {
        assert_eq!(long_date_es(jiff::civil::date(2026, 8, 6)), "6 de agosto de 2026");
    }
}
