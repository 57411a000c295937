//! Plain-text rendering of the record: a tera template over a context
//! assembled from the record plus computed scale summaries. Feeds the DOCX
//! backend.

use expediente_core::ClinicalRecord;
use expediente_instruments::all_instruments;
use expediente_instruments::scoring::total_label;
use jiff::civil::Date;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::layout::long_date_es;

/// Built-in report template (Jinja2 syntax). Headings, bullets and
/// `**bold**` spans are the subset the DOCX backend understands.
const REPORT_TEMPLATE: &str = r#"# EXPEDIENTE CLÍNICO INTEGRAL

Fecha: {{ fecha }}

## Profesional
{% if professional.name %}**Nombre:** {{ professional.name }}
{% endif %}{% if professional.credential %}**Cédula:** {{ professional.credential }}
{% endif %}{% if professional.specialty %}**Especialidad:** {{ professional.specialty }}
{% endif %}{% if professional.institution %}**Institución:** {{ professional.institution }}
{% endif %}
## Datos del Paciente
{% if patient.name %}**Paciente:** {{ patient.name }}
{% endif %}{% if patient.age %}**Edad:** {{ patient.age }}
{% endif %}{% if patient.gender %}**Género:** {{ patient.gender }}
{% endif %}{% if patient.education %}**Escolaridad:** {{ patient.education }}
{% endif %}{% if patient.occupation %}**Ocupación:** {{ patient.occupation }}
{% endif %}{% if patient.emergency_contact %}**Contacto de emergencia:** {{ patient.emergency_contact }}
{% endif %}{% if patient.consultation_reason %}**Motivo de consulta:** {{ patient.consultation_reason }}
{% endif %}{% if patient.history_tags %}**Antecedentes:** {{ patient.history_tags | join(sep="  ·  ") }}
{% endif %}{% if patient.prior_treatments %}**Tratamientos previos:** {{ patient.prior_treatments }}
{% endif %}
## Historia y Examen Mental
{% if history_exam.family_dynamics %}**Dinámica familiar:** {{ history_exam.family_dynamics }}
{% endif %}{% if history_exam.social_life %}**Vida social:** {{ history_exam.social_life }}
{% endif %}{% if history_exam.appearance %}**Apariencia:** {{ history_exam.appearance }}
{% endif %}{% if history_exam.orientation %}**Orientación:** {{ history_exam.orientation }}
{% endif %}{% if history_exam.attention_memory %}**Atención/Memoria:** {{ history_exam.attention_memory }}
{% endif %}{% if history_exam.language %}**Lenguaje:** {{ history_exam.language }}
{% endif %}{% if history_exam.affect_mood %}**Afecto/Ánimo:** {{ history_exam.affect_mood }}
{% endif %}{% if history_exam.thought_judgement %}**Pensamiento/Juicio:** {{ history_exam.thought_judgement }}
{% endif %}{% if history_exam.self_concept %}**Autoconcepto:** {{ history_exam.self_concept }}
{% endif %}
{% if scale_summaries %}## Evaluación Psicométrica
{% for scale in scale_summaries %}- **{{ scale.acronym }}** ({{ scale.name }}): {{ scale.label }}
{% endfor %}{% endif %}
{% if timeline.events %}## Línea de Vida
{% for event in timeline.events %}- **{{ event.stage }}**{% if event.age %} ({{ event.age }} años){% endif %}: {{ event.description }}
{% endfor %}{% endif %}
## Registro Clínico (SOAP)
{% if clinical_log.subjective %}**S - Subjetivo:** {{ clinical_log.subjective }}
{% endif %}{% if clinical_log.objective %}**O - Objetivo:** {{ clinical_log.objective }}
{% endif %}{% if clinical_log.analysis %}**A - Análisis:** {{ clinical_log.analysis }}
{% endif %}{% if clinical_log.plan %}**P - Plan:** {{ clinical_log.plan }}
{% endif %}{% if clinical_log.sessions %}
### Historial de Sesiones
{% for session in clinical_log.sessions %}- {{ loop.index }}. {{ session.date }} — {{ session.objective }}
{% endfor %}{% endif %}
{% if diagnosis.impression %}## Diagnóstico Final
{{ diagnosis.impression }}
{% endif %}"#;

/// Total + tier summary for one captured instrument.
#[derive(Debug, Clone, Serialize)]
struct ScaleSummary {
    acronym: String,
    name: String,
    total: u32,
    label: String,
}

/// Render the record through the built-in report template.
pub fn render_report(record: &ClinicalRecord, date: Date) -> Result<String, ExportError> {
    render_with_template("report", REPORT_TEMPLATE, record, date)
}

/// Render the record through a caller-supplied tera template. The record's
/// slices are the context variables, plus `fecha` (long-form date) and
/// `scale_summaries` (computed instrument totals).
pub fn render_with_template(
    name: &str,
    template: &str,
    record: &ClinicalRecord,
    date: Date,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, template)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(record)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("fecha", &long_date_es(date));
    context.insert("scale_summaries", &scale_summaries(record));

    let rendered = tera.render(name, &context)?;
    Ok(rendered)
}

fn scale_summaries(record: &ClinicalRecord) -> Vec<ScaleSummary> {
    all_instruments()
        .iter()
        .filter_map(|instrument| {
            let total = record.scales.total(instrument.id())?;
            Some(ScaleSummary {
                acronym: instrument.acronym().to_string(),
                name: instrument.name().to_string(),
                total,
                label: total_label(total),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use expediente_core::models::LifeStage;
    use jiff::civil::date;

    use super::*;

    #[test]
    fn absent_fields_leave_no_labels_behind() {
        let record = ClinicalRecord::default();
        let rendered = render_report(&record, date(2026, 8, 6)).expect("render");
        assert!(rendered.contains("# EXPEDIENTE CLÍNICO INTEGRAL"));
        assert!(rendered.contains("Fecha: 6 de agosto de 2026"));
        assert!(!rendered.contains("**Paciente:**"));
        assert!(!rendered.contains("## Diagnóstico Final"));
    }

    #[test]
    fn present_fields_and_scale_totals_are_rendered() {
        let mut record = ClinicalRecord::default();
        record.patient.name = Some("María Fernanda López".to_string());
        record.scales.set("bdi", "tristeza", 4);
        record.scales.set("bdi", "culpa", 3);
        record
            .timeline
            .add(LifeStage::Infancia, Some(9), "Cambio de escuela");

        let rendered = render_report(&record, date(2026, 8, 6)).expect("render");
        assert!(rendered.contains("**Paciente:** María Fernanda López"));
        assert!(rendered.contains("**BDI** (Escala de Depresión): 7 (Moderado)"));
        assert!(rendered.contains("**Infancia** (9 años): Cambio de escuela"));
    }
}
