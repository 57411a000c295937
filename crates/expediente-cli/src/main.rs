use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::{bail, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use expediente_core::ClinicalRecord;
use expediente_export::{export_docx, export_pdf, report_file_name};
use expediente_instruments::{all_instruments, validate_record_scales};
use expediente_session::RecordSession;

#[derive(Parser)]
#[command(name = "expediente")]
#[command(about = "Expediente clínico psicológico: generación de reportes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the PDF report from a record JSON file
    Export {
        /// Path to the record JSON
        record: PathBuf,
        /// Signature PNG stamped next to the professional's name
        #[arg(long)]
        signature: Option<PathBuf>,
        /// Output directory (defaults to the record's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Also write the DOCX rendition
        #[arg(long)]
        docx: bool,
    },
    /// List the psychometric instrument catalogue
    Instruments,
    /// Validate a record's scale scores against the catalogue
    Validate {
        /// Path to the record JSON
        record: PathBuf,
    },
    /// Print a filled-in example record as JSON
    Sample,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Export {
            record,
            signature,
            out_dir,
            docx,
        } => export(record, signature, out_dir, docx),
        Commands::Instruments => instruments(),
        Commands::Validate { record } => validate(record),
        Commands::Sample => sample(),
    }
}

fn load_record(path: &Path) -> Result<ClinicalRecord> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read record file {}", path.display()))?;
    ClinicalRecord::from_json(&json)
        .wrap_err_with(|| format!("malformed record in {}", path.display()))
}

fn export(
    record_path: PathBuf,
    signature: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    docx: bool,
) -> Result<()> {
    let record = load_record(&record_path)?;
    let signature = signature
        .map(|path| {
            fs::read(&path).wrap_err_with(|| format!("cannot read signature {}", path.display()))
        })
        .transpose()?;
    let today = jiff::Zoned::now().date();
    let out_dir = out_dir.unwrap_or_else(|| {
        record_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    });

    let pdf = export_pdf(&record, signature.as_deref(), today)?;
    let pdf_path = out_dir.join(report_file_name(&record, today, "pdf"));
    fs::write(&pdf_path, &pdf)
        .wrap_err_with(|| format!("cannot write {}", pdf_path.display()))?;
    tracing::info!(path = %pdf_path.display(), bytes = pdf.len(), "reporte PDF generado");
    println!("{}", pdf_path.display());

    if docx {
        let bytes = export_docx(&record, today)?;
        let docx_path = out_dir.join(report_file_name(&record, today, "docx"));
        fs::write(&docx_path, &bytes)
            .wrap_err_with(|| format!("cannot write {}", docx_path.display()))?;
        tracing::info!(path = %docx_path.display(), bytes = bytes.len(), "reporte DOCX generado");
        println!("{}", docx_path.display());
    }
    Ok(())
}

fn instruments() -> Result<()> {
    for instrument in all_instruments() {
        println!(
            "{} — {} ({})",
            instrument.id(),
            instrument.name(),
            instrument.acronym(),
        );
        for item in instrument.items() {
            println!(
                "  {:<22} {}  [{}–{}]",
                item.id, item.label, item.range.min, item.range.max,
            );
        }
    }
    Ok(())
}

fn validate(record_path: PathBuf) -> Result<()> {
    let record = load_record(&record_path)?;
    let violations = validate_record_scales(&record.scales)?;
    if violations.is_empty() {
        println!("ok: todos los puntajes están dentro de rango");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("{violation}");
    }
    bail!("{} invalid score(s)", violations.len());
}

/// Builds the example through the same editing session the editors use, so
/// the printed JSON always matches the accepted record shape.
fn sample() -> Result<()> {
    let mut session = RecordSession::new();

    session.replace_professional(expediente_core::models::Professional {
        name: Some("Dra. Laura Méndez Castillo".to_string()),
        credential: Some("12345678".to_string()),
        specialty: Some("Psicología clínica".to_string()),
        institution: Some("Centro de Atención Psicológica Integral".to_string()),
        address: Some("Av. Reforma 100, CDMX".to_string()),
        contact: Some("laura@capi.mx · 55 1234 5678".to_string()),
    });

    session.replace_patient(expediente_core::models::Patient {
        name: Some("María Fernanda López".to_string()),
        age: Some(25),
        gender: Some("Femenino".to_string()),
        education: Some("Licenciatura".to_string()),
        occupation: Some("Estudiante".to_string()),
        emergency_contact: Some("Rosa López · 55 8765 4321".to_string()),
        consultation_reason: Some(
            "Episodios de ansiedad frecuentes y dificultad para dormir desde hace tres meses."
                .to_string(),
        ),
        prior_treatments: Some("Terapia cognitivo-conductual (2022)".to_string()),
        ..Default::default()
    });
    session.toggle_history_tag("Ansiedad");
    session.toggle_history_tag("Duelo");

    session.set_scale_score("bdi", "tristeza", 2)?;
    session.set_scale_score("bdi", "pesimismo", 1)?;
    session.set_scale_score("bai", "nerviosismo", 3)?;
    session.set_scale_score("bai", "preocupacion", 3)?;

    {
        let draft = session.timeline_draft_mut();
        draft.stage = expediente_core::models::LifeStage::Adolescencia;
        draft.age = Some(16);
        draft.description = "Fallecimiento de la abuela materna".to_string();
    }
    let _ = session.commit_timeline_event();

    {
        let draft = session.session_draft_mut();
        draft.date = "2026-03-02".to_string();
        draft.objective = "Primera entrevista y encuadre".to_string();
    }
    session.commit_session_entry()?;

    session.set_diagnosis(Some(
        "Trastorno de ansiedad generalizada leve con síntomas depresivos asociados.".to_string(),
    ));

    println!("{}", session.record().to_json()?);
    Ok(())
}
