//! expediente-session
//!
//! In-memory editing state for one record session: wholesale slice
//! replacement, the "new item" drafts of the list-bearing sections, scale
//! score capture routed through the instrument catalogue, signature
//! capture, and the two reset actions. Nothing is ever persisted — the
//! record dies with the session.

pub mod error;

use expediente_core::models::{
    ClinicalLog, ClinicalRecord, HistoryExam, LifeStage, Patient, Professional,
};
use expediente_instruments::get_instrument;
use expediente_signature::SignaturePad;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use error::SessionError;

/// Draft state of the timeline "add event" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineDraft {
    pub stage: LifeStage,
    pub age: Option<u8>,
    pub description: String,
}

impl Default for TimelineDraft {
    fn default() -> Self {
        Self {
            stage: LifeStage::Adultez,
            age: None,
            description: String::new(),
        }
    }
}

/// Draft state of the "add session" form. The date stays a raw string
/// until commit, like the form input it mirrors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDraft {
    pub date: String,
    pub objective: String,
}

/// One editing session over a clinical record.
#[derive(Debug, Default)]
pub struct RecordSession {
    record: ClinicalRecord,
    timeline_draft: TimelineDraft,
    session_draft: SessionDraft,
    signature: SignaturePad,
}

impl RecordSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing an existing record (e.g. one loaded from JSON).
    pub fn with_record(record: ClinicalRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    pub fn record(&self) -> &ClinicalRecord {
        &self.record
    }

    pub fn into_record(self) -> ClinicalRecord {
        self.record
    }

    // ── Wholesale slice replacement ──────────────────────────────────────
    // Every editor hands back its whole slice on change; the session swaps
    // it in without cross-section validation.

    pub fn replace_professional(&mut self, slice: Professional) {
        self.record.professional = slice;
    }

    pub fn replace_patient(&mut self, slice: Patient) {
        self.record.patient = slice;
    }

    pub fn replace_history_exam(&mut self, slice: HistoryExam) {
        self.record.history_exam = slice;
    }

    pub fn replace_clinical_log(&mut self, slice: ClinicalLog) {
        self.record.clinical_log = slice;
    }

    pub fn set_diagnosis(&mut self, impression: Option<String>) {
        self.record.diagnosis.impression = impression;
    }

    // ── Targeted edits ───────────────────────────────────────────────────

    pub fn toggle_history_tag(&mut self, tag: &str) {
        self.record.patient.toggle_history_tag(tag);
    }

    /// Capture one item score, validated against the instrument catalogue.
    pub fn set_scale_score(
        &mut self,
        instrument_id: &str,
        item_id: &str,
        value: u8,
    ) -> Result<(), SessionError> {
        let instrument = get_instrument(instrument_id)
            .ok_or_else(|| SessionError::UnknownInstrument(instrument_id.to_string()))?;
        instrument.check_score(item_id, value)?;
        self.record.scales.set(instrument_id, item_id, value);
        Ok(())
    }

    // ── Timeline draft ───────────────────────────────────────────────────

    pub fn timeline_draft(&self) -> &TimelineDraft {
        &self.timeline_draft
    }

    pub fn timeline_draft_mut(&mut self) -> &mut TimelineDraft {
        &mut self.timeline_draft
    }

    /// Commit the timeline draft: refused (`None`) while the description is
    /// blank; otherwise the event is appended, the draft cleared, and the
    /// new entry's removal id returned.
    pub fn commit_timeline_event(&mut self) -> Option<Uuid> {
        if self.timeline_draft.description.trim().is_empty() {
            return None;
        }
        let draft = std::mem::take(&mut self.timeline_draft);
        let id = self
            .record
            .timeline
            .add(draft.stage, draft.age, draft.description);
        tracing::debug!(%id, "timeline event added");
        Some(id)
    }

    pub fn remove_timeline_event(&mut self, id: Uuid) -> bool {
        self.record.timeline.remove(id)
    }

    // ── Session-history draft ────────────────────────────────────────────

    pub fn session_draft(&self) -> &SessionDraft {
        &self.session_draft
    }

    pub fn session_draft_mut(&mut self) -> &mut SessionDraft {
        &mut self.session_draft
    }

    /// Commit the session draft: refused (`Ok(None)`) while the date is
    /// blank; a malformed date is an error rather than a silent refusal.
    pub fn commit_session_entry(&mut self) -> Result<Option<Uuid>, SessionError> {
        let raw = self.session_draft.date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let date = raw.parse().map_err(|source| SessionError::InvalidDate {
            date: raw.to_string(),
            source,
        })?;
        let draft = std::mem::take(&mut self.session_draft);
        let id = self.record.clinical_log.add_session(date, draft.objective);
        tracing::debug!(%id, "session entry added");
        Ok(Some(id))
    }

    pub fn remove_session_entry(&mut self, id: Uuid) -> bool {
        self.record.clinical_log.remove_session(id)
    }

    // ── Signature ────────────────────────────────────────────────────────

    pub fn signature(&self) -> &SignaturePad {
        &self.signature
    }

    pub fn signature_mut(&mut self) -> &mut SignaturePad {
        &mut self.signature
    }

    /// The signature as PNG bytes, `None` while nothing is drawn — exactly
    /// what the exporter takes.
    pub fn signature_png(&self) -> Result<Option<Vec<u8>>, SessionError> {
        if !self.signature.has_ink() {
            return Ok(None);
        }
        Ok(Some(self.signature.to_png()?))
    }

    // ── Resets ───────────────────────────────────────────────────────────

    /// Clear the professional's configuration, keeping the patient work.
    pub fn clear_professional(&mut self) {
        self.record.professional = Professional::default();
        tracing::debug!("professional configuration cleared");
    }

    /// Start over with a fresh patient, keeping the professional's
    /// configuration and discarding drafts and signature.
    pub fn reset_patient(&mut self) {
        let professional = std::mem::take(&mut self.record.professional);
        self.record = ClinicalRecord {
            professional,
            ..ClinicalRecord::default()
        };
        self.timeline_draft = TimelineDraft::default();
        self.session_draft = SessionDraft::default();
        self.signature.clear();
        tracing::debug!("patient record reset");
    }
}
