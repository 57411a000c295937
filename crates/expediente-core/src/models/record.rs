use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::diagnosis::Diagnosis;
use crate::models::history::HistoryExam;
use crate::models::patient::Patient;
use crate::models::professional::Professional;
use crate::models::scales::ScaleScores;
use crate::models::soap::ClinicalLog;
use crate::models::timeline::LifeTimeline;

/// The aggregate clinical record: seven slices, each owned by one editor
/// section. Lives in memory for a single editing session only — there is no
/// persisted form beyond whatever JSON the caller chooses to feed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalRecord {
    pub professional: Professional,
    pub patient: Patient,
    pub history_exam: HistoryExam,
    pub scales: ScaleScores,
    pub timeline: LifeTimeline,
    pub clinical_log: ClinicalLog,
    pub diagnosis: Diagnosis,
}

impl ClinicalRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
