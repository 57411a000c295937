use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub id: Uuid,
    pub date: Date,
    pub objective: String,
}

/// SOAP note plus the running session history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalLog {
    pub subjective: Option<String>,
    pub objective: Option<String>,
    pub analysis: Option<String>,
    pub plan: Option<String>,
    pub sessions: Vec<SessionEntry>,
}

impl ClinicalLog {
    /// The SOAP quadrants as (label, value) pairs, present fields only.
    pub fn soap_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("S - Subjetivo", self.subjective.as_deref()),
            ("O - Objetivo", self.objective.as_deref()),
            ("A - Análisis", self.analysis.as_deref()),
            ("P - Plan", self.plan.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// Appends a session entry tagged with a fresh id and returns that id.
    pub fn add_session(&mut self, date: Date, objective: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.push(SessionEntry {
            id,
            date,
            objective: objective.into(),
        });
        id
    }

    /// Removes the session with the given id; returns whether one was removed.
    pub fn remove_session(&mut self, id: Uuid) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|session| session.id != id);
        self.sessions.len() != before
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn add_then_remove_round_trips() {
        let mut log = ClinicalLog::default();
        log.add_session(date(2026, 3, 2), "Primera entrevista");
        let snapshot = log.clone();

        let id = log.add_session(date(2026, 3, 9), "Revisión de tareas");
        assert!(log.remove_session(id));
        assert_eq!(log, snapshot);
    }

    #[test]
    fn soap_fields_skip_absent_quadrants() {
        let log = ClinicalLog {
            subjective: Some("Refiere insomnio".to_string()),
            plan: Some("Higiene del sueño".to_string()),
            ..Default::default()
        };
        let fields = log.soap_fields();
        assert_eq!(
            fields,
            vec![
                ("S - Subjetivo", "Refiere insomnio"),
                ("P - Plan", "Higiene del sueño"),
            ],
        );
    }
}
