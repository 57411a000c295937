use serde::{Deserialize, Serialize};

/// Fixed catalogue of clinical-history tags offered by the patient editor.
pub const HISTORY_TAGS: [&str; 6] = [
    "Ansiedad",
    "Depresión",
    "Trauma",
    "Riesgo Suicida",
    "Duelo",
    "Adicciones",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patient {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub emergency_contact: Option<String>,
    pub consultation_reason: Option<String>,
    /// Selected clinical-history tags, in selection order.
    pub history_tags: Vec<String>,
    pub prior_treatments: Option<String>,
}

impl Patient {
    /// Toggles a clinical-history tag: present → removed, absent → appended.
    pub fn toggle_history_tag(&mut self, tag: &str) {
        if let Some(pos) = self.history_tags.iter().position(|t| t == tag) {
            self.history_tags.remove(pos);
        } else {
            self.history_tags.push(tag.to_string());
        }
    }

    /// Tags joined the way the report prints them, `None` when none are
    /// selected.
    pub fn history_line(&self) -> Option<String> {
        if self.history_tags.is_empty() {
            None
        } else {
            Some(self.history_tags.join("  ·  "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_returns_to_prior_state() {
        let mut patient = Patient::default();
        patient.toggle_history_tag("Duelo");
        assert_eq!(patient.history_tags, vec!["Duelo"]);
        patient.toggle_history_tag("Duelo");
        assert!(patient.history_tags.is_empty());
    }

    #[test]
    fn history_line_joins_in_selection_order() {
        let mut patient = Patient::default();
        assert_eq!(patient.history_line(), None);
        patient.toggle_history_tag("Trauma");
        patient.toggle_history_tag("Ansiedad");
        assert_eq!(patient.history_line().as_deref(), Some("Trauma  ·  Ansiedad"));
    }
}
