use serde::{Deserialize, Serialize};

/// Family/social history narratives plus the six fixed mental-status-exam
/// observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryExam {
    pub family_dynamics: Option<String>,
    pub social_life: Option<String>,
    pub appearance: Option<String>,
    pub orientation: Option<String>,
    pub attention_memory: Option<String>,
    pub language: Option<String>,
    pub affect_mood: Option<String>,
    pub thought_judgement: Option<String>,
    pub self_concept: Option<String>,
}

impl HistoryExam {
    /// The six MSE observations as (label, value) pairs, present fields only,
    /// in exam order.
    pub fn mse_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Apariencia", self.appearance.as_deref()),
            ("Orientación", self.orientation.as_deref()),
            ("Atención/Memoria", self.attention_memory.as_deref()),
            ("Lenguaje", self.language.as_deref()),
            ("Afecto/Ánimo", self.affect_mood.as_deref()),
            ("Pensamiento/Juicio", self.thought_judgement.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}
