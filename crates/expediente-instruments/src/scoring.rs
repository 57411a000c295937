use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive score range for a rated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    /// The 0–4 rating every item of the bundled instruments uses.
    pub const LIKERT: ScoreRange = ScoreRange { min: 0, max: 4 };

    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A rated item within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub range: ScoreRange,
}

/// A captured score that failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ScoreViolation {
    pub item_id: String,
    pub value: u8,
    /// `None` when the item id itself is unknown.
    pub expected: Option<ScoreRange>,
    pub message: String,
}

/// Orientative severity tier over an instrument total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Nada,
    Leve,
    Moderado,
    Alto,
}

impl SeverityTier {
    /// Tier boundaries: 0, 1–5, 6–15, >15.
    pub fn from_total(total: u32) -> Self {
        match total {
            0 => SeverityTier::Nada,
            1..=5 => SeverityTier::Leve,
            6..=15 => SeverityTier::Moderado,
            _ => SeverityTier::Alto,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Nada => "Nada",
            SeverityTier::Leve => "Leve",
            SeverityTier::Moderado => "Moderado",
            SeverityTier::Alto => "Alto",
        }
    }
}

/// "12 (Moderado)" — the form the report prints after the acronym.
pub fn total_label(total: u32) -> String {
    format!("{} ({})", total, SeverityTier::from_total(total).label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_deterministic_on_the_boundaries() {
        let cases = [
            (0, SeverityTier::Nada),
            (1, SeverityTier::Leve),
            (5, SeverityTier::Leve),
            (6, SeverityTier::Moderado),
            (15, SeverityTier::Moderado),
            (16, SeverityTier::Alto),
        ];
        for (total, tier) in cases {
            assert_eq!(SeverityTier::from_total(total), tier, "total {total}");
        }
    }

    #[test]
    fn total_label_prints_total_and_tier() {
        assert_eq!(total_label(0), "0 (Nada)");
        assert_eq!(total_label(12), "12 (Moderado)");
        assert_eq!(total_label(21), "21 (Alto)");
    }

    #[test]
    fn likert_range_bounds() {
        assert!(ScoreRange::LIKERT.contains(0));
        assert!(ScoreRange::LIKERT.contains(4));
        assert!(!ScoreRange::LIKERT.contains(5));
    }
}
