use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Captured psychometric item scores: instrument id → item id → score.
///
/// `BTreeMap`s keep JSON output and iteration order stable. Score ranges are
/// enforced at the editing boundary against the instrument catalogue, not
/// here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleScores {
    #[serde(flatten)]
    pub by_instrument: BTreeMap<String, BTreeMap<String, u8>>,
}

impl ScaleScores {
    pub fn set(&mut self, instrument_id: &str, item_id: &str, value: u8) {
        self.by_instrument
            .entry(instrument_id.to_string())
            .or_default()
            .insert(item_id.to_string(), value);
    }

    /// The captured scores for one instrument. An instrument with no
    /// captured items counts as absent.
    pub fn instrument(&self, instrument_id: &str) -> Option<&BTreeMap<String, u8>> {
        self.by_instrument
            .get(instrument_id)
            .filter(|scores| !scores.is_empty())
    }

    /// Sum of all captured item scores for one instrument, `None` when the
    /// instrument is absent.
    pub fn total(&self, instrument_id: &str) -> Option<u32> {
        self.instrument(instrument_id)
            .map(|scores| scores.values().map(|&v| u32::from(v)).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_item_scores() {
        let mut scales = ScaleScores::default();
        scales.set("bdi", "tristeza", 3);
        scales.set("bdi", "culpa", 2);
        scales.set("bdi", "castigo", 0);
        assert_eq!(scales.total("bdi"), Some(5));
    }

    #[test]
    fn absent_and_empty_instruments_have_no_total() {
        let scales = ScaleScores::default();
        assert_eq!(scales.total("bdi"), None);

        let empty = ScaleScores {
            by_instrument: [("bai".to_string(), BTreeMap::new())].into_iter().collect(),
        };
        assert_eq!(empty.total("bai"), None);
        assert!(empty.instrument("bai").is_none());
    }
}
