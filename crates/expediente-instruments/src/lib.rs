//! expediente-instruments
//!
//! Psychometric instrument definitions. Pure data — item catalogues, score
//! validation and the severity tiers the report prints after each total.

pub mod error;
pub mod instruments;
pub mod scoring;

use std::collections::BTreeMap;

use error::InstrumentError;
use scoring::{Item, ScoreViolation};

/// Trait implemented by each psychometric instrument.
pub trait Instrument: Send + Sync {
    /// Stable identifier used as the key in the record ("bdi", "bai").
    fn id(&self) -> &str;

    /// Clinical acronym printed before the severity label ("BDI").
    fn acronym(&self) -> &str;

    /// Display name ("Escala de Depresión").
    fn name(&self) -> &str;

    /// The rated items, in questionnaire order.
    fn items(&self) -> &[Item];

    fn item(&self, item_id: &str) -> Option<&Item> {
        self.items().iter().find(|item| item.id == item_id)
    }

    /// Validate a captured score map against this instrument's catalogue.
    fn validate_scores(&self, scores: &BTreeMap<String, u8>) -> Vec<ScoreViolation> {
        let mut violations = Vec::new();
        for (item_id, &value) in scores {
            match self.item(item_id) {
                Some(item) if !item.range.contains(value) => {
                    violations.push(ScoreViolation {
                        item_id: item_id.clone(),
                        value,
                        expected: Some(item.range),
                        message: format!(
                            "{}: score {} for \"{}\" is outside range [{}, {}]",
                            self.acronym(),
                            value,
                            item.label,
                            item.range.min,
                            item.range.max,
                        ),
                    });
                }
                Some(_) => {}
                None => violations.push(ScoreViolation {
                    item_id: item_id.clone(),
                    value,
                    expected: None,
                    message: format!("{}: unknown item \"{}\"", self.acronym(), item_id),
                }),
            }
        }
        violations
    }

    /// Check a single score the way the editor does before accepting it.
    fn check_score(&self, item_id: &str, value: u8) -> Result<(), InstrumentError> {
        let item = self
            .item(item_id)
            .ok_or_else(|| InstrumentError::UnknownItem {
                instrument_id: self.id().to_string(),
                item_id: item_id.to_string(),
            })?;
        if !item.range.contains(value) {
            return Err(InstrumentError::OutOfRange {
                item_id: item_id.to_string(),
                value,
                min: item.range.min,
                max: item.range.max,
            });
        }
        Ok(())
    }
}

/// The registered instruments, in report order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::bdi::Bdi),
        Box::new(instruments::bai::Bai),
    ]
}

/// Look up an instrument by id.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Validate every instrument captured in a record's scales slice. Fails on
/// an instrument id the catalogue does not know; per-item problems come
/// back as violations.
pub fn validate_record_scales(
    scales: &expediente_core::models::ScaleScores,
) -> Result<Vec<ScoreViolation>, InstrumentError> {
    let mut violations = Vec::new();
    for (instrument_id, scores) in &scales.by_instrument {
        let instrument = get_instrument(instrument_id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.clone()))?;
        violations.extend(instrument.validate_scores(scores));
    }
    Ok(violations)
}
