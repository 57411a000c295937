//! Catalogue-level checks over the registered instruments.

use std::collections::{BTreeMap, BTreeSet};

use expediente_core::models::ScaleScores;
use expediente_instruments::error::InstrumentError;
use expediente_instruments::{all_instruments, get_instrument, validate_record_scales};

#[test]
fn catalogue_has_both_scales_in_report_order() {
    let instruments = all_instruments();
    let ids: Vec<&str> = instruments.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["bdi", "bai"]);
    assert_eq!(instruments[0].items().len(), 7);
    assert_eq!(instruments[1].items().len(), 5);
}

#[test]
fn item_ids_are_unique_within_each_instrument() {
    for instrument in all_instruments() {
        let ids: BTreeSet<&str> = instrument.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), instrument.items().len(), "{}", instrument.id());
    }
}

#[test]
fn validate_flags_out_of_range_and_unknown_items() {
    let bdi = get_instrument("bdi").expect("bdi registered");
    let scores: BTreeMap<String, u8> = [
        ("tristeza".to_string(), 4),
        ("culpa".to_string(), 5),
        ("autoestima".to_string(), 2),
    ]
    .into_iter()
    .collect();

    let violations = bdi.validate_scores(&scores);
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().any(|v| v.item_id == "culpa" && v.expected.is_some()));
    assert!(violations.iter().any(|v| v.item_id == "autoestima" && v.expected.is_none()));
}

#[test]
fn check_score_accepts_the_full_likert_range() {
    let bai = get_instrument("bai").expect("bai registered");
    for value in 0..=4 {
        bai.check_score("inquietud", value).expect("in range");
    }
    assert!(matches!(
        bai.check_score("inquietud", 5),
        Err(InstrumentError::OutOfRange { value: 5, .. }),
    ));
    assert!(matches!(
        bai.check_score("vertigo", 1),
        Err(InstrumentError::UnknownItem { .. }),
    ));
}

#[test]
fn record_scales_validation_rejects_unknown_instruments() {
    let mut scales = ScaleScores::default();
    scales.set("bdi", "tristeza", 2);
    assert!(validate_record_scales(&scales).expect("known instrument").is_empty());

    scales.set("stai", "tension", 1);
    assert!(matches!(
        validate_record_scales(&scales),
        Err(InstrumentError::UnknownInstrument(id)) if id == "stai",
    ));
}
