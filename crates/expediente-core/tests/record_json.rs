//! Record JSON round-trip: the on-disk shape a caller hands to the exporter.

use expediente_core::models::LifeStage;
use expediente_core::ClinicalRecord;

#[test]
fn empty_object_deserialises_to_default_record() {
    let record = ClinicalRecord::from_json("{}").expect("parse empty record");
    assert_eq!(record, ClinicalRecord::default());
}

#[test]
fn partial_record_round_trips() {
    let json = r#"{
        "professional": { "name": "Dra. Laura Méndez", "specialty": "Psicología clínica" },
        "patient": {
            "name": "María Fernanda López",
            "age": 25,
            "history_tags": ["Ansiedad", "Duelo"]
        },
        "scales": { "bdi": { "tristeza": 2, "culpa": 1 } },
        "timeline": {
            "events": [{
                "id": "8c4f9f2e-6f9b-4a82-9a07-0a5a2fb2b8f3",
                "stage": "Adultez Mayor",
                "age": 68,
                "description": "Jubilación"
            }]
        }
    }"#;

    let record = ClinicalRecord::from_json(json).expect("parse partial record");
    assert_eq!(record.patient.age, Some(25));
    assert_eq!(record.scales.total("bdi"), Some(3));
    assert_eq!(record.timeline.events[0].stage, LifeStage::AdultezMayor);
    assert!(record.diagnosis.impression.is_none());

    let reencoded = record.to_json().expect("encode record");
    let reparsed = ClinicalRecord::from_json(&reencoded).expect("reparse record");
    assert_eq!(reparsed, record);
}
