//! Editing-session behaviour: drafts, list round-trips, score validation,
//! signature capture and resets.

use expediente_core::models::{LifeStage, Professional};
use expediente_session::{RecordSession, SessionError};

#[test]
fn blank_timeline_draft_is_refused() {
    let mut session = RecordSession::new();
    session.timeline_draft_mut().description = "   ".to_string();
    assert_eq!(session.commit_timeline_event(), None);
    assert!(session.record().timeline.events.is_empty());
}

#[test]
fn committing_clears_the_draft_and_tags_the_event() {
    let mut session = RecordSession::new();
    {
        let draft = session.timeline_draft_mut();
        draft.stage = LifeStage::Infancia;
        draft.age = Some(8);
        draft.description = "Separación de los padres".to_string();
    }
    let id = session.commit_timeline_event().expect("commit");

    assert_eq!(session.timeline_draft().description, "");
    assert_eq!(session.timeline_draft().stage, LifeStage::Adultez);

    let events = &session.record().timeline.events;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].stage, LifeStage::Infancia);
}

#[test]
fn add_then_remove_returns_the_list_to_its_prior_state() {
    let mut session = RecordSession::new();
    session.timeline_draft_mut().description = "Primer empleo".to_string();
    session.commit_timeline_event().expect("commit");
    let snapshot = session.record().clone();

    session.timeline_draft_mut().description = "Mudanza".to_string();
    let id = session.commit_timeline_event().expect("commit");
    assert!(session.remove_timeline_event(id));
    assert_eq!(session.record(), &snapshot);
}

#[test]
fn session_draft_requires_a_date_and_rejects_garbage() {
    let mut session = RecordSession::new();
    session.session_draft_mut().objective = "Psicoeducación".to_string();
    assert!(matches!(session.commit_session_entry(), Ok(None)));

    session.session_draft_mut().date = "hace dos martes".to_string();
    assert!(matches!(
        session.commit_session_entry(),
        Err(SessionError::InvalidDate { .. }),
    ));

    session.session_draft_mut().date = "2026-03-02".to_string();
    let id = session.commit_session_entry().expect("commit").expect("id");
    assert!(session.remove_session_entry(id));
    assert!(session.record().clinical_log.sessions.is_empty());
}

#[test]
fn scale_scores_are_validated_at_the_boundary() {
    let mut session = RecordSession::new();
    session.set_scale_score("bdi", "tristeza", 4).expect("in range");
    assert_eq!(session.record().scales.total("bdi"), Some(4));

    assert!(session.set_scale_score("bdi", "tristeza", 5).is_err());
    assert!(session.set_scale_score("bdi", "autoestima", 2).is_err());
    assert!(matches!(
        session.set_scale_score("stai", "tension", 2),
        Err(SessionError::UnknownInstrument(id)) if id == "stai",
    ));
    // The rejected edits must not have touched the captured scores.
    assert_eq!(session.record().scales.total("bdi"), Some(4));
}

#[test]
fn signature_png_is_none_until_ink_exists() {
    let mut session = RecordSession::new();
    assert!(session.signature_png().expect("encode").is_none());

    session.signature_mut().begin_stroke(20.0, 60.0);
    session.signature_mut().extend_stroke(180.0, 65.0);
    session.signature_mut().end_stroke();
    let png = session.signature_png().expect("encode").expect("ink");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn reset_patient_keeps_the_professional_configuration() {
    let mut session = RecordSession::new();
    session.replace_professional(Professional {
        name: Some("Dra. Laura Méndez".to_string()),
        ..Default::default()
    });
    session.toggle_history_tag("Trauma");
    session.set_diagnosis(Some("Impresión preliminar".to_string()));
    session.signature_mut().begin_stroke(0.0, 0.0);
    session.signature_mut().extend_stroke(10.0, 10.0);
    session.signature_mut().end_stroke();

    session.reset_patient();
    assert_eq!(
        session.record().professional.name.as_deref(),
        Some("Dra. Laura Méndez"),
    );
    assert!(session.record().patient.history_tags.is_empty());
    assert!(session.record().diagnosis.impression.is_none());
    assert!(!session.signature().has_ink());

    session.clear_professional();
    assert!(session.record().professional.name.is_none());
}
