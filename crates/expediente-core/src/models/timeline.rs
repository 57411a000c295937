use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Life stage an event belongs to. Serialises under the display names the
/// editor shows, so record JSON reads the way the form did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeStage {
    #[serde(rename = "Infancia")]
    Infancia,
    #[serde(rename = "Adolescencia")]
    Adolescencia,
    #[serde(rename = "Adultez")]
    Adultez,
    #[serde(rename = "Adultez Mayor")]
    AdultezMayor,
}

impl LifeStage {
    pub const ALL: [LifeStage; 4] = [
        LifeStage::Infancia,
        LifeStage::Adolescencia,
        LifeStage::Adultez,
        LifeStage::AdultezMayor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LifeStage::Infancia => "Infancia",
            LifeStage::Adolescencia => "Adolescencia",
            LifeStage::Adultez => "Adultez",
            LifeStage::AdultezMayor => "Adultez Mayor",
        }
    }
}

/// A significant life event. The id is a removal handle only and is never
/// rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: Uuid,
    pub stage: LifeStage,
    pub age: Option<u8>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeTimeline {
    /// Events in the order they were captured.
    pub events: Vec<LifeEvent>,
}

impl LifeTimeline {
    /// Appends an event tagged with a fresh id and returns that id.
    pub fn add(
        &mut self,
        stage: LifeStage,
        age: Option<u8>,
        description: impl Into<String>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.events.push(LifeEvent {
            id,
            stage,
            age,
            description: description.into(),
        });
        id
    }

    /// Removes the event with the given id; returns whether one was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        self.events.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_round_trips() {
        let mut timeline = LifeTimeline::default();
        timeline.add(LifeStage::Infancia, Some(7), "Mudanza a otra ciudad");
        let snapshot = timeline.clone();

        let id = timeline.add(LifeStage::Adultez, Some(29), "Cambio de empleo");
        assert_eq!(timeline.events.len(), 2);
        assert!(timeline.remove(id));
        assert_eq!(timeline, snapshot);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut timeline = LifeTimeline::default();
        timeline.add(LifeStage::Adolescencia, None, "Primer concurso");
        assert!(!timeline.remove(Uuid::new_v4()));
        assert_eq!(timeline.events.len(), 1);
    }

    #[test]
    fn stage_serialises_under_display_name() {
        let json = serde_json::to_string(&LifeStage::AdultezMayor).expect("serialize");
        assert_eq!(json, "\"Adultez Mayor\"");
    }
}
