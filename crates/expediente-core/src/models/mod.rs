pub mod diagnosis;
pub mod history;
pub mod patient;
pub mod professional;
pub mod record;
pub mod scales;
pub mod soap;
pub mod timeline;

pub use diagnosis::Diagnosis;
pub use history::HistoryExam;
pub use patient::Patient;
pub use professional::Professional;
pub use record::ClinicalRecord;
pub use scales::ScaleScores;
pub use soap::{ClinicalLog, SessionEntry};
pub use timeline::{LifeEvent, LifeStage, LifeTimeline};
