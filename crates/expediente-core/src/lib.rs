//! expediente-core
//!
//! Pure domain types for the psychological clinical record. No I/O —
//! this is the shared vocabulary of the expediente system.

pub mod error;
pub mod models;

pub use error::CoreError;
pub use models::record::ClinicalRecord;
