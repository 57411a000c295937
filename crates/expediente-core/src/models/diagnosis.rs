use serde::{Deserialize, Serialize};

/// Final diagnostic impression. The signature image travels next to the
/// record into the exporter, never inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    pub impression: Option<String>,
}
