use serde::{Deserialize, Serialize};

/// Identity of the treating psychologist, printed in the report header and
/// next to the signature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Professional {
    pub name: Option<String>,
    /// Cédula profesional.
    pub credential: Option<String>,
    pub specialty: Option<String>,
    pub institution: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
}

impl Professional {
    /// Address and contact collapsed into the single header line the report
    /// prints, or `None` when both are absent.
    pub fn contact_line(&self) -> Option<String> {
        if self.address.is_none() && self.contact.is_none() {
            return None;
        }
        let line = format!(
            "{}  {}",
            self.address.as_deref().unwrap_or(""),
            self.contact.as_deref().unwrap_or(""),
        );
        Some(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_line_absent_when_both_fields_missing() {
        assert_eq!(Professional::default().contact_line(), None);
    }

    #[test]
    fn contact_line_trims_missing_halves() {
        let profesional = Professional {
            contact: Some("55 1234 5678".to_string()),
            ..Default::default()
        };
        assert_eq!(profesional.contact_line().as_deref(), Some("55 1234 5678"));

        let ambos = Professional {
            address: Some("Av. Reforma 100".to_string()),
            contact: Some("55 1234 5678".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ambos.contact_line().as_deref(),
            Some("Av. Reforma 100  55 1234 5678"),
        );
    }
}
