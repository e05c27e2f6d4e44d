use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use imprint_core::impl_uuid_newtype;

/// Party identifier (author or contact).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(Uuid);

impl_uuid_newtype!(PartyId, "PartyId");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyKind {
    Author,
    Contact,
}

/// Encrypted tax identifier.
///
/// The ciphertext arrives from the upstream encryption service and is stored
/// opaque. Serialization emits only the masked form: the raw/encrypted value
/// never crosses a serialization or export boundary. A malformed `last4`
/// degrades to the generic placeholder instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxId {
    ciphertext: String,
    last4: Option<String>,
}

impl TaxId {
    pub fn from_parts(ciphertext: String, last4: Option<String>) -> Self {
        Self { ciphertext, last4 }
    }

    /// Masked display form, e.g. `***-**-1234`.
    pub fn masked(&self) -> String {
        match &self.last4 {
            Some(last4) if last4.len() == 4 && last4.chars().all(|c| c.is_ascii_digit()) => {
                format!("***-**-{last4}")
            }
            _ => "***-**-****".to_string(),
        }
    }
}

impl Serialize for TaxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.masked())
    }
}

/// An author or customer contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub kind: PartyKind,
    pub name: String,
    pub email: Option<String>,
    pub tax_id: Option<TaxId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_id_masks_to_last_four() {
        let tax_id = TaxId::from_parts("ciphertext".to_string(), Some("1234".to_string()));
        assert_eq!(tax_id.masked(), "***-**-1234");
    }

    #[test]
    fn malformed_last_four_degrades_to_generic_placeholder() {
        for last4 in [None, Some("12".to_string()), Some("abcd".to_string())] {
            let tax_id = TaxId::from_parts("ciphertext".to_string(), last4);
            assert_eq!(tax_id.masked(), "***-**-****");
        }
    }

    #[test]
    fn serialization_never_contains_the_ciphertext() {
        let party = Party {
            id: PartyId::new(),
            kind: PartyKind::Author,
            name: "A. Author".to_string(),
            email: None,
            tax_id: Some(TaxId::from_parts(
                "very-secret-ciphertext".to_string(),
                Some("1234".to_string()),
            )),
        };

        let json = serde_json::to_string(&party).unwrap();
        assert!(!json.contains("very-secret-ciphertext"));
        assert!(json.contains("***-**-1234"));
    }
}
