use serde::{Deserialize, Serialize};
use std::fmt;

/// Complaint identifier as issued by the backend or typed from CRM
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintNumber(pub String);

impl ComplaintNumber {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Complaint number is required".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ComplaintNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a complaint entered the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Walk-in or phone complaint; the number comes from the backend sequence
    #[serde(rename = "NEW")]
    New,
    /// Imported from CRM; the CRM number is kept
    #[serde(rename = "CRM")]
    Crm,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::New => "NEW",
            EntryType::Crm => "CRM",
        }
    }

    /// Number sent on create: generated for NEW, typed for CRM
    pub fn complaint_number(
        &self,
        generated: &str,
        typed: &str,
    ) -> Result<ComplaintNumber, String> {
        match self {
            EntryType::New => ComplaintNumber::from_string(generated),
            EntryType::Crm => ComplaintNumber::from_string(typed),
        }
    }
}

/// `POST /complaints/create?entryType=<NEW|CRM>`; the entry type is a query
/// parameter, not part of the body
pub fn create_path(entry_type: EntryType) -> String {
    format!("/complaints/create?entryType={}", entry_type.as_str())
}

/// `PATCH /complaints/update/{complaint_number}`
pub fn update_path(number: &ComplaintNumber) -> String {
    format!("/complaints/update/{}", urlencoding::encode(number.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(create_path(EntryType::Crm), "/complaints/create?entryType=CRM");
        let number = ComplaintNumber::from_string(" CG/2025/0042 ").unwrap();
        assert_eq!(update_path(&number), "/complaints/update/CG%2F2025%2F0042");
    }

    #[test]
    fn test_number_source_follows_entry_type() {
        assert_eq!(
            EntryType::New.complaint_number("C-5001", "").unwrap().value(),
            "C-5001"
        );
        assert_eq!(
            EntryType::Crm.complaint_number("C-5001", "CRM-77").unwrap().value(),
            "CRM-77"
        );
        assert!(EntryType::Crm.complaint_number("C-5001", "  ").is_err());
    }
}
