use crate::enums::company::Company;
use serde::{Deserialize, Serialize};

/// Spare master entry used to feed code/description suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpareListItem {
    pub spare_code: String,
    pub spare_description: String,
}

impl SpareListItem {
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "spare_code" => Some(&self.spare_code),
            "spare_description" => Some(&self.spare_description),
            _ => None,
        }
    }
}

/// `GET /stock_<company>/spare_list`
pub fn endpoint(company: Company) -> String {
    format!("{}/spare_list", company.stock_prefix())
}

/// Distinct values of `key` containing `typed`, ignoring case. Blank input
/// yields nothing.
pub fn suggestions(items: &[SpareListItem], key: &str, typed: &str) -> Vec<String> {
    let needle = typed.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = Vec::new();
    for value in items.iter().filter_map(|item| item.field(key)) {
        if value.to_lowercase().contains(&needle) && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<SpareListItem> {
        vec![
            SpareListItem {
                spare_code: "FN-CAP-25".into(),
                spare_description: "Capacitor 2.5 MFD".into(),
            },
            SpareListItem {
                spare_code: "FN-BRG-6202".into(),
                spare_description: "Bearing 6202".into(),
            },
            SpareListItem {
                spare_code: "PM-CAP-40".into(),
                spare_description: "Capacitor 2.5 MFD".into(),
            },
        ]
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(suggestions(&items(), "spare_code", "cap"), ["FN-CAP-25", "PM-CAP-40"]);
        assert_eq!(
            suggestions(&items(), "spare_description", "CAPACITOR"),
            ["Capacitor 2.5 MFD"]
        );
    }

    #[test]
    fn test_blank_input_or_unknown_key() {
        assert!(suggestions(&items(), "spare_code", "  ").is_empty());
        assert!(suggestions(&items(), "division", "FN").is_empty());
    }
}
