use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a filter field is rendered in the side panel
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    Text,
    Date,
    Number,
    /// Fixed `(value, label)` option list; the empty option means "any"
    Select(&'static [SelectOption]),
    /// Option list whose values double as labels, e.g. divisions
    Choice(&'static [&'static str]),
    /// Free text with a suggestion list loaded from the given source key
    Suggest(&'static str),
}

pub type SelectOption = (&'static str, &'static str);

/// `Y`/`N` availability select used by stock filters
pub const AVAILABILITY_OPTIONS: &[SelectOption] = &[("Y", "Available"), ("N", "Not Available")];

#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn new(key: &'static str, label: &'static str, kind: FilterKind) -> Self {
        Self { key, label, kind }
    }
}

/// Current filter values. Blank values mean "no filter" and never reach the
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    values: BTreeMap<String, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), value.to_string());
    }

    /// Raw value as typed, including blanks
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn active_count(&self) -> usize {
        self.values.values().filter(|v| !v.trim().is_empty()).count()
    }

    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }

    /// URL-encoded `k=v&k=v`; empty when no field holds a value
    pub fn query_string(&self) -> String {
        encode_pairs(self.query_pairs())
    }
}

pub(crate) fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_produce_empty_query() {
        let criteria = FilterCriteria::new()
            .with("division", "")
            .with("spare_code", "   ")
            .with("from_indent_date", "");
        assert!(criteria.is_empty());
        assert_eq!(criteria.query_string(), "");
        assert_eq!(FilterCriteria::new().query_string(), "");
    }

    #[test]
    fn test_only_filled_fields_are_sent_and_encoded() {
        let criteria = FilterCriteria::new()
            .with("division", "FANS")
            .with("spare_code", "")
            .with("spare_description", " CAP 2.5 MFD & SCREW ");
        assert_eq!(criteria.active_count(), 2);
        assert_eq!(
            criteria.query_string(),
            "division=FANS&spare_description=CAP%202.5%20MFD%20%26%20SCREW"
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut criteria = FilterCriteria::new().with("division", "PUMP");
        criteria.clear();
        assert_eq!(criteria.get("division"), "");
        assert!(criteria.is_empty());
    }
}
