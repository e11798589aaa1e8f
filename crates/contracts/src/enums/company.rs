use serde::{Deserialize, Serialize};
use std::fmt;

/// Business units tracked in parallel, near-duplicate tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Company {
    #[serde(rename = "CGCEL")]
    Cgcel,
    #[serde(rename = "CGPISL")]
    Cgpisl,
}

impl Company {
    /// Code used in payloads and dashboard keys
    pub fn code(&self) -> &'static str {
        match self {
            Company::Cgcel => "CGCEL",
            Company::Cgpisl => "CGPISL",
        }
    }

    /// Suffix of the backend route prefix, e.g. `stock_cgcel`
    pub fn route_suffix(&self) -> &'static str {
        match self {
            Company::Cgcel => "cgcel",
            Company::Cgpisl => "cgpisl",
        }
    }

    pub fn stock_prefix(&self) -> String {
        format!("/stock_{}", self.route_suffix())
    }

    pub fn grc_prefix(&self) -> String {
        format!("/grc_{}", self.route_suffix())
    }

    /// Key of the "next number" field in lookup responses, e.g.
    /// `next_cgcel_challan_code`
    pub fn next_code_field(&self, what: &str) -> String {
        format!("next_{}_{}", self.route_suffix(), what)
    }

    pub fn divisions(&self) -> &'static [&'static str] {
        match self {
            Company::Cgcel => DIVISIONS,
            Company::Cgpisl => CGPISL_DIVISIONS,
        }
    }

    pub fn all() -> Vec<Company> {
        vec![Company::Cgcel, Company::Cgpisl]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "CGCEL" => Some(Company::Cgcel),
            "CGPISL" => Some(Company::Cgpisl),
            _ => None,
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Product divisions offered in division selects
pub const DIVISIONS: &[&str] = &["FANS", "PUMP", "LIGHT", "SDA", "WHC", "LAPP"];

pub const CGPISL_DIVISIONS: &[&str] = &["FANS", "PUMP", "SDA", "WHC", "FHP", "LT", "HT", "OTHERS"];

/// RFR generation does not cover LAPP
pub const RFR_DIVISIONS: &[&str] = &["FANS", "PUMP", "LIGHT", "SDA", "WHC"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_prefixes() {
        assert_eq!(Company::Cgcel.stock_prefix(), "/stock_cgcel");
        assert_eq!(Company::Cgpisl.grc_prefix(), "/grc_cgpisl");
        assert_eq!(Company::Cgcel.next_code_field("challan_code"), "next_cgcel_challan_code");
        assert_eq!(Company::Cgpisl.next_code_field("indent_code"), "next_cgpisl_indent_code");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Company::from_code(" cgpisl "), Some(Company::Cgpisl));
        assert_eq!(Company::from_code("OTHER"), None);
    }
}
