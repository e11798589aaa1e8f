use crate::enums::company::Company;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DASHBOARD_ENDPOINT: &str = "/menu/dashboard";

/// localStorage key of the cached payload
pub const STORAGE_KEY: &str = "dashboardData";

/// Counter reported either as one total or per company code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Total(i64),
    PerCompany(BTreeMap<String, i64>),
}

impl Default for Count {
    fn default() -> Self {
        Count::Total(0)
    }
}

impl Count {
    /// `None` sums every company
    pub fn for_company(&self, company: Option<Company>) -> i64 {
        match (self, company) {
            (Count::Total(n), _) => *n,
            (Count::PerCompany(map), Some(c)) => map.get(c.code()).copied().unwrap_or(0),
            (Count::PerCompany(map), None) => map.values().sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintSection {
    /// Chart inputs, passed through untouched
    #[serde(default)]
    pub division_wise_status: Value,
    #[serde(default)]
    pub complaint_type: Value,
    #[serde(default)]
    pub all_complaints: Count,
    #[serde(default)]
    pub crm_open_complaints: Count,
    #[serde(default)]
    pub escalation_complaints: Count,
    #[serde(default)]
    pub spare_pending_complaints: Count,
    #[serde(default)]
    pub mail_to_be_sent_complaints: Count,
}

impl Default for ComplaintSection {
    fn default() -> Self {
        Self {
            division_wise_status: Value::Array(Vec::new()),
            complaint_type: Value::Object(Default::default()),
            all_complaints: Count::default(),
            crm_open_complaints: Count::default(),
            escalation_complaints: Count::default(),
            spare_pending_complaints: Count::default(),
            mail_to_be_sent_complaints: Count::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSection {
    #[serde(default)]
    pub division_wise_donut: Value,
    #[serde(default)]
    pub number_of_items_in_stock: Count,
    #[serde(default)]
    pub number_of_items_in_godown: Count,
    #[serde(default)]
    pub number_of_items_issued_in_advance: Count,
    #[serde(default)]
    pub number_of_items_under_process: Count,
}

impl Default for StockSection {
    fn default() -> Self {
        Self {
            division_wise_donut: Value::Array(Vec::new()),
            number_of_items_in_stock: Count::PerCompany(BTreeMap::new()),
            number_of_items_in_godown: Count::PerCompany(BTreeMap::new()),
            number_of_items_issued_in_advance: Count::PerCompany(BTreeMap::new()),
            number_of_items_under_process: Count::PerCompany(BTreeMap::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrcSection {
    #[serde(default)]
    pub division_wise_donut: Value,
}

impl Default for GrcSection {
    fn default() -> Self {
        Self {
            division_wise_donut: Value::Array(Vec::new()),
        }
    }
}

/// `GET /menu/dashboard`. `Default` is the all-zero payload shown when the
/// fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub complaint: ComplaintSection,
    #[serde(default)]
    pub stock: StockSection,
    #[serde(default)]
    pub grc: GrcSection,
}

/// One counter card
#[derive(Debug, Clone, PartialEq)]
pub struct StatItem {
    pub section: &'static str,
    pub label: &'static str,
    pub value: i64,
}

impl DashboardData {
    pub fn stat_items(&self, company: Option<Company>) -> Vec<StatItem> {
        let c = &self.complaint;
        let s = &self.stock;
        [
            ("Complaints", "All Complaints", &c.all_complaints),
            ("Complaints", "CRM Open", &c.crm_open_complaints),
            ("Complaints", "Escalation", &c.escalation_complaints),
            ("Complaints", "Spare Pending", &c.spare_pending_complaints),
            ("Complaints", "Mail To Be Sent", &c.mail_to_be_sent_complaints),
            ("Stock", "Items In Stock", &s.number_of_items_in_stock),
            ("Stock", "Items In Godown", &s.number_of_items_in_godown),
            ("Stock", "Issued In Advance", &s.number_of_items_issued_in_advance),
            ("Stock", "Under Process", &s.number_of_items_under_process),
        ]
        .into_iter()
        .map(|(section, label, count)| StatItem {
            section,
            label,
            value: count.for_company(company),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_all_zero() {
        let data = DashboardData::default();
        assert!(data.stat_items(None).iter().all(|item| item.value == 0));
        assert_eq!(data.stat_items(Some(Company::Cgcel)).len(), 9);
    }

    #[test]
    fn test_per_company_counts() {
        let data: DashboardData = serde_json::from_str(
            r#"{
                "complaint": {"crm_open_complaints": {"CGCEL": 5, "CGPISL": 3}, "all_complaints": 40},
                "stock": {"number_of_items_in_stock": {"CGCEL": 150, "CGPISL": 90}},
                "grc": {"division_wise_donut": {"CGCEL": [], "CGPISL": []}}
            }"#,
        )
        .unwrap();
        let crm = &data.complaint.crm_open_complaints;
        assert_eq!(crm.for_company(None), 8);
        assert_eq!(crm.for_company(Some(Company::Cgpisl)), 3);
        assert_eq!(data.complaint.all_complaints.for_company(Some(Company::Cgcel)), 40);
        let stock = data.stat_items(Some(Company::Cgcel));
        let in_stock = stock.iter().find(|i| i.label == "Items In Stock").unwrap();
        assert_eq!(in_stock.value, 150);
    }

    #[test]
    fn test_fallback_serializes_expected_sections() {
        let value = serde_json::to_value(DashboardData::default()).unwrap();
        assert_eq!(value["complaint"]["mail_to_be_sent_complaints"], 0);
        assert!(value["stock"]["number_of_items_in_godown"].is_object());
        assert!(value["grc"]["division_wise_donut"].is_array());
    }
}
