use crate::enums::company::Company;
use crate::shared::api_error::Notice;
use crate::shared::enquiry::action::ActionError;
use crate::shared::enquiry::filter::FilterCriteria;
use crate::shared::enquiry::row::{flagged, EnquiryRow};

pub const EXPORT_FLAG: &str = "export_flag";

/// Parameters from the page URL plus the fixed mail-pending markers
pub fn enquiry_criteria(url_params: &FilterCriteria, company: Option<Company>) -> FilterCriteria {
    let mut criteria = url_params.clone();
    criteria.set("mail_to_be_sent_complaints", "Y");
    if let Some(company) = company {
        criteria.set("complaint_head", company.code());
    }
    criteria
}

/// Rows flagged for export, in list order
pub fn select_for_export(rows: &[EnquiryRow]) -> Result<Vec<EnquiryRow>, ActionError> {
    let selected: Vec<EnquiryRow> = flagged(rows, EXPORT_FLAG).into_iter().cloned().collect();
    if selected.is_empty() {
        return Err(ActionError::Validation(Notice::warning(
            "No records selected for export.",
        )));
    }
    Ok(selected)
}

pub fn complaint_numbers(rows: &[EnquiryRow]) -> Vec<String> {
    rows.iter().map(|row| row.text("complaint_number")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::enquiry::row::normalize_rows;
    use serde_json::json;

    #[test]
    fn test_criteria_markers_override_url() {
        let url = FilterCriteria::new()
            .with("product_division", "FANS")
            .with("mail_to_be_sent_complaints", "N");
        let criteria = enquiry_criteria(&url, Some(Company::Cgpisl));
        assert_eq!(
            criteria.query_string(),
            "complaint_head=CGPISL&mail_to_be_sent_complaints=Y&product_division=FANS"
        );
        assert_eq!(enquiry_criteria(&url, None).get("complaint_head"), "");
    }

    #[test]
    fn test_export_selection() {
        let mut rows = vec![
            EnquiryRow::from(json!({"complaint_number": "C-1001"})),
            EnquiryRow::from(json!({"complaint_number": "C-1002", "export_flag": "Y"})),
        ];
        normalize_rows(&mut rows, EXPORT_FLAG);
        let selected = select_for_export(&rows).unwrap();
        assert_eq!(complaint_numbers(&selected), ["C-1002"]);

        rows[1].toggle_flag(EXPORT_FLAG);
        let err = select_for_export(&rows).unwrap_err();
        assert_eq!(err.to_string(), "No records selected for export.");
    }
}
