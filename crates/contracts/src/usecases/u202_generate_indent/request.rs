use crate::shared::api_error::Notice;
use crate::shared::enquiry::action::{require_selection, validate_required, ActionError, ActionForm, Requirement};
use crate::shared::enquiry::row::{flagged, EnquiryRow};
use serde::{Deserialize, Serialize};

/// Row flag marking a spare for the indent being generated
pub const INDENT_FLAG: &str = "indent";

const REQUIREMENTS: &[Requirement] = &[
    Requirement::new("indent_number", "Indent number is required.", "Refresh the page."),
    Requirement::new("division", "Division is required.", "Please select a division."),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndentForm {
    pub indent_number: String,
    /// `YYYY-MM-DD`, display only
    pub indent_date: String,
    pub division: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateIndentRequest {
    pub indent_number: String,
    pub division: String,
    pub spare_code: Vec<String>,
}

impl GenerateIndentRequest {
    pub fn success_notice(&self) -> Notice {
        Notice::success("Indent created successfully!")
            .with_resolution(format!("Indent Number: {}", self.indent_number))
    }
}

pub fn build_request(form: &IndentForm, rows: &[EnquiryRow]) -> Result<GenerateIndentRequest, ActionError> {
    let selected = flagged(rows, INDENT_FLAG);
    require_selection(
        selected.len(),
        "No records selected.",
        "Please select at least one record.",
    )?;

    let mut fields = ActionForm::new();
    fields.insert("indent_number".into(), form.indent_number.clone());
    fields.insert("division".into(), form.division.clone());
    validate_required(&fields, REQUIREMENTS)?;

    Ok(GenerateIndentRequest {
        indent_number: form.indent_number.trim().to_string(),
        division: form.division.clone(),
        spare_code: selected.iter().map(|row| row.text("spare_code")).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::enquiry::row::toggle_row_flag;
    use serde_json::json;

    fn rows() -> Vec<EnquiryRow> {
        ["FN-CAP-25", "FN-BRG-6202", "FN-SW-01"]
            .iter()
            .map(|code| EnquiryRow::from(json!({ "spare_code": code, "indent_qty": 4 })))
            .collect()
    }

    fn form() -> IndentForm {
        IndentForm {
            indent_number: "IND/25/0108".into(),
            indent_date: "2025-06-10".into(),
            division: "FANS".into(),
        }
    }

    #[test]
    fn test_nothing_flagged() {
        let notice = build_request(&form(), &rows()).unwrap_err().to_notice();
        assert_eq!(notice.message, "No records selected.");
        assert_eq!(notice.resolution.as_deref(), Some("Please select at least one record."));
    }

    #[test]
    fn test_selection_checked_before_form() {
        let mut data = rows();
        toggle_row_flag(&mut data, 0, INDENT_FLAG);
        let mut f = form();
        f.indent_number.clear();
        let notice = build_request(&f, &data).unwrap_err().to_notice();
        assert_eq!(notice.message, "Indent number is required.");
        assert_eq!(notice.resolution.as_deref(), Some("Refresh the page."));

        let mut f = form();
        f.division.clear();
        assert_eq!(
            build_request(&f, &data).unwrap_err().to_string(),
            "Division is required."
        );
    }

    #[test]
    fn test_payload_lists_flagged_spares() {
        let mut data = rows();
        toggle_row_flag(&mut data, 0, INDENT_FLAG);
        toggle_row_flag(&mut data, 2, INDENT_FLAG);
        let request = build_request(&form(), &data).unwrap();
        assert_eq!(request.spare_code, ["FN-CAP-25", "FN-SW-01"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "indent_number": "IND/25/0108",
                "division": "FANS",
                "spare_code": ["FN-CAP-25", "FN-SW-01"]
            })
        );
        assert_eq!(
            request.success_notice().resolution.as_deref(),
            Some("Indent Number: IND/25/0108")
        );
    }
}
