use crate::shared::api_error::Notice;
use crate::shared::enquiry::action::{require_selection, validate_required, ActionError, ActionForm, Requirement};
use crate::shared::enquiry::selection::Selection;
use serde::{Deserialize, Serialize};

const REQUIREMENTS: &[Requirement] = &[
    Requirement::new(
        "old_technician",
        "Old technician is required.",
        "Choose the technician allocated to.",
    ),
    Requirement::new(
        "new_technician",
        "New technician is required.",
        "Choose the technician to reallocate to.",
    ),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default)]
    pub employees: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReallocationForm {
    pub old_technician: String,
    pub new_technician: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReallocateRequest {
    pub complaint_numbers: Vec<String>,
    pub old_technician: String,
    pub new_technician: String,
}

impl ReallocateRequest {
    pub fn success_notice(&self) -> Notice {
        Notice::success("Complaints reallocated successfully!")
            .with_resolution(format!("Reallocated to {}.", self.new_technician))
    }
}

pub fn build_request(form: &ReallocationForm, selection: &Selection) -> Result<ReallocateRequest, ActionError> {
    let mut fields = ActionForm::new();
    fields.insert("old_technician".into(), form.old_technician.clone());
    fields.insert("new_technician".into(), form.new_technician.clone());
    validate_required(&fields, REQUIREMENTS)?;
    require_selection(selection.len(), "Select at least one complaint", "")?;
    Ok(ReallocateRequest {
        complaint_numbers: selection.ids().to_vec(),
        old_technician: form.old_technician.clone(),
        new_technician: form.new_technician.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technicians_required() {
        let sel = Selection::default();
        let notice = build_request(&ReallocationForm::default(), &sel)
            .unwrap_err()
            .to_notice();
        assert_eq!(notice.message, "Old technician is required.");

        let form = ReallocationForm {
            old_technician: "Ravi".into(),
            ..Default::default()
        };
        let notice = build_request(&form, &sel).unwrap_err().to_notice();
        assert_eq!(notice.message, "New technician is required.");
        assert_eq!(
            notice.resolution.as_deref(),
            Some("Choose the technician to reallocate to.")
        );
    }

    #[test]
    fn test_request_body() {
        let mut sel = Selection::default();
        sel.toggle("C-2001");
        sel.toggle("C-2004");
        let form = ReallocationForm {
            old_technician: "Ravi".into(),
            new_technician: "Suresh".into(),
        };
        let request = build_request(&form, &sel).unwrap();
        assert_eq!(request.complaint_numbers, ["C-2001", "C-2004"]);
        assert_eq!(
            request.success_notice().resolution.as_deref(),
            Some("Reallocated to Suresh.")
        );
    }

    #[test]
    fn test_employees_payload() {
        let parsed: EmployeesResponse =
            serde_json::from_str(r#"{"employees":["Ravi","Suresh"]}"#).unwrap();
        assert_eq!(parsed.employees.len(), 2);
        let empty: EmployeesResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.employees.is_empty());
    }
}
