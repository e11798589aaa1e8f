use crate::shared::api_error::Notice;
use crate::shared::enquiry::action::{require_selection, validate_required, ActionError, ActionForm, Payload, Requirement};
use crate::shared::enquiry::selection::{Selection, SelectionMode};
use serde::{Deserialize, Serialize};

pub const RFR_TYPES: &[&str] = &["SINGLE", "BULK"];
pub const PRODUCT_TYPES: &[&str] = &["UG", "OW"];

const REQUIREMENTS: &[Requirement] = &[
    Requirement::new("product_division", "Division is required", ""),
    Requirement::new("rfr_type", "RFR Type is required", ""),
    Requirement::new("product_type", "Product Type is required", ""),
    Requirement::new("rfr_number", "RFR Number is required", ""),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RfrForm {
    pub product_division: String,
    pub rfr_type: String,
    pub product_type: String,
    pub rfr_number: String,
}

impl RfrForm {
    fn as_action_form(&self) -> ActionForm {
        [
            ("product_division", &self.product_division),
            ("rfr_type", &self.rfr_type),
            ("product_type", &self.product_type),
            ("rfr_number", &self.rfr_number),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
    }
}

/// A SINGLE RFR covers exactly one complaint
pub fn selection_mode(rfr_type: &str) -> SelectionMode {
    if rfr_type == "SINGLE" {
        SelectionMode::Single
    } else {
        SelectionMode::Multiple
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRfrRequest {
    pub complaint_numbers: Vec<String>,
    pub product_division: String,
    pub rfr_number: String,
    pub rfr_type: String,
    pub product_type: String,
}

impl GenerateRfrRequest {
    /// The report endpoint reads form fields; the number list goes as JSON text
    pub fn to_payload(&self) -> Result<Payload, ActionError> {
        let body = Payload::json(self)?;
        match body {
            Payload::Json(value) => Ok(Payload::multipart_from(&value)),
            other => Ok(other),
        }
    }

    pub fn success_notice(&self) -> Notice {
        Notice::success("RFR generated successfully.")
            .with_resolution(format!("RFR Number: {}", self.rfr_number))
    }
}

/// Form fields are checked before the selection
pub fn build_request(form: &RfrForm, selection: &Selection) -> Result<GenerateRfrRequest, ActionError> {
    validate_required(&form.as_action_form(), REQUIREMENTS)?;
    require_selection(selection.len(), "Select at least one complaint", "")?;
    Ok(GenerateRfrRequest {
        complaint_numbers: selection.ids().to_vec(),
        product_division: form.product_division.clone(),
        rfr_number: form.rfr_number.trim().to_string(),
        rfr_type: form.rfr_type.clone(),
        product_type: form.product_type.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RfrForm {
        RfrForm {
            product_division: "PUMP".into(),
            rfr_type: "BULK".into(),
            product_type: "UG".into(),
            rfr_number: "RFR/25/0031".into(),
        }
    }

    #[test]
    fn test_form_errors_in_order() {
        let sel = Selection::default();
        let err = build_request(&RfrForm::default(), &sel).unwrap_err();
        assert_eq!(err.to_string(), "Division is required");

        let mut f = form();
        f.product_type.clear();
        assert_eq!(build_request(&f, &sel).unwrap_err().to_string(), "Product Type is required");

        let err = build_request(&form(), &sel).unwrap_err();
        assert_eq!(err.to_string(), "Select at least one complaint");
    }

    #[test]
    fn test_single_type_limits_selection() {
        let mut sel = Selection::new(selection_mode("SINGLE"));
        sel.select_all(vec!["C-11", "C-12"]);
        let mut f = form();
        f.rfr_type = "SINGLE".into();
        let request = build_request(&f, &sel).unwrap();
        assert_eq!(request.complaint_numbers, ["C-11"]);
    }

    #[test]
    fn test_multipart_payload() {
        let mut sel = Selection::new(selection_mode("BULK"));
        sel.toggle("C-11");
        sel.toggle("C-14");
        let request = build_request(&form(), &sel).unwrap();
        let Payload::Multipart(fields) = request.to_payload().unwrap() else {
            panic!("expected multipart");
        };
        let numbers = fields.iter().find(|(k, _)| k == "complaint_numbers").unwrap();
        assert_eq!(numbers.1, r#"["C-11","C-14"]"#);
        assert!(fields.contains(&("rfr_type".to_string(), "BULK".to_string())));
        assert_eq!(
            request.success_notice().resolution.as_deref(),
            Some("RFR Number: RFR/25/0031")
        );
    }
}
