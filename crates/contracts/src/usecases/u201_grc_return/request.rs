use crate::shared::api_error::Notice;
use crate::shared::enquiry::action::{validate_required, ActionError, ActionForm, Requirement};
use crate::shared::enquiry::row::{EnquiryRow, DEFECTIVE_QTY, GOOD_QTY, INVOICE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrcAction {
    #[default]
    SaveDraft,
    Report,
    Finalize,
}

impl GrcAction {
    pub fn all() -> [GrcAction; 3] {
        [GrcAction::SaveDraft, GrcAction::Report, GrcAction::Finalize]
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrcAction::SaveDraft => "Save as Draft",
            GrcAction::Report => "Report",
            GrcAction::Finalize => "Finalize",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.label() == label)
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            GrcAction::SaveDraft => "Saved as draft successfully!",
            GrcAction::Report => "Report generated successfully!",
            GrcAction::Finalize => "Finalized successfully!",
        }
    }

    /// Report opens a PDF and leaves the page as is
    pub fn reloads_on_success(&self) -> bool {
        !matches!(self, GrcAction::Report)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    #[default]
    All,
    Good,
    Defective,
}

impl ReportType {
    pub fn all() -> [ReportType; 3] {
        [ReportType::All, ReportType::Good, ReportType::Defective]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::All => "All",
            ReportType::Good => "Good",
            ReportType::Defective => "Defective",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == value)
    }

    pub fn includes(&self, good: f64, defective: f64) -> bool {
        match self {
            ReportType::All => good + defective > 0.0,
            ReportType::Good => good > 0.0,
            ReportType::Defective => defective > 0.0,
        }
    }
}

/// Companion form of the GRC return page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrcForm {
    pub division: String,
    pub challan_number: String,
    pub action: GrcAction,
    pub report_type: ReportType,
    pub sent_through: String,
    pub docket_number: String,
}

impl GrcForm {
    /// Courier details are carried by the list rows; the first row wins
    pub fn prefill_from(&mut self, rows: &[EnquiryRow]) {
        let first = rows.first();
        self.sent_through = first.map(|r| r.text("sent_through")).unwrap_or_default();
        self.docket_number = first.map(|r| r.text("docket_number")).unwrap_or_default();
    }

    fn as_action_form(&self) -> ActionForm {
        let mut form = ActionForm::new();
        form.insert("docket_number".into(), self.docket_number.clone());
        form.insert("sent_through".into(), self.sent_through.clone());
        form
    }
}

const FINALIZE_REQUIREMENTS: &[Requirement] = &[
    Requirement::new("docket_number", "Consignment No. is required", ""),
    Requirement::new("sent_through", "Returned Through is required", ""),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrcSaveRow {
    pub spare_code: String,
    pub grc_number: Value,
    pub good_qty: u32,
    pub defective_qty: u32,
    pub invoice: String,
    pub docket_number: String,
    pub sent_through: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrcReportRow {
    pub grc_number: Value,
    pub grc_date: Value,
    pub spare_code: String,
    pub spare_description: String,
    pub actual_pending_qty: Value,
    pub good_qty: Value,
    pub defective_qty: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrcReportPayload {
    pub challan_number: String,
    pub division: String,
    pub sent_through: String,
    pub docket_number: String,
    pub grc_rows: Vec<GrcReportRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrcFinalizeRow {
    pub spare_code: String,
    pub grc_number: Value,
    pub good_qty: u32,
    pub defective_qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrcFinalizePayload {
    pub challan_number: String,
    pub division: String,
    pub sent_through: String,
    pub docket_number: String,
    pub grc_rows: Vec<GrcFinalizeRow>,
}

/// What the Execute button sends for the selected action
#[derive(Debug, Clone, PartialEq)]
pub enum GrcRequest {
    Save(Vec<GrcSaveRow>),
    Report {
        report_type: ReportType,
        payload: GrcReportPayload,
    },
    Finalize(GrcFinalizePayload),
    /// Finalize over an empty list does nothing
    Skip,
}

fn qty(row: &EnquiryRow, key: &str) -> u32 {
    row.number(key).max(0.0) as u32
}

fn grc_number(row: &EnquiryRow) -> Value {
    match row.get("grc_number") {
        None | Some(Value::Null) => Value::from(0),
        Some(v) => v.clone(),
    }
}

fn passthrough(row: &EnquiryRow, key: &str) -> Value {
    row.get(key).cloned().unwrap_or(Value::Null)
}

/// Every row must keep good + defective within its pending quantity
pub fn validate_quantities(rows: &[EnquiryRow]) -> Result<(), ActionError> {
    match rows.iter().find(|row| {
        row.number(GOOD_QTY) + row.number(DEFECTIVE_QTY) > row.number("actual_pending_qty")
    }) {
        Some(row) => Err(ActionError::Validation(Notice::warning(format!(
            "{}: Quantity Mismatch",
            row.text("spare_code")
        )))),
        None => Ok(()),
    }
}

pub fn build_request(form: &GrcForm, rows: &[EnquiryRow]) -> Result<GrcRequest, ActionError> {
    match form.action {
        GrcAction::SaveDraft => {
            validate_quantities(rows)?;
            Ok(GrcRequest::Save(
                rows.iter()
                    .map(|row| GrcSaveRow {
                        spare_code: row.text("spare_code"),
                        grc_number: grc_number(row),
                        good_qty: qty(row, GOOD_QTY),
                        defective_qty: qty(row, DEFECTIVE_QTY),
                        invoice: row.flag(INVOICE).as_str().to_string(),
                        docket_number: form.docket_number.clone(),
                        sent_through: form.sent_through.clone(),
                    })
                    .collect(),
            ))
        }
        GrcAction::Report => {
            let report_type = form.report_type;
            let grc_rows = rows
                .iter()
                .filter(|row| !row.is_invoiced())
                .filter(|row| report_type.includes(row.number(GOOD_QTY), row.number(DEFECTIVE_QTY)))
                .map(|row| GrcReportRow {
                    grc_number: passthrough(row, "grc_number"),
                    grc_date: passthrough(row, "grc_date"),
                    spare_code: row.text("spare_code"),
                    spare_description: row.text("spare_description"),
                    actual_pending_qty: passthrough(row, "actual_pending_qty"),
                    good_qty: passthrough(row, GOOD_QTY),
                    defective_qty: passthrough(row, DEFECTIVE_QTY),
                })
                .collect();
            Ok(GrcRequest::Report {
                report_type,
                payload: GrcReportPayload {
                    challan_number: form.challan_number.clone(),
                    division: form.division.clone(),
                    sent_through: form.sent_through.clone(),
                    docket_number: form.docket_number.clone(),
                    grc_rows,
                },
            })
        }
        GrcAction::Finalize => {
            if rows.is_empty() {
                return Ok(GrcRequest::Skip);
            }
            validate_required(&form.as_action_form(), FINALIZE_REQUIREMENTS)?;
            validate_quantities(rows)?;
            Ok(GrcRequest::Finalize(GrcFinalizePayload {
                challan_number: form.challan_number.clone(),
                division: form.division.clone(),
                sent_through: form.sent_through.clone(),
                docket_number: form.docket_number.clone(),
                grc_rows: rows
                    .iter()
                    .map(|row| GrcFinalizeRow {
                        spare_code: row.text("spare_code"),
                        grc_number: grc_number(row),
                        good_qty: qty(row, GOOD_QTY),
                        defective_qty: qty(row, DEFECTIVE_QTY),
                    })
                    .collect(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<EnquiryRow> {
        vec![
            EnquiryRow::from(json!({
                "grc_number": 501, "grc_date": "2025-06-02", "spare_code": "FN-CAP-25",
                "spare_description": "Capacitor", "actual_pending_qty": 5,
                "good_qty": 2, "defective_qty": 0, "invoice": "N",
                "sent_through": "Courier", "docket_number": "DK-77"
            })),
            EnquiryRow::from(json!({
                "grc_number": 502, "grc_date": "2025-06-03", "spare_code": "FN-BRG-6202",
                "spare_description": "Bearing", "actual_pending_qty": 4,
                "good_qty": 0, "defective_qty": 3, "invoice": "N"
            })),
            EnquiryRow::from(json!({
                "grc_number": 503, "grc_date": "2025-06-04", "spare_code": "FN-SW-01",
                "spare_description": "Switch", "actual_pending_qty": 2,
                "good_qty": 2, "defective_qty": null, "invoice": "Y"
            })),
        ]
    }

    fn form(action: GrcAction) -> GrcForm {
        let mut form = GrcForm {
            division: "FANS".into(),
            challan_number: "CH-0042".into(),
            action,
            ..GrcForm::default()
        };
        form.prefill_from(&rows());
        form
    }

    #[test]
    fn test_prefill_from_first_row() {
        let f = form(GrcAction::SaveDraft);
        assert_eq!(f.sent_through, "Courier");
        assert_eq!(f.docket_number, "DK-77");

        let mut empty = f.clone();
        empty.prefill_from(&[]);
        assert_eq!(empty.sent_through, "");
    }

    #[test]
    fn test_report_skips_invoiced_and_filters_type() {
        let mut f = form(GrcAction::Report);
        f.report_type = ReportType::Good;
        let Ok(GrcRequest::Report { report_type, payload }) = build_request(&f, &rows()) else {
            panic!("expected report request");
        };
        assert_eq!(report_type, ReportType::Good);
        let codes: Vec<&str> = payload.grc_rows.iter().map(|r| r.spare_code.as_str()).collect();
        assert_eq!(codes, ["FN-CAP-25"]);

        f.report_type = ReportType::All;
        let Ok(GrcRequest::Report { payload, .. }) = build_request(&f, &rows()) else {
            panic!("expected report request");
        };
        assert_eq!(payload.grc_rows.len(), 2);
    }

    #[test]
    fn test_finalize_requires_courier_details() {
        let mut f = form(GrcAction::Finalize);
        f.docket_number = " ".into();
        let err = build_request(&f, &rows()).unwrap_err();
        assert_eq!(err.to_string(), "Consignment No. is required");

        f.docket_number = "DK-77".into();
        f.sent_through.clear();
        let err = build_request(&f, &rows()).unwrap_err();
        assert_eq!(err.to_string(), "Returned Through is required");
    }

    #[test]
    fn test_finalize_on_empty_list_is_skipped() {
        let f = GrcForm {
            action: GrcAction::Finalize,
            ..GrcForm::default()
        };
        assert_eq!(build_request(&f, &[]).unwrap(), GrcRequest::Skip);
    }

    #[test]
    fn test_finalize_payload() {
        let Ok(GrcRequest::Finalize(payload)) = build_request(&form(GrcAction::Finalize), &rows())
        else {
            panic!("expected finalize request");
        };
        assert_eq!(payload.grc_rows.len(), 3);
        assert_eq!(payload.grc_rows[2].defective_qty, 0);
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["challan_number"], "CH-0042");
        assert_eq!(body["grc_rows"][1]["grc_number"], 502);
    }

    #[test]
    fn test_save_rows_carry_form_fields() {
        let Ok(GrcRequest::Save(save)) = build_request(&form(GrcAction::SaveDraft), &rows()) else {
            panic!("expected save request");
        };
        assert_eq!(save[2].invoice, "Y");
        assert!(save.iter().all(|r| r.docket_number == "DK-77"));
    }

    #[test]
    fn test_quantity_mismatch_blocks_save() {
        let mut data = rows();
        data[1].set("good_qty", 3);
        let err = build_request(&form(GrcAction::SaveDraft), &data).unwrap_err();
        assert_eq!(err.to_string(), "FN-BRG-6202: Quantity Mismatch");
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(GrcAction::from_label("Finalize"), Some(GrcAction::Finalize));
        assert!(!GrcAction::Report.reloads_on_success());
        assert_eq!(ReportType::parse("Defective"), Some(ReportType::Defective));
    }
}
