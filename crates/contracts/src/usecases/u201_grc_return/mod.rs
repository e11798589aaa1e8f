pub mod request;

pub use request::{
    build_request, validate_quantities, GrcAction, GrcFinalizePayload, GrcFinalizeRow, GrcForm,
    GrcReportPayload, GrcReportRow, GrcRequest, GrcSaveRow, ReportType,
};

use crate::enums::company::Company;
use crate::shared::enquiry::ColumnDef;
use crate::usecases::common::UseCaseMetadata;

pub struct GrcReturn;

impl UseCaseMetadata for GrcReturn {
    fn usecase_index() -> &'static str {
        "u201"
    }

    fn usecase_name() -> &'static str {
        "grc_return"
    }

    fn display_name() -> &'static str {
        "GRC Return"
    }

    fn description() -> &'static str {
        "Return spares received against GRC as good or defective, with challan print"
    }
}

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("grc_number", "GRC Number"),
    ColumnDef::date("grc_date", "GRC Date"),
    ColumnDef::text("spare_code", "Spare Code"),
    ColumnDef::text("spare_description", "Spare Description"),
    ColumnDef::number("issue_qty", "Issue Qty"),
    ColumnDef::number("grc_pending_qty", "GRC Pending Qty"),
    ColumnDef::number("actual_pending_qty", "Actual Pending Qty"),
    ColumnDef::number("returned_qty", "Returned Qty"),
    ColumnDef::quantity("good_qty", "Good Qty"),
    ColumnDef::quantity("defective_qty", "Defective Qty"),
    ColumnDef::flag("invoice", "Invoice"),
];

/// `GET /grc_<company>/grc_return_by_division/{division}`
pub fn list_endpoint(company: Company, division: &str) -> String {
    format!(
        "{}/grc_return_by_division/{}",
        company.grc_prefix(),
        urlencoding::encode(division)
    )
}

pub fn next_challan_endpoint(company: Company) -> String {
    format!("{}/next_challan_code", company.grc_prefix())
}

pub fn save_endpoint(company: Company) -> String {
    format!("{}/save_grc_return", company.grc_prefix())
}

pub fn finalize_endpoint(company: Company) -> String {
    format!("{}/finalize_grc_return", company.grc_prefix())
}

/// Report type travels in the path, not in the body
pub fn report_endpoint(company: Company, report_type: ReportType) -> String {
    format!("{}/print_report/{}", company.grc_prefix(), report_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(
            list_endpoint(Company::Cgcel, "FANS"),
            "/grc_cgcel/grc_return_by_division/FANS"
        );
        assert_eq!(
            report_endpoint(Company::Cgpisl, ReportType::Defective),
            "/grc_cgpisl/print_report/Defective"
        );
        assert_eq!(GrcReturn::full_name(), "u201_grc_return");
    }
}
