pub mod request;

pub use request::{build_request, selection_mode, GenerateRfrRequest, RfrForm, PRODUCT_TYPES, RFR_TYPES};

use crate::shared::enquiry::ColumnDef;
use crate::usecases::common::UseCaseMetadata;

pub struct GenerateRfr;

impl UseCaseMetadata for GenerateRfr {
    fn usecase_index() -> &'static str {
        "u204"
    }

    fn usecase_name() -> &'static str {
        "generate_rfr"
    }

    fn display_name() -> &'static str {
        "Generate RFR"
    }
}

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("complaint_number", "Number"),
    ColumnDef::text("customer_name", "Name"),
    ColumnDef::text("product_model", "Model"),
    ColumnDef::text("product_serial_number", "Serial No."),
    ColumnDef::text("current_status", "Current Status"),
];

/// Complaints of a division awaiting RFR
pub fn list_endpoint(division: &str) -> String {
    format!("/complaints/generate_rfr_data/{}", urlencoding::encode(division))
}

pub const NEXT_NUMBER_ENDPOINT: &str = "/complaints/next_rfr_number";

/// Multipart form endpoint
pub const REPORT_ENDPOINT: &str = "/complaints/rfr_report";

/// Key of the number in the next-number response
pub const NEXT_NUMBER_FIELD: &str = "next_rfr_number";
