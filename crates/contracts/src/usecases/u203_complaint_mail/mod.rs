pub mod request;

pub use request::{complaint_numbers, enquiry_criteria, select_for_export, EXPORT_FLAG};

use crate::shared::enquiry::ColumnDef;
use crate::usecases::common::UseCaseMetadata;

pub struct ComplaintMail;

impl UseCaseMetadata for ComplaintMail {
    fn usecase_index() -> &'static str {
        "u203"
    }

    fn usecase_name() -> &'static str {
        "complaint_mail"
    }

    fn display_name() -> &'static str {
        "Mail To Be Sent"
    }

    fn description() -> &'static str {
        "Complaints awaiting the mail to head office"
    }
}

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("complaint_number", "Complaint"),
    ColumnDef::date("complaint_date", "Date"),
    ColumnDef::text("customer_name", "Customer Name"),
    ColumnDef::text("product_model", "Model"),
    ColumnDef::text("product_serial_number", "Serial Number"),
    ColumnDef::text("current_status", "Current Status"),
    ColumnDef::flag(EXPORT_FLAG, "Export"),
];

/// Export preview drops the toggle column
pub fn preview_columns() -> &'static [ColumnDef] {
    &COLUMNS[..COLUMNS.len() - 1]
}

pub const ENQUIRY_ENDPOINT: &str = "/complaints/enquiry";

/// Body is the bare list of complaint numbers
pub const SEND_ENDPOINT: &str = "/complaints/mail_sent_to_ho";
