pub mod request;

pub use request::{build_request, GenerateIndentRequest, IndentForm, INDENT_FLAG};

use crate::enums::company::Company;
use crate::shared::enquiry::ColumnDef;
use crate::usecases::common::UseCaseMetadata;

pub struct GenerateIndent;

impl UseCaseMetadata for GenerateIndent {
    fn usecase_index() -> &'static str {
        "u202"
    }

    fn usecase_name() -> &'static str {
        "generate_indent"
    }

    fn display_name() -> &'static str {
        "Generate Indent"
    }
}

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("spare_code", "Spare Code"),
    ColumnDef::text("spare_description", "Spare Description"),
    ColumnDef::number("indent_qty", "Quantity"),
    ColumnDef::flag(INDENT_FLAG, "Generate"),
];

/// Spares with raised but not yet generated indents
pub fn list_endpoint(company: Company, division: &str) -> String {
    format!(
        "{}/indent_details/{}",
        company.stock_prefix(),
        urlencoding::encode(division)
    )
}

pub fn next_indent_endpoint(company: Company) -> String {
    format!("{}/next_indent_code", company.stock_prefix())
}

pub fn generate_endpoint(company: Company) -> String {
    format!("{}/generate_indent", company.stock_prefix())
}
