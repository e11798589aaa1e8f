pub mod request;

pub use request::{build_request, EmployeesResponse, ReallocateRequest, ReallocationForm};

use crate::shared::enquiry::ColumnDef;
use crate::usecases::common::UseCaseMetadata;

pub struct Reallocation;

impl UseCaseMetadata for Reallocation {
    fn usecase_index() -> &'static str {
        "u205"
    }

    fn usecase_name() -> &'static str {
        "reallocation"
    }

    fn display_name() -> &'static str {
        "Complaint Reallocation"
    }
}

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("complaint_number", "Complaint Number"),
    ColumnDef::date("complaint_date", "Date"),
    ColumnDef::text("customer_name", "Customer Name"),
    ColumnDef::text("customer_address", "Customer Address"),
    ColumnDef::text("product_division", "Division"),
    ColumnDef::text("current_status", "Current Status"),
];

/// Open complaints currently allocated to `technician`
pub fn list_endpoint(technician: &str) -> String {
    format!(
        "/complaints/complaint_allocation_data/{}",
        urlencoding::encode(technician)
    )
}

pub const EMPLOYEES_ENDPOINT: &str = "/complaints/employees";

pub const REALLOCATE_ENDPOINT: &str = "/complaints/reallocate_complaints";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technician_name_is_encoded() {
        assert_eq!(
            list_endpoint("Ravi Kumar"),
            "/complaints/complaint_allocation_data/Ravi%20Kumar"
        );
    }
}
