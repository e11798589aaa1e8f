use crate::shared::http;
use contracts::shared::api_error::ApiError;
use contracts::shared::enquiry::EnquiryRow;
use contracts::usecases::u205_reallocation::{list_endpoint, EmployeesResponse, EMPLOYEES_ENDPOINT};

pub async fn fetch_employees() -> Result<Vec<String>, ApiError> {
    let response: EmployeesResponse = http::get_json(EMPLOYEES_ENDPOINT, "Failed to load employees").await?;
    Ok(response.employees)
}

pub async fn fetch_allocated(technician: &str) -> Result<Vec<EnquiryRow>, ApiError> {
    let page = http::get_page(&list_endpoint(technician), "Failed to load allocated complaints").await?;
    Ok(page.records)
}
