use crate::shared::http;
use contracts::enums::company::Company;
use contracts::shared::api_error::ApiError;
use contracts::shared::enquiry::row::normalize_rows;
use contracts::shared::enquiry::EnquiryRow;
use contracts::usecases::u202_generate_indent::{list_endpoint, next_indent_endpoint, INDENT_FLAG};

pub async fn fetch_rows(company: Company, division: &str) -> Result<Vec<EnquiryRow>, ApiError> {
    let page = http::get_page(&list_endpoint(company, division), "Failed to load indent details").await?;
    let mut rows = page.records;
    normalize_rows(&mut rows, INDENT_FLAG);
    Ok(rows)
}

pub async fn next_indent_code(company: Company) -> String {
    match http::get_json::<serde_json::Value>(&next_indent_endpoint(company), "").await {
        Ok(value) => http::lookup_field(&value, &company.next_code_field("indent_code")),
        Err(e) => {
            log::warn!("next indent code unavailable: {}", e);
            String::new()
        }
    }
}
