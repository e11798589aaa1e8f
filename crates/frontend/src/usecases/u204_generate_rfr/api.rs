use crate::shared::http;
use contracts::shared::api_error::ApiError;
use contracts::shared::enquiry::EnquiryRow;
use contracts::usecases::u204_generate_rfr::{list_endpoint, NEXT_NUMBER_ENDPOINT, NEXT_NUMBER_FIELD};

pub async fn fetch_rows(division: &str) -> Result<Vec<EnquiryRow>, ApiError> {
    let page = http::get_page(&list_endpoint(division), "Failed to load complaints").await?;
    Ok(page.records)
}

pub async fn next_rfr_number() -> String {
    http::get_json::<serde_json::Value>(NEXT_NUMBER_ENDPOINT, "")
        .await
        .map(|value| http::lookup_field(&value, NEXT_NUMBER_FIELD))
        .unwrap_or_default()
}
