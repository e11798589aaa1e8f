use crate::shared::http;
use contracts::shared::api_error::ApiError;
use contracts::shared::enquiry::row::normalize_rows;
use contracts::shared::enquiry::{EnquiryPage, EnquiryRequest, FilterCriteria, PaginationState};
use contracts::usecases::u203_complaint_mail::{ENQUIRY_ENDPOINT, EXPORT_FLAG};

pub async fn fetch_page(
    criteria: &FilterCriteria,
    pagination: PaginationState,
) -> Result<EnquiryPage, ApiError> {
    let url = EnquiryRequest::new(criteria, pagination).url(ENQUIRY_ENDPOINT);
    let mut page = http::get_page(&url, "Failed to fetch data").await?;
    normalize_rows(&mut page.records, EXPORT_FLAG);
    Ok(page)
}
