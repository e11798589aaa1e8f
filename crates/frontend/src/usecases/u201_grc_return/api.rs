use crate::shared::http;
use contracts::enums::company::Company;
use contracts::shared::api_error::ApiError;
use contracts::shared::enquiry::row::{normalize_rows, INVOICE};
use contracts::shared::enquiry::{EnquiryRow, Payload};
use contracts::usecases::u201_grc_return::{
    finalize_endpoint, list_endpoint, next_challan_endpoint, report_endpoint, save_endpoint,
    GrcRequest,
};

pub async fn fetch_rows(company: Company, division: &str) -> Result<Vec<EnquiryRow>, ApiError> {
    let page = http::get_page(&list_endpoint(company, division), "Failed to load GRC records").await?;
    let mut rows = page.records;
    normalize_rows(&mut rows, INVOICE);
    Ok(rows)
}

/// Empty when the lookup fails; the user can still type a number
pub async fn next_challan_code(company: Company) -> String {
    match http::get_json::<serde_json::Value>(&next_challan_endpoint(company), "").await {
        Ok(value) => http::lookup_field(&value, &company.next_code_field("challan_code")),
        Err(_) => String::new(),
    }
}

fn json<T: serde::Serialize>(body: &T) -> Result<Payload, ApiError> {
    serde_json::to_value(body)
        .map(Payload::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// What a successful execute produced
pub enum GrcOutcome {
    Done,
    Report(Vec<u8>),
    Skipped,
}

pub async fn execute(company: Company, request: GrcRequest) -> Result<GrcOutcome, ApiError> {
    let fallback = "Error while processing GRC return";
    match request {
        GrcRequest::Save(rows) => {
            let payload = json(&rows)?;
            http::post(&save_endpoint(company), &payload, fallback).await?;
            Ok(GrcOutcome::Done)
        }
        GrcRequest::Report {
            report_type,
            payload,
        } => {
            let payload = json(&payload)?;
            let pdf =
                http::post_for_blob(&report_endpoint(company, report_type), &payload, fallback)
                    .await?;
            Ok(GrcOutcome::Report(pdf))
        }
        GrcRequest::Finalize(body) => {
            let payload = json(&body)?;
            http::post(&finalize_endpoint(company), &payload, fallback).await?;
            Ok(GrcOutcome::Done)
        }
        GrcRequest::Skip => Ok(GrcOutcome::Skipped),
    }
}
