use crate::shared::enquiry_list::{EnquiryConfig, EnquiryListPage};
use crate::layout::tabs::tab_label_for_key;
use contracts::enums::company::Company;
use contracts::projections::p101_stock_enquiry::{endpoint, filter_fields, COLUMNS};
use leptos::prelude::*;

pub fn tab_key(company: Company) -> String {
    format!("p101_stock_enquiry_{}", company.route_suffix())
}

#[component]
pub fn StockEnquiry(company: Company) -> impl IntoView {
    let key = tab_key(company);
    let config = EnquiryConfig {
        title: tab_label_for_key(&key).to_string(),
        key,
        endpoint: endpoint(company),
        columns: COLUMNS,
        filter_fields: filter_fields(company),
        company,
    };
    view! { <EnquiryListPage config=config /> }
}
