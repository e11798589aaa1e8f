//! Tab content registry: tab key → view. Company pages are keyed
//! `<page>_<company suffix>`.

use crate::dashboards::ServiceSummaryDashboard;
use crate::projections::p101_stock_enquiry::ui::StockEnquiry;
use crate::projections::p102_indent_enquiry::ui::IndentEnquiry;
use crate::usecases::u201_grc_return::view::GrcReturnView;
use crate::usecases::u202_generate_indent::view::GenerateIndentView;
use crate::usecases::u203_complaint_mail::view::ComplaintMailView;
use crate::usecases::u204_generate_rfr::view::GenerateRfrView;
use crate::usecases::u205_reallocation::view::ReallocationView;
use contracts::enums::company::Company;
use leptos::logging::log;
use leptos::prelude::*;

/// Splits `p101_stock_enquiry_cgcel` into the page key and its company
fn company_page(key: &str) -> Option<(&str, Company)> {
    let (page, suffix) = key.rsplit_once('_')?;
    Company::from_code(suffix).map(|company| (page, company))
}

pub fn render_tab_content(key: &str) -> AnyView {
    if let Some((page, company)) = company_page(key) {
        match page {
            "p101_stock_enquiry" => return view! { <StockEnquiry company=company /> }.into_any(),
            "p102_indent_enquiry" => return view! { <IndentEnquiry company=company /> }.into_any(),
            "u201_grc_return" => return view! { <GrcReturnView company=company /> }.into_any(),
            "u202_generate_indent" => {
                return view! { <GenerateIndentView company=company /> }.into_any()
            }
            _ => {}
        }
    }

    match key {
        "d100_service_summary" => view! { <ServiceSummaryDashboard /> }.into_any(),
        "u203_complaint_mail" => view! { <ComplaintMailView /> }.into_any(),
        "u204_generate_rfr" => view! { <GenerateRfrView /> }.into_any(),
        "u205_reallocation" => view! { <ReallocationView /> }.into_any(),
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_page() {
        assert_eq!(
            company_page("p101_stock_enquiry_cgpisl"),
            Some(("p101_stock_enquiry", Company::Cgpisl))
        );
        assert_eq!(company_page("u203_complaint_mail"), None);
        assert_eq!(company_page("d100"), None);
    }
}
