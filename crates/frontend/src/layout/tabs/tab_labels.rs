//! Tab titles, keyed like the registry. Company pages carry the company code
//! in the title so both companies can be open side by side.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards ────────────────────────────────────────────────────
        "d100_service_summary" => "Dashboard",

        // ── Stock ─────────────────────────────────────────────────────────
        "p101_stock_enquiry_cgcel" => "Stock Enquiry (CGCEL)",
        "p101_stock_enquiry_cgpisl" => "Stock Enquiry (CGPISL)",
        "p102_indent_enquiry_cgcel" => "Indent Enquiry (CGCEL)",
        "p102_indent_enquiry_cgpisl" => "Indent Enquiry (CGPISL)",
        "u202_generate_indent_cgcel" => "Generate Indent (CGCEL)",
        "u202_generate_indent_cgpisl" => "Generate Indent (CGPISL)",

        // ── GRC ───────────────────────────────────────────────────────────
        "u201_grc_return_cgcel" => "GRC Return (CGCEL)",
        "u201_grc_return_cgpisl" => "GRC Return (CGPISL)",

        // ── Complaints ────────────────────────────────────────────────────
        "u203_complaint_mail" => "Mail To Be Sent",
        "u204_generate_rfr" => "Generate RFR",
        "u205_reallocation" => "Reallocation",

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::company::Company;
    use contracts::usecases::common::UseCaseMetadata;
    use contracts::usecases::u203_complaint_mail::ComplaintMail;

    #[test]
    fn test_company_tabs_have_labels() {
        for company in Company::all() {
            for prefix in ["p101_stock_enquiry", "p102_indent_enquiry", "u201_grc_return", "u202_generate_indent"] {
                let key = format!("{}_{}", prefix, company.route_suffix());
                assert!(tab_label_for_key(&key).contains(company.code()), "{}", key);
            }
        }
        assert_eq!(tab_label_for_key(&ComplaintMail::full_name()), "Mail To Be Sent");
        assert_eq!(tab_label_for_key("unknown"), "");
    }
}
