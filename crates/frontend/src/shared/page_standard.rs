//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab carries an HTML `id` in the format
//! `{key}--{category}` (e.g. `"p101_stock_enquiry_cgcel--list"`) and a
//! `data-page-category` with one of the constants below.

/// Enquiry table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Counter dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page: GRC return, indent, RFR, mail, reallocation.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Builds the `{key}--{category}` page id
pub fn page_id(key: &str, category: &str) -> String {
    format!("{key}--{category}")
}

/// Validate that a page id matches the `{key}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((key, category)) => !key.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("u201_grc_return_cgcel", PAGE_CAT_USECASE);
        assert_eq!(id, "u201_grc_return_cgcel--usecase");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("d100_service_summary"));
        assert!(!is_valid_page_id("--list"));
    }
}
