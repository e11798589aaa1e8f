use super::filter::{encode_pairs, FilterCriteria};
use super::row::EnquiryRow;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 100;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[25, 50, 100, 200, 500];

/// Page/limit state of an enquiry list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: usize,
    pub limit: usize,
    pub total_records: usize,
    /// Set when the backend reported `total_records` for the current result
    pub total_known: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl PaginationState {
    pub fn new(limit: usize) -> Self {
        Self {
            page: 1,
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            total_records: 0,
            total_known: false,
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.limit
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// A reported `total_records` decides on its own. The full-page rule
    /// (`rows_on_page == limit`) applies only to plain-array responses,
    /// where the total is unknown.
    pub fn has_next(&self, rows_on_page: usize) -> bool {
        if self.total_known {
            self.offset() + rows_on_page < self.total_records
        } else {
            rows_on_page == self.limit
        }
    }

    pub fn at_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn next_page(self) -> Self {
        self.at_page(self.page + 1)
    }

    pub fn previous_page(self) -> Self {
        self.at_page(self.page.saturating_sub(1))
    }

    /// New page size restarts from the first page with no known total
    pub fn with_limit(self, limit: usize) -> Self {
        Self::new(limit)
    }

    /// First page, same size, result total forgotten
    pub fn reset(self) -> Self {
        Self::new(self.limit)
    }

    pub fn apply(&mut self, page: &EnquiryPage) {
        self.total_records = page.total_records;
        self.total_known = page.total_known;
    }
}

/// Either a raw row array or the paged envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnquiryResponse {
    Paged {
        records: Vec<EnquiryRow>,
        #[serde(default)]
        total_records: Option<usize>,
    },
    Rows(Vec<EnquiryRow>),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnquiryPage {
    pub records: Vec<EnquiryRow>,
    pub total_records: usize,
    pub total_known: bool,
}

impl EnquiryResponse {
    pub fn into_page(self) -> EnquiryPage {
        match self {
            EnquiryResponse::Paged {
                records,
                total_records,
            } => EnquiryPage {
                total_records: total_records.unwrap_or(0),
                total_known: total_records.is_some(),
                records,
            },
            EnquiryResponse::Rows(records) => EnquiryPage {
                total_records: records.len(),
                total_known: false,
                records,
            },
            EnquiryResponse::Other(_) => EnquiryPage::default(),
        }
    }

    pub fn parse(body: &str) -> Result<EnquiryPage, serde_json::Error> {
        serde_json::from_str::<EnquiryResponse>(body).map(EnquiryResponse::into_page)
    }
}

/// Filters plus page window of one enquiry fetch
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryRequest<'a> {
    pub criteria: &'a FilterCriteria,
    pub pagination: PaginationState,
}

impl<'a> EnquiryRequest<'a> {
    pub fn new(criteria: &'a FilterCriteria, pagination: PaginationState) -> Self {
        Self {
            criteria,
            pagination,
        }
    }

    pub fn query_string(&self) -> String {
        let limit = self.pagination.limit.to_string();
        let offset = self.pagination.offset().to_string();
        let mut pairs = self.criteria.query_pairs();
        pairs.push(("limit", &limit));
        pairs.push(("offset", &offset));
        encode_pairs(pairs)
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}?{}", base, self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope() {
        let page = EnquiryResponse::parse(
            r#"{"records":[{"spare_code":"A1"},{"spare_code":"A2"}],"total_records":57}"#,
        )
        .unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].display("spare_code"), "A1");
        assert_eq!(page.total_records, 57);
        assert!(page.total_known);
    }

    #[test]
    fn test_raw_array_total_is_length() {
        let page = EnquiryResponse::parse(r#"[{"a":1},{"a":2},{"a":3}]"#).unwrap();
        assert_eq!(page.total_records, 3);
        assert!(!page.total_known);
    }

    #[test]
    fn test_unexpected_shape_is_empty_page() {
        let page = EnquiryResponse::parse(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(page, EnquiryPage::default());
    }

    #[test]
    fn test_next_enabled_only_for_full_page() {
        let state = PaginationState::new(100);
        assert!(state.has_next(100));
        assert!(!state.has_next(99));
        assert!(!state.has_previous());
    }

    #[test]
    fn test_next_uses_reported_total() {
        let mut state = PaginationState::new(100);
        state.apply(&EnquiryPage {
            records: Vec::new(),
            total_records: 250,
            total_known: true,
        });
        assert!(state.has_next(100));
        let last = state.at_page(3);
        assert!(!last.has_next(50));
        let exact = PaginationState { total_records: 100, ..state };
        assert!(!exact.has_next(100));
    }

    #[test]
    fn test_offsets_for_division_search() {
        let criteria = FilterCriteria::new().with("division", "FANS");
        let state = PaginationState::new(25);

        let first = EnquiryRequest::new(&criteria, state);
        assert_eq!(first.query_string(), "division=FANS&limit=25&offset=0");

        let third = EnquiryRequest::new(&criteria, state.at_page(3));
        assert_eq!(third.pagination.offset(), 50);
        assert_eq!(
            third.url("/stock_cgcel/enquiry"),
            "/stock_cgcel/enquiry?division=FANS&limit=25&offset=50"
        );
    }

    #[test]
    fn test_page_navigation_bounds() {
        let state = PaginationState::new(50).at_page(2);
        assert_eq!(state.previous_page().page, 1);
        assert_eq!(state.previous_page().previous_page().page, 1);
        assert_eq!(state.next_page().page, 3);
        let resized = state.with_limit(200);
        assert_eq!((resized.page, resized.limit), (1, 200));
        assert_eq!(PaginationState::new(0).limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_resize_forgets_previous_total() {
        let mut state = PaginationState::new(100).at_page(2);
        state.apply(&EnquiryPage {
            records: Vec::new(),
            total_records: 250,
            total_known: true,
        });
        let resized = state.with_limit(25);
        assert_eq!(resized.total_records, 0);
        assert!(!resized.total_known);
        assert!(resized.has_next(25));

        let reset = state.reset();
        assert_eq!((reset.page, reset.limit, reset.total_records), (1, 100, 0));
        assert!(!reset.total_known);
    }
}
