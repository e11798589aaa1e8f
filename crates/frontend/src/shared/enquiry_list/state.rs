use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::config;
use contracts::shared::enquiry::{EnquiryRow, FilterCriteria, PaginationState};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Filters and page window of one enquiry tab; kept in the app context so a
/// tab switch does not lose them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnquiryListState {
    pub criteria: FilterCriteria,
    pub pagination: PaginationState,
}

impl Default for EnquiryListState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::new(),
            pagination: PaginationState::new(config().ui.default_page_size),
        }
    }
}

impl EnquiryListState {
    pub fn restore(saved: Option<serde_json::Value>) -> Self {
        saved
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Search from the first page with the current filters
    pub fn search(&mut self) {
        self.pagination = self.pagination.at_page(1);
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
        self.pagination = self.pagination.reset();
    }
}

/// Clear resets every filter and empties the table; nothing is refetched
/// until the next Search
pub fn clear_results(state: &mut EnquiryListState, rows: &mut Vec<EnquiryRow>) {
    state.clear();
    rows.clear();
}

pub fn create_state(ctx: AppGlobalContext, form_key: &str) -> RwSignal<EnquiryListState> {
    let state = RwSignal::new(EnquiryListState::restore(ctx.get_form_state(form_key)));
    let key = form_key.to_string();
    Effect::new(move |_| {
        let current = state.get();
        if let Ok(value) = serde_json::to_value(&current) {
            ctx.set_form_state(key.clone(), value);
        }
    });
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restore_roundtrips_saved_state() {
        let mut state = EnquiryListState::default();
        state.criteria.set("division", "PUMP");
        state.pagination = state.pagination.with_limit(50).at_page(4);
        let saved = serde_json::to_value(&state).unwrap();

        let restored = EnquiryListState::restore(Some(saved));
        assert_eq!(restored, state);
    }

    #[test]
    fn test_restore_falls_back_to_default() {
        assert_eq!(EnquiryListState::restore(None), EnquiryListState::default());
        let broken = EnquiryListState::restore(Some(json!({"criteria": 3})));
        assert_eq!(broken.pagination.page, 1);
        assert!(broken.criteria.is_empty());
    }

    #[test]
    fn test_clear_keeps_page_size() {
        let mut state = EnquiryListState::default();
        state.criteria.set("spare_code", "FN-CAP-25");
        state.pagination = state.pagination.with_limit(200).at_page(3);
        state.clear();
        assert!(state.criteria.is_empty());
        assert_eq!((state.pagination.page, state.pagination.limit), (1, 200));
    }

    #[test]
    fn test_clear_leaves_no_rows() {
        let mut state = EnquiryListState::default();
        state.criteria.set("division", "FANS");
        state.pagination.total_records = 340;
        state.pagination.total_known = true;
        let mut rows = vec![
            EnquiryRow::from(json!({"spare_code": "FN-CAP-25"})),
            EnquiryRow::from(json!({"spare_code": "FN-BRG-02"})),
        ];

        clear_results(&mut state, &mut rows);
        assert!(rows.is_empty());
        assert!(state.criteria.is_empty());
        assert_eq!(state.pagination.total_records, 0);
        assert!(!state.pagination.total_known);
    }
}
