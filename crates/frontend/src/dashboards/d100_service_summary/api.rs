use crate::shared::config::config;
use crate::shared::http;
use crate::shared::storage;
use chrono::Utc;
use contracts::dashboards::d100_service_summary::{DashboardData, DASHBOARD_ENDPOINT, STORAGE_KEY};
use contracts::shared::api_error::ApiError;
use contracts::shared::ttl_cache::{CacheLookup, CachedEntry};

/// Last stored payload, fresh or stale
pub fn cached() -> CacheLookup<DashboardData> {
    let stored = storage::get_item(STORAGE_KEY);
    CachedEntry::restore(stored.as_deref(), Utc::now(), config().cache_ttl())
}

pub async fn fetch_dashboard() -> Result<DashboardData, ApiError> {
    let data: DashboardData = http::get_json(DASHBOARD_ENDPOINT, "Failed to load dashboard").await?;
    store(&data);
    Ok(data)
}

fn store(data: &DashboardData) {
    match serde_json::to_string(&CachedEntry::new(data, Utc::now())) {
        Ok(text) => storage::set_item(STORAGE_KEY, &text),
        Err(e) => log::warn!("dashboard cache not written: {}", e),
    }
}
