pub mod dto;

pub use dto::{Count, DashboardData, StatItem, DASHBOARD_ENDPOINT, STORAGE_KEY};
