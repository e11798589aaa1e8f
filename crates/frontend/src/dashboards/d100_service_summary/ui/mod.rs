mod dashboard;

pub use dashboard::{ServiceSummaryDashboard, TAB_KEY};
