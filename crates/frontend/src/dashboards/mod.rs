pub mod d100_service_summary;

pub use d100_service_summary::ui::ServiceSummaryDashboard;
