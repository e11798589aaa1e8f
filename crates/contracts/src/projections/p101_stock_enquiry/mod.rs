pub mod dto;

pub use dto::{endpoint, filter_fields, COLUMNS};
