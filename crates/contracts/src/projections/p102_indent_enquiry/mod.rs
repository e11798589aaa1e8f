pub mod dto;

pub use dto::{columns, endpoint, filter_fields};
