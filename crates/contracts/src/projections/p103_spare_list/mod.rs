pub mod dto;

pub use dto::{endpoint, suggestions, SpareListItem};
