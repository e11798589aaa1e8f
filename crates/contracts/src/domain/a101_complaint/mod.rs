pub mod aggregate;

pub use aggregate::{create_path, update_path, ComplaintNumber, EntryType};
